/*!
The live progress line of SPEC_FULL.md §2 ("Progress display"): a single
status line driven by the driver's atomic progress counter, in the spirit of
the teacher's `otter_cli::window` - but degrading silently to no output when
stdout is not a terminal, rather than assuming a raw terminal is always
available.
*/

use std::io::{stdout, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{cursor, terminal, QueueableCommand};

/// A single atomic counter incremented by workers as they finish each
/// candidate variable (spec §4.4 step 6, §5). The driver polls it only for
/// display; nothing downstream depends on its value.
#[derive(Clone, Default)]
pub struct ProgressCounter(Arc<AtomicUsize>);

impl ProgressCounter {
    pub fn new() -> Self {
        ProgressCounter(Arc::new(AtomicUsize::new(0)))
    }

    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// Prints `{done}/{total} variables analyzed` on a single line, redrawn in
/// place, until `total` is reached or `running` reports the workers joined.
/// A no-op when stdout is not a terminal (e.g. piped output, CI logs).
pub fn watch(counter: &ProgressCounter, total: usize, mut still_running: impl FnMut() -> bool) {
    if total == 0 || !std::io::stdout().is_terminal_hint() {
        return;
    }

    let mut out = stdout();
    loop {
        let done = counter.get().min(total);
        let _ = out.queue(cursor::SavePosition);
        let _ = write!(out, "c analyzing {done}/{total} candidate variables");
        let _ = out.queue(terminal::Clear(terminal::ClearType::UntilNewLine));
        let _ = out.queue(cursor::RestorePosition);
        let _ = out.flush();

        if done >= total || !still_running() {
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
    let _ = writeln!(out);
}

/// Thin seam so tests (and non-terminal CI output) never try to move a
/// cursor that doesn't exist.
trait IsTerminalHint {
    fn is_terminal_hint(&self) -> bool;
}

impl IsTerminalHint for std::io::Stdout {
    fn is_terminal_hint(&self) -> bool {
        use std::io::IsTerminal;
        self.is_terminal()
    }
}
