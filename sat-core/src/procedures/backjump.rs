//! Backjumping: undoing the trail to a target decision level after a
//! conflict has been analyzed.

use crate::context::Context;

/// Undoes every assignment made above `level`, restoring undone atoms to the
/// activity heap so they are eligible to be decided again.
pub fn backjump_to(context: &mut Context, level: usize) {
    context.backtrack_to(level);
}
