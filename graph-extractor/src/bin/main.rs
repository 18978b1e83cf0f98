//! The CLI front-end of spec §6. An external collaborator per spec §1 -
//! thin by design: parse arguments, run the [Analysis], map errors onto
//! exit codes.

use graph_extractor::Analysis;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = graph_extractor::cli::cli().get_matches();
    let (input, config) = graph_extractor::cli::config_from_args(&matches);

    match Analysis::run_and_write(&input, &config) {
        Ok(output_dir) => {
            println!("c wrote requires/excludes graphs and core/dead lists to {}", output_dir.display());
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("c error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
