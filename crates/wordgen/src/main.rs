//! wordgen — Parallel brute-force wordlist generator.

use wordgen_cli::ui;
use wordgen_core::constants::exit_codes;
use wordgen_lib::{app, config};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            ui::print_error(&format!("{e:#}"));
            exit_codes::ERROR_GENERIC
        }
    };
    std::process::exit(code);
}
