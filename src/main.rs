//! gherkin-scenarios CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use gherkin_scenarios::{extract_with_options, Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> gherkin_scenarios::Result<String> {
    let options = cli.extract_options();
    let results = extract_with_options(&cli.dir, &options)?;

    let output = match cli.format {
        OutputFormat::Text => results.to_text(),
        OutputFormat::Json => serde_json::to_string_pretty(&results)?,
    };

    Ok(output)
}

/// Log to stderr so stdout carries only the report. `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gherkin_scenarios={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
