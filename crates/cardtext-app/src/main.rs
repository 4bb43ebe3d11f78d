use std::process::ExitCode;

use cardtext_app::cli::Cli;
use cardtext_app::logging;
use cardtext_app::run::run;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter_handle = logging::init();

    match run(&cli, Some(&filter_handle)) {
        Ok(count) => {
            tracing::debug!(count, "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "Run aborted");
            if let Some(message) = err.user_message() {
                println!("{message}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
