use std::io;
use std::process::ExitCode;

use clap::Parser;

use term_folio::config::{Cli, Config};
use term_folio::drivers::{ConsoleInputDriver, ConsoleOutputDriver, OutputDriver};
use term_folio::links::BrowserLinkOpener;
use term_folio::log_buffer::{self, LogHandle};
use term_folio::runner::{build_view, run_view};
use term_folio::tracing_sub;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::try_from(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("term-folio: {err}");
            return ExitCode::from(2);
        }
    };

    log_buffer::set_global_log(LogHandle::default());
    tracing_sub::init(config.log_level);
    log_buffer::install_panic_hook();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("term-folio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> io::Result<()> {
    let mut view = build_view(config, Box::new(BrowserLinkOpener));
    let mut output = ConsoleOutputDriver::new()?;
    let mut input = ConsoleInputDriver::new();

    output.enter()?;
    let result = run_view(
        &mut output,
        &mut input,
        &mut view,
        config.poll_interval,
        config.mouse_capture,
    );
    output.exit()?;
    tracing::info!("exited");
    result
}
