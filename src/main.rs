mod args;
mod carray;
mod lut;

use std::process::ExitCode;

use anyhow::Result;
use args::ArgHandler;
use log::error;
use log::info;
use log::LevelFilter;

/// Main application entrypoint.
fn main() -> ExitCode {
    env_logger::Builder::new()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // Parse CLI arguments
    let arg_handler = ArgHandler::parse();

    match start(&arg_handler) {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        }
    }
}

/// Convert the configured image.
fn start(arg_handler: &ArgHandler) -> Result<()> {
    let config = arg_handler.config();

    let summary = carray::convert(arg_handler.input(), &config)?;

    info!(
        "Embedded {} byte(s) from {} into {} ({} line(s) of {} bytes)",
        summary.byte_count,
        arg_handler.input().display(),
        summary.path.display(),
        summary.line_count,
        config.bytes_per_line,
    );

    Ok(())
}
