//! SDL smoke test
//!
//! Opens an 800x600 window and alternates a red and a cyan texture every
//! second, printing the elapsed seconds, until the window is closed.

mod sdl_backend;

use std::io;
use std::process::ExitCode;

use sdl_backend::SdlBackend;
use smoke_harness::config::HarnessConfig;
use smoke_harness::foundation::logging;

fn main() -> ExitCode {
    logging::init();

    let config = HarnessConfig::default();
    let stdout = io::stdout();
    match smoke_harness::run(SdlBackend, &config, &mut stdout.lock()) {
        Ok(report) => {
            log::info!("Smoke test passed after {} frames", report.frames_presented);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
