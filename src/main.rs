//=========================================================================
// Aetheric Life — Binary Entry Point
//
// Installs logging and runs the windowed host with default settings.
// `RUST_LOG` overrides the default filter; GPU backend logs are off
// unless requested.
//
//=========================================================================

use aetheric_life::{run_windowed, EngineBuilder, PlatformError};

const DEFAULT_LOG_FILTER: &str = "info,wgpu_hal=off,wgpu_core=off,wgpu=off,naga=off";

fn main() -> Result<(), PlatformError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_secs()
        .init();

    run_windowed(EngineBuilder::new())
}
