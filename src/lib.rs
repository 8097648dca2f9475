//=========================================================================
// Aetheric Life — Library Root
//
// Conway's Game of Life on a toroidal grid, advanced one generation per
// displayed frame.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the simulation core and the `Renderer` / `Scheduler`
//   capabilities hosts implement
// - Provide a winit window host (`run_windowed`) for the binary
//
// Typical usage:
// ```no_run
// use aetheric_life::{run_windowed, EngineBuilder};
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     run_windowed(EngineBuilder::new())?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the grid, the transition rule and the capability traits.
// It has no OS dependencies and can be driven synchronously from tests.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window, the pixel surface and the display-driven
// frame loop. Only its entry point and error type are public.
//
// `engine` defines the per-frame orchestration.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use platform::{run_windowed, PlatformError};
