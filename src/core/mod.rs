//=========================================================================
// Simulation Core
//
// Host-independent Game of Life state and the capability contracts the
// engine calls into.
//
// Responsibilities:
// - Hold cell state on a toroidal grid (`cell`, `grid`)
// - Define the B3/S23 transition and the two-pass generation step
// - Define the `Renderer` and `Scheduler` capabilities hosts implement
// - Validate configuration and report construction errors
//
// Notes:
// Nothing in this module touches a window, a GPU surface or a timer.
// Everything runs on the caller's thread, one full generation per call.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod schedule;

//=== Public API ==========================================================

pub use cell::Cell;
pub use config::{
    validate_probability, LifeConfig, DEFAULT_CELL_PIXEL_SIZE, DEFAULT_INITIAL_ALIVE_PROBABILITY,
};
pub use error::{LifeError, Result};
pub use grid::{Grid, GridDimensions};
pub use render::{FrameBuffer, Palette, Renderer, Rgba};
pub use schedule::{frame_channel, FrameScheduler, FrameSignal, ManualScheduler, Scheduler};
