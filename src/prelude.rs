//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_life::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Simulation state
pub use crate::core::{Cell, Grid, GridDimensions, LifeConfig, LifeError};

// Rendering
pub use crate::core::{FrameBuffer, Palette, Renderer, Rgba};

// Scheduling
pub use crate::core::{frame_channel, FrameScheduler, FrameSignal, ManualScheduler, Scheduler};
