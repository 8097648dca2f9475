//=========================================================================
// Life Configuration
//=========================================================================
//
// Named constants for seeding and sizing the grid, injected into the
// engine at start instead of being read from ambient globals.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::error::{LifeError, Result};

//=== Defaults ============================================================

/// Edge length of one cell in drawable pixels.
pub const DEFAULT_CELL_PIXEL_SIZE: u32 = 10;

/// Probability that a seeded cell starts alive (~20% of the board).
pub const DEFAULT_INITIAL_ALIVE_PROBABILITY: f64 = 0.2;

//=== LifeConfig ==========================================================

/// Configuration consumed once when the engine starts.
///
/// # Default Values
///
/// - **cell_pixel_size**: 10
/// - **initial_alive_probability**: 0.2
/// - **seed**: `None` (OS entropy)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeConfig {
    /// Edge length of one cell in drawable pixels.
    pub cell_pixel_size: u32,

    /// Probability in `(0.0, 1.0]` that a cell is alive after seeding.
    pub initial_alive_probability: f64,

    /// Fixed RNG seed for reproducible boards.
    pub seed: Option<u64>,
}

impl LifeConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.cell_pixel_size == 0 {
            return Err(LifeError::InvalidCellSize(self.cell_pixel_size));
        }

        validate_probability(self.initial_alive_probability)
    }
}

/// Checks that a seeding probability lies in `(0.0, 1.0]` (rejects NaN).
pub fn validate_probability(p: f64) -> Result<()> {
    if !(p > 0.0 && p <= 1.0) {
        return Err(LifeError::InvalidAliveProbability(p));
    }
    Ok(())
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_pixel_size: DEFAULT_CELL_PIXEL_SIZE,
            initial_alive_probability: DEFAULT_INITIAL_ALIVE_PROBABILITY,
            seed: None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
