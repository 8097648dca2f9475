//=========================================================================
// Life Errors
//=========================================================================
//
// Construction-time failures of the simulation core.
//
// Only building a grid can fail. Once a grid exists, neighbor counting,
// transitions and draw dispatch are total over its state.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== LifeError ===========================================================

/// Misconfiguration rejected while building a [`crate::core::Grid`] or
/// starting an [`crate::Engine`].
///
/// These are fatal: the values are reported back to the caller unchanged,
/// never clamped into range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// Grid must have at least one column and one row.
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Cell edge length in pixels must be at least 1.
    #[error("Cell pixel size must be positive, got {0}")]
    InvalidCellSize(u32),

    /// Seeding probability outside `(0.0, 1.0]` (or NaN).
    #[error("Initial alive probability must be in (0, 1], got {0}")]
    InvalidAliveProbability(f64),
}

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, LifeError>;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<LifeError>();
    }

    #[test]
    fn display_reports_offending_values() {
        let err = LifeError::InvalidDimensions { width: 0, height: 7 };
        assert_eq!(err.to_string(), "Grid dimensions must be positive, got 0x7");

        let err = LifeError::InvalidCellSize(0);
        assert!(err.to_string().contains("got 0"));

        let err = LifeError::InvalidAliveProbability(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}
