//=========================================================================
// Render Bridge
//=========================================================================
//
// Contract between the simulation core and whatever paints the board.
//
// The core never touches a drawing surface directly. It reports frame
// boundaries and per-cell states through the `Renderer` trait, so hosts
// (a winit window, an offscreen buffer, a test recorder) can be swapped
// without changing simulation code.
//
// Call order per frame:
//   clear_background()
//     ↓
//   draw_cell(x, y, size, alive)   × width·height
//
//=========================================================================

//=== Module Declarations =================================================

mod frame_buffer;

//=== Public API ==========================================================

pub use frame_buffer::{FrameBuffer, Palette, Rgba};

//=== Renderer Trait ======================================================

/// Painting capability consumed by the engine.
///
/// A conforming renderer fills a square of side `cell_pixel_size` at
/// `(x * cell_pixel_size, y * cell_pixel_size)` for every live cell and
/// leaves the background showing for dead ones.
pub trait Renderer {
    /// Drawable area in pixels, as `(width, height)`.
    ///
    /// Queried once when the engine starts to size the grid.
    fn drawable_size(&self) -> (u32, u32);

    /// Fills the whole drawable area with the background colour.
    ///
    /// Called once per frame before any cell is drawn.
    fn clear_background(&mut self);

    /// Paints one cell in its post-transition state.
    fn draw_cell(&mut self, x: usize, y: usize, cell_pixel_size: u32, alive: bool);
}
