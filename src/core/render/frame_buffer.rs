//=========================================================================
// Frame Buffer
//=========================================================================
//
// CPU-side RGBA8 renderer.
//
// Cells are painted as filled squares into a row-major byte buffer that
// hosts copy into their presentation surface once per frame. Squares that
// extend past the right/bottom edge are clipped: the grid rounds its
// column and row counts up, so the last column/row may be partial.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Renderer;

//=== Rgba ================================================================

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Opaque colour from red/green/blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 0xff])
    }
}

//=== Palette =============================================================

/// Colours used for the board.
///
/// # Default Values
///
/// - **background**: `rgb(0, 0, 0)`
/// - **live_cell**: `rgb(0, 64, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub live_cell: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(0, 0, 0),
            live_cell: Rgba::rgb(0, 64, 0),
        }
    }
}

//=== FrameBuffer =========================================================

const BYTES_PER_PIXEL: usize = 4;

/// Offscreen RGBA8 buffer implementing [`Renderer`].
pub struct FrameBuffer {
    width: u32,
    height: u32,
    palette: Palette,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    //--- Construction -----------------------------------------------------

    /// Creates a buffer of `width × height` pixels filled with the
    /// default background.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_palette(width, height, Palette::default())
    }

    pub fn with_palette(width: u32, height: u32, palette: Palette) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        let mut buffer = Self {
            width,
            height,
            palette,
            pixels: vec![0; len],
        };
        buffer.clear_background();
        buffer
    }

    //--- Accessors --------------------------------------------------------

    /// Raw RGBA8 bytes, row-major, `width * height * 4` long.
    pub fn frame(&self) -> &[u8] {
        &self.pixels
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Colour at pixel `(px, py)`, or `None` outside the buffer.
    pub fn pixel(&self, px: u32, py: u32) -> Option<Rgba> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let start = self.offset(px, py);
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);
        Some(Rgba(rgba))
    }

    /// Copies the buffer into a presentation frame of the same size.
    ///
    /// If the target length differs (surface mid-resize) only the
    /// overlapping prefix is copied.
    pub fn copy_to(&self, target: &mut [u8]) {
        let len = target.len().min(self.pixels.len());
        target[..len].copy_from_slice(&self.pixels[..len]);
    }

    //--- Internal Helpers -------------------------------------------------

    fn offset(&self, px: u32, py: u32) -> usize {
        (py as usize * self.width as usize + px as usize) * BYTES_PER_PIXEL
    }

    fn fill_rect(&mut self, x0: u32, y0: u32, size: u32, colour: Rgba) {
        let x1 = x0.saturating_add(size).min(self.width);
        let y1 = y0.saturating_add(size).min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for py in y0..y1 {
            let start = self.offset(x0, py);
            let end = self.offset(x1, py);
            for pixel in self.pixels[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&colour.0);
            }
        }
    }
}

//=== Renderer Implementation =============================================

impl Renderer for FrameBuffer {
    fn drawable_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_background(&mut self) {
        let colour = self.palette.background;
        for pixel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&colour.0);
        }
    }

    fn draw_cell(&mut self, x: usize, y: usize, cell_pixel_size: u32, alive: bool) {
        if !alive {
            return;
        }

        let size = cell_pixel_size as usize;
        let (Ok(px), Ok(py)) = (u32::try_from(x * size), u32::try_from(y * size)) else {
            return;
        };
        let colour = self.palette.live_cell;
        self.fill_rect(px, py, cell_pixel_size, colour);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
