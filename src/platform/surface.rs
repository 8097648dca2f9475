//=========================================================================
// Presentation Surface
//=========================================================================
//
// Uploads the CPU frame buffer to the window through `pixels`.
//
// The pixel buffer keeps the size of the drawable area captured when the
// engine started; window resizes only rescale the surface it is
// presented on, so the grid never changes shape.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

//=== Internal Dependencies ===============================================

use super::PlatformError;
use crate::core::FrameBuffer;

//=== Surface =============================================================

/// GPU-backed surface bound to one window.
pub(crate) struct Surface {
    pixels: Pixels<'static>,
}

impl Surface {
    //--- Construction -----------------------------------------------------

    /// Creates a `width × height` pixel buffer presented on `window`.
    pub(crate) fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, PlatformError> {
        let size = window.inner_size();
        let texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, texture)?;

        debug!(
            target: "platform",
            "Surface created: buffer {}x{}, surface {}x{}",
            width,
            height,
            size.width,
            size.height
        );
        Ok(Self { pixels })
    }

    //--- Frame Presentation -----------------------------------------------

    /// Copies `frame` into the pixel buffer and presents it.
    pub(crate) fn present(&mut self, frame: &FrameBuffer) -> Result<(), PlatformError> {
        frame.copy_to(self.pixels.frame_mut());
        self.pixels.render()?;
        Ok(())
    }

    //--- Resizing ---------------------------------------------------------

    /// Rescales the presentation surface. Zero-sized (minimized) windows
    /// are skipped.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Err(e) = self.pixels.resize_surface(width, height) {
            warn!(target: "platform", "Surface resize to {}x{} failed: {}", width, height, e);
        }
    }
}
