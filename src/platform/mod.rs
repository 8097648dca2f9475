//=========================================================================
// Platform Subsystem
//
// Hosts the engine in a Winit window and paces it at the display refresh
// rate.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ↓                                          │
//  │  resumed()                                   │
//  │   ├─ create Window + Surface                 │
//  │   └─ EngineBuilder::start(FrameBuffer) ──┐   │
//  │                                          │   │
//  │  RedrawRequested (frame boundary)        │   │
//  │   ├─ FrameSignal::take()? ◄── bounded(1) ┘   │
//  │   │    └─ Engine::tick(FrameBuffer)          │
//  │   ├─ Surface::present(FrameBuffer)           │
//  │   └─ window.request_redraw()                 │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: one generation per presented
//   frame, never more
// - **Single thread**: engine, frame buffer and surface all live on the
//   event loop thread; a tick always runs to completion before the
//   event loop regains control
// - **Fixed grid**: resizes rescale the surface, the grid keeps the size
//   chosen at start
//
//=========================================================================

//=== Submodules ==========================================================

mod surface;

//=== External Crates =====================================================

use std::sync::Arc;

use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::{frame_channel, FrameBuffer, FrameScheduler, FrameSignal, LifeError};
use crate::engine::{Engine, EngineBuilder};
use surface::Surface;

//=== Window Defaults =====================================================

const WINDOW_TITLE: &str = "Aetheric Life";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

//=== PlatformError =======================================================

/// Window host initialization and runtime errors.
///
/// All are fatal: the event loop exits and the error is returned from
/// [`run_windowed`].
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[error("Window creation failed: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    /// GPU surface could not be created or presented.
    #[error("Surface error: {0}")]
    Surface(#[from] pixels::Error),

    /// Engine rejected its configuration or the window size.
    #[error("Engine start failed: {0}")]
    Engine(#[from] LifeError),
}

//=== Entry Point =========================================================

/// Opens a window and runs the engine until the window is closed.
///
/// Blocks the calling thread, which must be the main thread on
/// macOS/iOS.
///
/// # Errors
///
/// Returns [`PlatformError`] if the event loop, window, surface or engine
/// cannot be created, or if presenting a frame fails.
pub fn run_windowed(builder: EngineBuilder) -> Result<(), PlatformError> {
    debug!(target: "platform", "Starting Winit event loop");

    let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
    let mut platform = Platform::new(builder);

    event_loop
        .run_app(&mut platform)
        .map_err(PlatformError::EventLoopExecution)?;

    info!(target: "platform", "Platform event loop exited");

    match platform.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

//=== Platform ============================================================

/// Window manager and frame pacer.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(builder)` - nothing is created yet
/// 2. **resumed()**: window, surface, frame buffer and engine are created
/// 3. **RedrawRequested**: tick if armed (not on the first frame), present,
///    request next redraw
/// 4. **Shutdown**: close request or fatal error exits the loop
///
/// # Fields
///
/// - `window`/`surface`: created lazily in `resumed()` (mobile compatibility)
/// - `frame`/`engine`: created once the drawable size is known
/// - `scheduler`/`signal`: the engine's re-arm channel
/// - `seed_frame_pending`: generation 0 is presented before the first tick
/// - `error`: first fatal error, returned after the loop exits
pub(crate) struct Platform {
    builder: EngineBuilder,
    window: Option<Arc<Window>>,
    surface: Option<Surface>,
    frame: Option<FrameBuffer>,
    engine: Option<Engine>,
    scheduler: FrameScheduler,
    signal: FrameSignal,
    seed_frame_pending: bool,
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(builder: EngineBuilder) -> Self {
        let (scheduler, signal) = frame_channel();
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            builder,
            window: None,
            surface: None,
            frame: None,
            engine: None,
            scheduler,
            signal,
            seed_frame_pending: false,
            error: None,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Creates the window, surface, frame buffer and engine.
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Arc::new(event_loop.create_window(attrs)?);
        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        let surface = Surface::new(Arc::clone(&window), size.width, size.height)?;
        let mut frame = FrameBuffer::new(size.width, size.height);
        let engine = self.builder.start(&mut frame, &mut self.scheduler)?;

        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
        self.attach(engine, frame);
        Ok(())
    }

    /// Installs a started engine and the buffer holding its seeded paint.
    fn attach(&mut self, engine: Engine, frame: FrameBuffer) {
        self.engine = Some(engine);
        self.frame = Some(frame);
        self.seed_frame_pending = true;
    }

    /// Runs one generation if the engine re-armed itself since the last
    /// frame. Returns whether a tick ran.
    ///
    /// The first frame after `attach` only presents generation 0; the
    /// armed tick stays pending for the next frame.
    fn advance_frame(&mut self) -> bool {
        let (Some(engine), Some(frame)) = (self.engine.as_mut(), self.frame.as_mut()) else {
            return false;
        };

        if self.seed_frame_pending {
            self.seed_frame_pending = false;
            trace!(target: "platform", "Presenting seeded generation");
            return false;
        }

        if !self.signal.take() {
            trace!(target: "platform", "No tick pending this frame");
            return false;
        }

        engine.tick(frame, &mut self.scheduler);
        true
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        if let (Some(surface), Some(frame)) = (self.surface.as_mut(), self.frame.as_ref()) {
            surface.present(frame)?;
        }
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                if let Some(surface) = self.surface.as_mut() {
                    surface.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                self.advance_frame();

                if let Err(e) = self.present() {
                    self.fail(event_loop, e);
                    return;
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
