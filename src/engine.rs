//=========================================================================
// Aetheric Life Engine
//
// Orchestrates one grid through repeated generations, one per frame.
//
// Architecture:
// ```text
//     EngineBuilder  ──start()──>  Engine  ──tick()──>  [Generation]
//         │                          │
//         ├─ with_cell_pixel_size()  ├─ clear_background()
//         ├─ with_alive_probability()├─ compute_all_neighbor_counts()
//         └─ with_seed()             ├─ advance_all_cells() → draw_cell()
//                                    └─ request_next_tick()
// ```
//
// The loop never halts on its own: there is no generation limit and no
// detection of extinct or stable boards. It runs for as long as the
// scheduler keeps invoking `tick()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::{Grid, GridDimensions, LifeConfig, Renderer, Result, Scheduler};

//=== EngineBuilder =======================================================

/// Builder for configuring and starting an [`Engine`].
///
/// # Default Values
///
/// - **Cell pixel size**: 10
/// - **Initial alive probability**: 0.2
/// - **Seed**: none (OS entropy)
///
/// # Examples
///
/// ```
/// use aetheric_life::prelude::*;
///
/// let mut renderer = FrameBuffer::new(200, 100);
/// let mut scheduler = ManualScheduler::new();
///
/// let mut engine = EngineBuilder::new()
///     .with_cell_pixel_size(10)
///     .with_seed(7)
///     .start(&mut renderer, &mut scheduler)
///     .unwrap();
///
/// assert_eq!(engine.grid().width(), 20);
/// scheduler.run(&mut engine, &mut renderer, 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineBuilder {
    config: LifeConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: LifeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the edge length of one cell in drawable pixels.
    ///
    /// Default: 10
    pub fn with_cell_pixel_size(mut self, size: u32) -> Self {
        self.config.cell_pixel_size = size;
        self
    }

    /// Sets the probability that a seeded cell starts alive.
    ///
    /// Must be in `(0.0, 1.0]`; checked when the engine starts.
    ///
    /// Default: 0.2
    pub fn with_alive_probability(mut self, probability: f64) -> Self {
        self.config.initial_alive_probability = probability;
        self
    }

    /// Fixes the RNG seed so the initial board is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Sizes and seeds the grid, paints generation 0, and arms the first
    /// tick.
    ///
    /// The grid covers the renderer's drawable size, rounding partial
    /// cells up.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::core::LifeError`] if the configuration is invalid
    /// or the drawable area is empty.
    pub fn start<R, S>(self, renderer: &mut R, scheduler: &mut S) -> Result<Engine>
    where
        R: Renderer + ?Sized,
        S: Scheduler + ?Sized,
    {
        Engine::start(self.config, renderer, scheduler)
    }
}

//=== Engine ==============================================================

/// Game of Life runtime owning a single [`Grid`].
///
/// Renderer and scheduler are borrowed per call, never owned, so a host
/// keeps full control of its surface and frame pacing.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// See [`EngineBuilder::start`].
    pub fn start<R, S>(config: LifeConfig, renderer: &mut R, scheduler: &mut S) -> Result<Self>
    where
        R: Renderer + ?Sized,
        S: Scheduler + ?Sized,
    {
        config.validate()?;

        let (pixel_width, pixel_height) = renderer.drawable_size();
        let dims = GridDimensions::covering(pixel_width, pixel_height, config.cell_pixel_size)?;
        debug!(
            target: "engine",
            "Drawable {}x{} px, cell {} px, alive probability {}",
            pixel_width,
            pixel_height,
            config.cell_pixel_size,
            config.initial_alive_probability
        );

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::initialize(
            dims.width,
            dims.height,
            dims.cell_pixel_size,
            config.initial_alive_probability,
            &mut rng,
        )?;

        info!(
            target: "engine",
            "Engine started: {}x{} cells ({} alive)",
            dims.width,
            dims.height,
            grid.alive_count()
        );

        let engine = Self::with_grid(grid);
        engine.paint(renderer);
        scheduler.request_next_tick();
        Ok(engine)
    }

    /// Wraps an existing grid. No drawing, no scheduling.
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid }
    }

    //--- Frame Loop -------------------------------------------------------

    /// Runs one frame.
    ///
    /// 1. Clears the background
    /// 2. Stores every cell's neighbor tally
    /// 3. Transitions every cell, drawing each one
    /// 4. Asks the scheduler for the next tick
    pub fn tick<R, S>(&mut self, renderer: &mut R, scheduler: &mut S)
    where
        R: Renderer + ?Sized,
        S: Scheduler + ?Sized,
    {
        renderer.clear_background();
        self.grid.compute_all_neighbor_counts();
        self.grid.advance_all_cells(renderer);
        trace!(target: "engine", "Tick complete ({} alive)", self.grid.alive_count());
        scheduler.request_next_tick();
    }

    /// Repaints the current generation without advancing it.
    pub fn paint<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear_background();
        self.grid.draw_all(renderer);
    }

    //--- Accessors --------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LifeError, ManualScheduler};

    /// Records every renderer call in order.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Draw { x: usize, y: usize, size: u32, alive: bool },
    }

    struct RecordingRenderer {
        size: (u32, u32),
        calls: Vec<Call>,
    }

    impl RecordingRenderer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: (width, height),
                calls: Vec::new(),
            }
        }
    }

    impl Renderer for RecordingRenderer {
        fn drawable_size(&self) -> (u32, u32) {
            self.size
        }

        fn clear_background(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn draw_cell(&mut self, x: usize, y: usize, size: u32, alive: bool) {
            self.calls.push(Call::Draw { x, y, size, alive });
        }
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config().cell_pixel_size, 10);
        assert_eq!(builder.config().initial_alive_probability, 0.2);
        assert_eq!(builder.config().seed, None);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = EngineBuilder::new()
            .with_cell_pixel_size(4)
            .with_alive_probability(0.5)
            .with_seed(11);

        assert_eq!(
            *builder.config(),
            LifeConfig {
                cell_pixel_size: 4,
                initial_alive_probability: 0.5,
                seed: Some(11),
            }
        );
    }

    #[test]
    fn start_rejects_empty_drawable() {
        let mut renderer = RecordingRenderer::new(0, 600);
        let mut scheduler = ManualScheduler::new();

        let result = EngineBuilder::new().start(&mut renderer, &mut scheduler);

        assert_eq!(
            result.unwrap_err(),
            LifeError::InvalidDimensions { width: 0, height: 60 }
        );
        assert!(!scheduler.is_pending(), "failed start must not arm a tick");
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn start_rejects_invalid_config() {
        let mut renderer = RecordingRenderer::new(100, 100);
        let mut scheduler = ManualScheduler::new();

        let err = EngineBuilder::new()
            .with_cell_pixel_size(0)
            .start(&mut renderer, &mut scheduler)
            .unwrap_err();
        assert_eq!(err, LifeError::InvalidCellSize(0));

        let err = EngineBuilder::new()
            .with_alive_probability(0.0)
            .start(&mut renderer, &mut scheduler)
            .unwrap_err();
        assert_eq!(err, LifeError::InvalidAliveProbability(0.0));
    }

    //=====================================================================
    // Start Tests
    //=====================================================================

    #[test]
    fn start_sizes_grid_from_drawable() {
        let mut renderer = RecordingRenderer::new(805, 600);
        let mut scheduler = ManualScheduler::new();

        let engine = EngineBuilder::new()
            .with_seed(1)
            .start(&mut renderer, &mut scheduler)
            .unwrap();

        assert_eq!(
            engine.grid().dimensions(),
            GridDimensions { width: 81, height: 60, cell_pixel_size: 10 }
        );
    }

    #[test]
    fn start_paints_generation_zero_and_arms_tick() {
        let mut renderer = RecordingRenderer::new(30, 20);
        let mut scheduler = ManualScheduler::new();

        let engine = EngineBuilder::new()
            .with_seed(3)
            .start(&mut renderer, &mut scheduler)
            .unwrap();

        assert_eq!(renderer.calls.first(), Some(&Call::Clear));
        assert_eq!(renderer.calls.len(), 1 + 3 * 2);
        let drawn_alive = renderer
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Draw { alive: true, .. }))
            .count();
        assert_eq!(drawn_alive, engine.grid().alive_count());
        assert!(scheduler.is_pending());
        assert_eq!(scheduler.requests(), 1);
    }

    #[test]
    fn same_seed_starts_same_board() {
        let mut scheduler = ManualScheduler::new();
        let a = EngineBuilder::new()
            .with_seed(21)
            .start(&mut RecordingRenderer::new(200, 200), &mut scheduler)
            .unwrap();
        let b = EngineBuilder::new()
            .with_seed(21)
            .start(&mut RecordingRenderer::new(200, 200), &mut scheduler)
            .unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    //=====================================================================
    // Tick Tests
    //=====================================================================

    #[test]
    fn tick_clears_before_drawing_every_cell() {
        let grid = Grid::from_alive_cells(3, 2, 10, &[(1, 0)]).unwrap();
        let mut engine = Engine::with_grid(grid);
        let mut renderer = RecordingRenderer::new(30, 20);
        let mut scheduler = ManualScheduler::new();

        engine.tick(&mut renderer, &mut scheduler);

        assert_eq!(renderer.calls[0], Call::Clear);
        let draws: Vec<_> = renderer.calls[1..]
            .iter()
            .map(|c| match c {
                Call::Draw { x, y, size, .. } => (*x, *y, *size),
                Call::Clear => panic!("clear after draws"),
            })
            .collect();
        assert_eq!(
            draws,
            vec![(0, 0, 10), (0, 1, 10), (1, 0, 10), (1, 1, 10), (2, 0, 10), (2, 1, 10)]
        );
        assert!(scheduler.is_pending());
    }

    #[test]
    fn tick_draws_post_transition_state() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let grid = Grid::from_alive_cells(5, 5, 10, &horizontal).unwrap();
        let mut engine = Engine::with_grid(grid);
        let mut renderer = RecordingRenderer::new(50, 50);
        let mut scheduler = ManualScheduler::new();

        engine.tick(&mut renderer, &mut scheduler);

        let mut alive: Vec<_> = renderer
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Draw { x, y, alive: true, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        alive.sort();
        assert_eq!(alive, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn engine_never_halts_on_its_own() {
        let mut renderer = RecordingRenderer::new(40, 40);
        let mut scheduler = ManualScheduler::new();
        let mut engine = EngineBuilder::new()
            .with_seed(8)
            .start(&mut renderer, &mut scheduler)
            .unwrap();

        let executed = scheduler.run(&mut engine, &mut renderer, 1000);
        assert_eq!(executed, 1000);
        assert!(scheduler.is_pending(), "engine must keep re-arming");
        assert_eq!(scheduler.requests(), 1001);
    }

    #[test]
    fn extinct_board_keeps_ticking() {
        let grid = Grid::from_alive_cells(4, 4, 10, &[]).unwrap();
        let mut engine = Engine::with_grid(grid);
        let mut renderer = RecordingRenderer::new(40, 40);
        let mut scheduler = ManualScheduler::new();

        for _ in 0..50 {
            engine.tick(&mut renderer, &mut scheduler);
        }

        assert_eq!(engine.grid().alive_count(), 0);
        assert_eq!(scheduler.requests(), 50);
        assert_eq!(
            renderer.calls.iter().filter(|c| **c == Call::Clear).count(),
            50
        );
    }

    #[test]
    fn manual_run_stops_when_not_rearmed() {
        let grid = Grid::from_alive_cells(4, 4, 10, &[]).unwrap();
        let mut engine = Engine::with_grid(grid);
        let mut renderer = RecordingRenderer::new(40, 40);
        let mut scheduler = ManualScheduler::new();

        assert_eq!(scheduler.run(&mut engine, &mut renderer, 10), 0);
        assert!(renderer.calls.is_empty());
    }
}
