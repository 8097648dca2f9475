//=========================================================================
// Frame Scheduling
//=========================================================================
//
// Decouples "run another generation" from how frames are paced.
//
// The engine exposes a single entry point (`Engine::tick`) and ends every
// tick by calling `Scheduler::request_next_tick`. The scheduler owns the
// repeat policy:
//
// ```text
//   Engine::tick() ──request_next_tick()──> FrameScheduler
//                                              │ bounded(1) channel
//   Host frame boundary ──FrameSignal::take()──┘
//        └─ pending? → Engine::tick()
// ```
//
// - `FrameScheduler` / `FrameSignal`: display-driven hosts (winit)
// - `ManualScheduler`: synchronous driving for tests and headless runs
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::render::Renderer;
use crate::engine::Engine;

//=== Scheduler Trait =====================================================

/// Capability asked to invoke the engine again on the next frame.
pub trait Scheduler {
    /// Arms one more `Engine::tick` before the next frame is presented.
    ///
    /// Requests made while one is already pending coalesce.
    fn request_next_tick(&mut self);
}

//=== FrameRequest ========================================================

/// Message sent across the scheduling channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameRequest;

//=== FrameScheduler ======================================================

/// Engine-side half of a display-driven scheduling channel.
///
/// Create with [`frame_channel`].
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    sender: Sender<FrameRequest>,
}

/// Host-side half: polled once per presented frame.
#[derive(Debug)]
pub struct FrameSignal {
    receiver: Receiver<FrameRequest>,
}

/// Creates a connected scheduler/signal pair.
///
/// Capacity 1: at most one tick is ever pending.
pub fn frame_channel() -> (FrameScheduler, FrameSignal) {
    let (sender, receiver) = bounded(1);
    (FrameScheduler { sender }, FrameSignal { receiver })
}

impl Scheduler for FrameScheduler {
    fn request_next_tick(&mut self) {
        match self.sender.try_send(FrameRequest) {
            Ok(()) => trace!(target: "schedule", "Next tick requested"),
            Err(TrySendError::Full(_)) => {
                trace!(target: "schedule", "Tick already pending, request coalesced")
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "schedule", "Frame signal dropped, tick request ignored")
            }
        }
    }
}

impl FrameSignal {
    /// Consumes the pending request, returning whether one existed.
    pub fn take(&self) -> bool {
        match self.receiver.try_recv() {
            Ok(FrameRequest) => true,
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                trace!(target: "schedule", "Scheduler dropped, no further ticks");
                false
            }
        }
    }

    /// Whether a tick is pending, without consuming it.
    pub fn is_pending(&self) -> bool {
        !self.receiver.is_empty()
    }
}

//=== ManualScheduler =====================================================

/// Scheduler driven explicitly by the caller.
///
/// Tracks whether a tick is pending and how many requests were made, so a
/// harness can step the engine synchronously without a display timer.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    requests: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total `request_next_tick` calls observed.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Runs up to `frames` ticks, each only if the previous one re-armed
    /// the scheduler. Returns the number of ticks executed.
    pub fn run<R: Renderer + ?Sized>(
        &mut self,
        engine: &mut Engine,
        renderer: &mut R,
        frames: u64,
    ) -> u64 {
        let mut executed = 0;
        while executed < frames && self.pending {
            self.pending = false;
            engine.tick(renderer, self);
            executed += 1;
        }
        executed
    }
}

impl Scheduler for ManualScheduler {
    fn request_next_tick(&mut self) {
        self.pending = true;
        self.requests += 1;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // FrameScheduler Tests
    //=====================================================================

    #[test]
    fn signal_starts_idle() {
        let (_scheduler, signal) = frame_channel();
        assert!(!signal.is_pending());
        assert!(!signal.take());
    }

    #[test]
    fn request_is_taken_once() {
        let (mut scheduler, signal) = frame_channel();
        scheduler.request_next_tick();

        assert!(signal.is_pending());
        assert!(signal.take());
        assert!(!signal.take(), "request must be consumed");
    }

    #[test]
    fn duplicate_requests_coalesce() {
        let (mut scheduler, signal) = frame_channel();
        scheduler.request_next_tick();
        scheduler.request_next_tick();
        scheduler.request_next_tick();

        assert!(signal.take());
        assert!(!signal.take());
    }

    #[test]
    fn request_after_signal_dropped_does_not_panic() {
        let (mut scheduler, signal) = frame_channel();
        drop(signal);
        scheduler.request_next_tick();
    }

    #[test]
    fn take_after_scheduler_dropped_is_false() {
        let (scheduler, signal) = frame_channel();
        drop(scheduler);
        assert!(!signal.take());
    }

    //=====================================================================
    // ManualScheduler Tests
    //=====================================================================

    #[test]
    fn manual_scheduler_counts_requests() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.is_pending());

        scheduler.request_next_tick();
        scheduler.request_next_tick();

        assert!(scheduler.is_pending());
        assert_eq!(scheduler.requests(), 2);
    }
}
