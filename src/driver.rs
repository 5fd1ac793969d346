/// Lifecycle of the render loop. Context acquisition moves the loop to
/// Ready, the one-time geometry upload to Running; a stop request is
/// observed at the next tick, so at most the in-flight frame still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Ready,
    Running,
    Stopped,
}

pub struct FrameLoop {
    state: LoopState,
    frame_count: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Uninitialized,
            frame_count: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Surface and gl context acquired.
    pub fn ready(&mut self) {
        if self.state == LoopState::Uninitialized {
            self.state = LoopState::Ready;
        }
    }

    /// Static resources uploaded, frames may be scheduled.
    pub fn start(&mut self) {
        if self.state == LoopState::Ready {
            self.state = LoopState::Running;
        }
    }

    /// Takes effect at the next tick; no further frames after that.
    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    /// Gate for one frame of work. Counts the frame while running.
    pub fn tick(&mut self) -> bool {
        if self.state == LoopState::Running {
            self.frame_count += 1;
            true
        } else {
            false
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame pacing seam. The native and web hosts are push-driven by their
/// event loops and tick the FrameLoop directly; embedders that pace frames
/// themselves (and tests) drive it through this trait instead.
pub trait FrameScheduler {
    fn run_frames(&mut self, frame_loop: &mut FrameLoop, step: &mut dyn FnMut(&mut FrameLoop));
}

/// Deterministic scheduler: advances up to a fixed number of frames
/// synchronously, stopping early once the loop leaves Running.
pub struct StepScheduler {
    pub frames: u64,
}

impl FrameScheduler for StepScheduler {
    fn run_frames(&mut self, frame_loop: &mut FrameLoop, step: &mut dyn FnMut(&mut FrameLoop)) {
        for _ in 0..self.frames {
            if !frame_loop.tick() {
                break;
            }
            step(frame_loop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame_clock::FrameClock;

    fn running_loop() -> FrameLoop {
        let mut frame_loop = FrameLoop::new();
        frame_loop.ready();
        frame_loop.start();
        frame_loop
    }

    #[test]
    fn state_transitions_in_order() {
        let mut frame_loop = FrameLoop::new();
        assert_eq!(frame_loop.state(), LoopState::Uninitialized);
        frame_loop.start();
        assert_eq!(frame_loop.state(), LoopState::Uninitialized);
        frame_loop.ready();
        assert_eq!(frame_loop.state(), LoopState::Ready);
        frame_loop.start();
        assert_eq!(frame_loop.state(), LoopState::Running);
        frame_loop.stop();
        assert_eq!(frame_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn tick_only_counts_while_running() {
        let mut frame_loop = FrameLoop::new();
        assert!(!frame_loop.tick());
        frame_loop.ready();
        assert!(!frame_loop.tick());
        frame_loop.start();
        assert!(frame_loop.tick());
        assert_eq!(frame_loop.frame_count(), 1);
        frame_loop.stop();
        assert!(!frame_loop.tick());
        assert_eq!(frame_loop.frame_count(), 1);
    }

    #[test]
    fn scheduler_runs_requested_frames() {
        let mut frame_loop = running_loop();
        let mut scheduler = StepScheduler { frames: 10 };
        scheduler.run_frames(&mut frame_loop, &mut |_| {});
        assert_eq!(frame_loop.frame_count(), 10);
    }

    #[test]
    fn stop_during_step_ends_loop() {
        // stop lands mid-frame: that frame finishes, none follow
        let mut frame_loop = running_loop();
        let mut scheduler = StepScheduler { frames: 10 };
        scheduler.run_frames(&mut frame_loop, &mut |fl| {
            if fl.frame_count() == 3 {
                fl.stop();
            }
        });
        assert_eq!(frame_loop.frame_count(), 3);
        assert_eq!(frame_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn full_phase_sweep_over_scheduled_frames() {
        // period 1000 at increment 2 completes exactly one sweep in 500 frames
        let mut frame_loop = running_loop();
        let mut clock = FrameClock::new(1000.0, 2.0);
        let mut scheduler = StepScheduler { frames: 500 };
        let mut last = -1.0;
        scheduler.run_frames(&mut frame_loop, &mut |_| {
            last = clock.advance();
        });
        assert_eq!(frame_loop.frame_count(), 500);
        assert_eq!(last, 0.0);
    }
}
