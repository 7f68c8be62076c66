//! Run/idle state of the frame loop and the resize debounce gate.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

/// What the host scheduler should do after a lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCommand {
    /// Request the next animation frame.
    Schedule,
    /// Cancel the pending animation frame.
    Cancel,
    Nothing,
}

#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Idle -> Running. Returns `Schedule` only on an actual transition; the
    /// caller must reset its frame clock when it does.
    pub fn resume(&mut self) -> LoopCommand {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                log::debug!("[loop] running");
                LoopCommand::Schedule
            }
            LoopState::Running => LoopCommand::Nothing,
        }
    }

    /// Running -> Idle, cancelling whatever frame is pending.
    pub fn suspend(&mut self) -> LoopCommand {
        match self.state {
            LoopState::Running => {
                self.state = LoopState::Idle;
                log::debug!("[loop] idle");
                LoopCommand::Cancel
            }
            LoopState::Idle => LoopCommand::Nothing,
        }
    }

    pub fn on_visibility_change(&mut self, hidden: bool) -> LoopCommand {
        if hidden {
            self.suspend()
        } else {
            self.resume()
        }
    }

    /// Decide at the end of a tick whether another one follows. A tick that
    /// finds the page hidden parks the loop instead of rescheduling.
    pub fn after_tick(&mut self, visible: bool) -> LoopCommand {
        if !self.is_running() {
            return LoopCommand::Nothing;
        }
        if visible {
            LoopCommand::Schedule
        } else {
            self.state = LoopState::Idle;
            log::debug!("[loop] idle (hidden at end of tick)");
            LoopCommand::Nothing
        }
    }
}

/// Coalesces bursts of resize events into one recomputation per frame.
#[derive(Clone, Debug, Default)]
pub struct ResizeGate {
    pending: bool,
}

impl ResizeGate {
    /// Returns true when the caller should schedule the recomputation; false
    /// when one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the queued recomputation as done.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
