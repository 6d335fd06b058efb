use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long one flip stays in flight before settling on the new value.
pub const FLIP_DURATION: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipState {
    Idle { current: u8 },
    Flipping { current: u8, next: u8 },
}

/// What the owner of the unit must do with its single pending timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    Keep,
    /// Cancel any pending timer and start a fresh one of [`FLIP_DURATION`].
    Restart,
    Cancel,
}

/// Two-digit flip card. A new target arriving mid-flip replaces the old one
/// and restarts the timer, so the card always settles on the latest value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipUnit {
    state: FlipState,
}

/// Text for each panel of the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipPanels {
    pub top: String,
    pub bottom: String,
    pub leaf_front: String,
    pub leaf_back: String,
    pub flipping: bool,
}

impl FlipUnit {
    pub fn new(value: u8) -> Self {
        Self {
            state: FlipState::Idle { current: value },
        }
    }

    pub fn state(&self) -> FlipState {
        self.state
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.state, FlipState::Flipping { .. })
    }

    pub fn offer(&mut self, value: u8) -> TimerCommand {
        match self.state {
            FlipState::Idle { current } if value == current => TimerCommand::Keep,
            FlipState::Idle { current } => {
                self.state = FlipState::Flipping {
                    current,
                    next: value,
                };
                TimerCommand::Restart
            }
            FlipState::Flipping { next, .. } if value == next => TimerCommand::Keep,
            FlipState::Flipping { current, .. } if value == current => {
                self.state = FlipState::Idle { current };
                TimerCommand::Cancel
            }
            FlipState::Flipping { current, .. } => {
                self.state = FlipState::Flipping {
                    current,
                    next: value,
                };
                TimerCommand::Restart
            }
        }
    }

    /// Timer expiry. Returns false when there was nothing in flight.
    pub fn finish(&mut self) -> bool {
        match self.state {
            FlipState::Flipping { next, .. } => {
                self.state = FlipState::Idle { current: next };
                true
            }
            FlipState::Idle { .. } => false,
        }
    }

    pub fn panels(&self) -> FlipPanels {
        let (current, next, flipping) = match self.state {
            FlipState::Idle { current } => (current, current, false),
            FlipState::Flipping { current, next } => (current, next, true),
        };
        FlipPanels {
            top: pad2(next),
            bottom: pad2(current),
            leaf_front: pad2(current),
            leaf_back: pad2(next),
            flipping,
        }
    }
}

/// Runs a [`FlipUnit`] against the clock. Holds the unit's single pending
/// timer; dropping the driver cancels it, so a torn-down card never settles.
pub struct FlipDriver {
    unit: Arc<watch::Sender<FlipUnit>>,
    pending: Option<JoinHandle<()>>,
}

impl FlipDriver {
    pub fn new(value: u8) -> Self {
        let (unit, _) = watch::channel(FlipUnit::new(value));
        Self {
            unit: Arc::new(unit),
            pending: None,
        }
    }

    /// Notified on every state change, including timer expiry.
    pub fn subscribe(&self) -> watch::Receiver<FlipUnit> {
        self.unit.subscribe()
    }

    pub fn state(&self) -> FlipState {
        self.unit.borrow().state()
    }

    pub fn panels(&self) -> FlipPanels {
        self.unit.borrow().panels()
    }

    pub fn offer(&mut self, value: u8) -> TimerCommand {
        let mut command = TimerCommand::Keep;
        self.unit.send_if_modified(|unit| {
            command = unit.offer(value);
            command != TimerCommand::Keep
        });

        match command {
            TimerCommand::Keep => {}
            TimerCommand::Cancel => self.cancel_pending(),
            TimerCommand::Restart => {
                self.cancel_pending();
                // Deadline is fixed now, not when the task first runs.
                let deadline = tokio::time::Instant::now() + FLIP_DURATION;
                let unit = Arc::clone(&self.unit);
                self.pending = Some(tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    unit.send_if_modified(FlipUnit::finish);
                }));
            }
        }
        command
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for FlipDriver {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

pub fn pad2(value: u8) -> String {
    format!("{:02}", value)
}
