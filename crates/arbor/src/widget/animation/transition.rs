//! Presence state machine and transition status.

use std::time::{Duration, Instant};

/// Lifecycle state of collapsible content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceState {
    /// Not present at all.
    #[default]
    Unmounted,
    /// Present for its first open frame; starting styles apply.
    Mounting,
    /// Present and visible.
    Mounted,
    /// Present but hidden (keep-mounted content while closed).
    Hidden,
    /// Closing; present until the exit transition completes.
    Unmounting,
}

/// Transition phase exposed as styling hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStatus {
    /// Entering: `data-starting-style`.
    Starting,
    /// Leaving: `data-ending-style`.
    Ending,
    /// No transition running.
    #[default]
    Idle,
}

/// Presence controller for one collapsible region.
///
/// Drive it with [`set_open`](Self::set_open) when the owning node expands
/// or collapses and with [`advance`](Self::advance) once per frame.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use arbor::widget::animation::{Presence, PresenceState};
///
/// let start = Instant::now();
/// let mut presence = Presence::new(true, false, Duration::from_millis(150));
///
/// presence.set_open(false, start);
/// assert_eq!(presence.state(), PresenceState::Unmounting);
///
/// presence.advance(start + Duration::from_millis(150));
/// assert_eq!(presence.state(), PresenceState::Unmounted);
/// ```
#[derive(Debug, Clone)]
pub struct Presence {
    state: PresenceState,
    open: bool,
    keep_mounted: bool,
    exit_duration: Duration,
    exit_started: Option<Instant>,
}

impl Presence {
    /// Create a controller in its settled state for `open`.
    ///
    /// The initial state never runs a transition.
    pub fn new(open: bool, keep_mounted: bool, exit_duration: Duration) -> Self {
        let state = if open {
            PresenceState::Mounted
        } else if keep_mounted {
            PresenceState::Hidden
        } else {
            PresenceState::Unmounted
        };
        Self {
            state,
            open,
            keep_mounted,
            exit_duration,
            exit_started: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PresenceState {
        self.state
    }

    /// Whether the region is logically open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether closed content stays present.
    pub fn keeps_mounted(&self) -> bool {
        self.keep_mounted
    }

    /// Whether the content should be rendered at all.
    pub fn is_present(&self) -> bool {
        self.state != PresenceState::Unmounted
    }

    /// Whether the content is present but hidden.
    pub fn is_hidden(&self) -> bool {
        self.state == PresenceState::Hidden
    }

    /// Transition phase for styling hooks.
    pub fn transition_status(&self) -> TransitionStatus {
        match self.state {
            PresenceState::Mounting => TransitionStatus::Starting,
            PresenceState::Unmounting => TransitionStatus::Ending,
            PresenceState::Unmounted | PresenceState::Mounted | PresenceState::Hidden => {
                TransitionStatus::Idle
            }
        }
    }

    /// Open or close the region at `now`.
    ///
    /// Returns `true` if the state changed.
    pub fn set_open(&mut self, open: bool, now: Instant) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;

        let next = if open {
            self.exit_started = None;
            PresenceState::Mounting
        } else if self.exit_duration.is_zero() {
            self.settled_closed()
        } else {
            self.exit_started = Some(now);
            PresenceState::Unmounting
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Progress time-based transitions up to `now`.
    ///
    /// `Mounting` settles into `Mounted` on the next frame; `Unmounting`
    /// settles once the exit duration has elapsed. Returns `true` if the state
    /// changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let next = match self.state {
            PresenceState::Mounting => PresenceState::Mounted,
            PresenceState::Unmounting => match self.exit_started {
                Some(started) if now.saturating_duration_since(started) < self.exit_duration => {
                    return false;
                }
                _ => {
                    self.exit_started = None;
                    self.settled_closed()
                }
            },
            PresenceState::Unmounted | PresenceState::Mounted | PresenceState::Hidden => {
                return false;
            }
        };
        self.state = next;
        true
    }

    /// Time left in a running exit transition.
    pub fn exit_remaining(&self, now: Instant) -> Option<Duration> {
        let started = self.exit_started?;
        Some(self.exit_duration.saturating_sub(now.saturating_duration_since(started)))
    }

    fn settled_closed(&self) -> PresenceState {
        if self.keep_mounted {
            PresenceState::Hidden
        } else {
            PresenceState::Unmounted
        }
    }
}
