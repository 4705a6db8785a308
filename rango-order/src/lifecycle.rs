use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A strictly ordered status sequence with a single forward step out of every
/// non-terminal status.
pub trait Lifecycle: Copy + Eq + Debug + 'static {
    /// Every status, in lifecycle order.
    const ALL: &'static [Self];

    /// Status assigned to newly created orders.
    const INITIAL: Self;

    /// The one status reachable from `self`, `None` at the terminal status.
    fn next(self) -> Option<Self>;

    /// Stable snake_case code used on the wire and in events.
    fn code(self) -> &'static str;

    fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Order records that carry a lifecycle status.
pub trait TrackedOrder {
    type Status: Lifecycle;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
}

/// What to do when asked to advance an order that is already terminal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TerminalPolicy {
    /// Leave the order alone and report [`Transition::Held`].
    #[default]
    Ignore,
    /// Fail with `OrderError::InvalidTransition`.
    Reject,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HoldReason {
    Terminal,
    /// Courier is offline, so available deliveries cannot be accepted.
    Offline,
}

/// Outcome of a successful `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<S> {
    Advanced { from: S, to: S },
    Held { status: S, reason: HoldReason },
}

impl<S: Lifecycle> Transition<S> {
    /// Status of the order after the call.
    pub fn status(&self) -> S {
        match *self {
            Transition::Advanced { to, .. } => to,
            Transition::Held { status, .. } => status,
        }
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self, Transition::Advanced { .. })
    }
}
