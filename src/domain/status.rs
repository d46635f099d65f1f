//! Campaign lifecycle states as reported by the server.
//!
//! The server owns every transition. The helpers below mirror its rules so
//! callers can decide what to poll for or offer in a UI; the client never
//! refuses a request based on them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignState {
    Pending,
    Scheduled,
    InProgress,
    Completed,
    Failed,
    Canceled,
    /// A status string this client version does not know.
    Unknown,
}

impl CampaignState {
    /// Every state the server is known to report.
    pub const ALL_KNOWN: [Self; 6] = [
        Self::Pending,
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Failed,
        Self::Canceled,
    ];

    /// Parse the wire name (`in_progress`, ...). Unrecognised names map to [`Self::Unknown`].
    pub fn from_wire(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "scheduled" => Self::Scheduled,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "canceled" => Self::Canceled,
            _ => Self::Unknown,
        }
    }

    /// Wire name of the state; [`Self::Unknown`] renders as `unknown`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the server accepts a send from this state (result: `scheduled`).
    pub fn accepts_send(self) -> bool {
        matches!(self, Self::Pending | Self::Failed | Self::Canceled)
    }

    /// Whether the server accepts a cancel from this state (result: `canceled`).
    pub fn accepts_cancel(self) -> bool {
        matches!(self, Self::Scheduled | Self::InProgress)
    }

    /// State the server moves to after an accepted send.
    pub fn after_send(self) -> Option<Self> {
        self.accepts_send().then_some(Self::Scheduled)
    }

    /// State the server moves to after an accepted cancel.
    pub fn after_cancel(self) -> Option<Self> {
        self.accepts_cancel().then_some(Self::Canceled)
    }

    /// Dispatch is queued or running; status polling will observe further changes.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Scheduled | Self::InProgress)
    }

    /// No further server-driven transition happens without a client action.
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Completed | Self::Failed | Self::Canceled
        )
    }
}

impl fmt::Display for CampaignState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
