use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of a turn in the conversation log.
///
/// Ids are assigned by the log, start at 1, and strictly increase in append
/// order. Sequential appends leave no gaps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(u64);

impl TurnId {
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for TurnId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// How a turn ended.
///
/// A failed turn carries the error marker instead of a reply, so "failed with
/// a reply" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The engine answered the sender.
    Replied { reply: String },
    /// A backing store failed before a reply could be produced.
    Failed { error: String },
}

impl TurnOutcome {
    pub fn reply(&self) -> Option<&str> {
        match self {
            TurnOutcome::Replied { reply } => Some(reply),
            TurnOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TurnOutcome::Failed { .. })
    }
}

/// A turn about to be appended (everything but the log-assigned fields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTurn {
    pub sender: String,
    pub text: String,
    pub command: Option<String>,
    pub outcome: TurnOutcome,
}

/// One fully processed inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: TurnId,
    pub sender: String,
    /// Inbound text exactly as received.
    pub text: String,
    /// Canonical command name, `None` for free text.
    pub command: Option<String>,
    pub outcome: TurnOutcome,
    pub recorded_at: DateTime<Utc>,
}
