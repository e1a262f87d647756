//! Conversation log module.
//!
//! Append-only record of every processed message turn, with strictly
//! increasing ids. The log is the audit trail of the messaging engine; it is
//! never rewritten.

pub mod store;
pub mod turn;

pub use store::{InMemoryTurnLog, TurnStore};
pub use turn::{ConversationTurn, NewTurn, TurnId, TurnOutcome};
