use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use tambo_core::{StoreError, StoreResult};

use crate::turn::{ConversationTurn, NewTurn, TurnId};

/// Append-only store of conversation turns.
pub trait TurnStore: Send + Sync {
    /// Append a turn, assigning the next id. Returns the stored turn.
    fn append(&self, turn: NewTurn, now: DateTime<Utc>) -> StoreResult<ConversationTurn>;

    /// Turns in arrival order (oldest first), `offset` skipped, at most
    /// `limit` returned.
    fn list(&self, limit: usize, offset: usize) -> StoreResult<Vec<ConversationTurn>>;

    fn count(&self) -> StoreResult<usize>;

    /// Turns whose sender matches exactly.
    fn count_by_sender(&self, sender: &str) -> StoreResult<usize>;

    /// Turns that carried a recognized command.
    fn count_with_command(&self) -> StoreResult<usize>;
}

impl<S> TurnStore for Arc<S>
where
    S: TurnStore + ?Sized,
{
    fn append(&self, turn: NewTurn, now: DateTime<Utc>) -> StoreResult<ConversationTurn> {
        (**self).append(turn, now)
    }

    fn list(&self, limit: usize, offset: usize) -> StoreResult<Vec<ConversationTurn>> {
        (**self).list(limit, offset)
    }

    fn count(&self) -> StoreResult<usize> {
        (**self).count()
    }

    fn count_by_sender(&self, sender: &str) -> StoreResult<usize> {
        (**self).count_by_sender(sender)
    }

    fn count_with_command(&self) -> StoreResult<usize> {
        (**self).count_with_command()
    }
}

#[derive(Debug)]
struct TurnLogState {
    next_id: u64,
    turns: Vec<ConversationTurn>,
}

/// In-memory append-only conversation log.
///
/// A single mutex guards both the id counter and the turn list, so an
/// assigned id and its append are one atomic step and ids come out strictly
/// increasing and, sequentially, gap-free.
#[derive(Debug)]
pub struct InMemoryTurnLog {
    inner: Mutex<TurnLogState>,
}

impl InMemoryTurnLog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TurnLogState {
                next_id: 1,
                turns: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryTurnLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnStore for InMemoryTurnLog {
    fn append(&self, turn: NewTurn, now: DateTime<Utc>) -> StoreResult<ConversationTurn> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| StoreError::unavailable("turn log lock poisoned"))?;

        let stored = ConversationTurn {
            id: TurnId::from_u64(state.next_id),
            sender: turn.sender,
            text: turn.text,
            command: turn.command,
            outcome: turn.outcome,
            recorded_at: now,
        };
        state.next_id += 1;
        state.turns.push(stored.clone());

        Ok(stored)
    }

    fn list(&self, limit: usize, offset: usize) -> StoreResult<Vec<ConversationTurn>> {
        let state = self
            .inner
            .lock()
            .map_err(|_| StoreError::unavailable("turn log lock poisoned"))?;

        Ok(state
            .turns
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count(&self) -> StoreResult<usize> {
        let state = self
            .inner
            .lock()
            .map_err(|_| StoreError::unavailable("turn log lock poisoned"))?;
        Ok(state.turns.len())
    }

    fn count_by_sender(&self, sender: &str) -> StoreResult<usize> {
        let state = self
            .inner
            .lock()
            .map_err(|_| StoreError::unavailable("turn log lock poisoned"))?;
        Ok(state.turns.iter().filter(|t| t.sender == sender).count())
    }

    fn count_with_command(&self) -> StoreResult<usize> {
        let state = self
            .inner
            .lock()
            .map_err(|_| StoreError::unavailable("turn log lock poisoned"))?;
        Ok(state.turns.iter().filter(|t| t.command.is_some()).count())
    }
}
