// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Undo/redo transaction history.
//!
//! This module implements a linear command history: a list of reversible
//! transactions and a cursor separating the applied transactions (left of the
//! cursor) from the undone ones that may still be redone (right of the
//! cursor).
//!
//! # Organization
//!
//! * [`Transaction`]: a reversible edit against some mutable target.
//! * [`TransactionStack`]: the history and cursor, generic over the
//!   transaction type.
//! * [`song`]: the playlist song edits, a closed set of transaction kinds.
//!
//! Processing a new transaction while there are undone transactions to the
//! right of the cursor discards them, the history never branches.

pub mod song;

use thiserror::Error;

use crate::model::{Song, SongId};

pub use song::SongTransaction;

/// Result type for history operations.
pub type TransactionResult<T> = Result<T, TransactionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,
}

/// A reversible edit.
///
/// `apply` is run when the transaction is first processed and again on every
/// redo, `revert` on every undo. Both must tolerate a target that has been
/// changed by other means in the meantime.
pub trait Transaction {
    type Target: ?Sized;

    fn apply(&self, target: &mut Self::Target);

    fn revert(&self, target: &mut Self::Target);

    /// Human-readable summary, used for status messages such as
    /// "Undo: Remove 'Song'".
    fn description(&self) -> String;
}

/// Read/replace access to the ordered songs being edited.
///
/// `set_songs` must replace the whole sequence in one step.
pub trait SongList {
    fn songs(&self) -> &[Song];

    fn set_songs(&mut self, songs: Vec<Song>);
}

impl SongList for Vec<Song> {
    fn songs(&self) -> &[Song] {
        self
    }

    fn set_songs(&mut self, songs: Vec<Song>) {
        *self = songs;
    }
}

/// Source of song identifiers that are unique for the lifetime of an editing
/// session.
pub trait SongIdAllocator {
    fn allocate_song_id(&mut self) -> SongId;
}

/// Linear undo/redo history with a cursor.
///
/// Positions range over `0..=len`. The transactions before the cursor have
/// been applied to the target, those at or after it have been undone.
pub struct TransactionStack<T: Transaction> {
    transactions: Vec<T>,
    cursor: usize,
}

impl<T: Transaction> TransactionStack<T> {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            cursor: 0,
        }
    }

    /// Applies `transaction` to `target` and records it after the cursor.
    ///
    /// Any undone transactions are discarded first, so they can no longer be
    /// redone.
    pub fn process(&mut self, transaction: T, target: &mut T::Target) {
        if self.cursor < self.transactions.len() {
            log::debug!(
                "Discarding {} undone transaction(s)",
                self.transactions.len() - self.cursor
            );
            self.transactions.truncate(self.cursor);
        }

        log::debug!("Process: {}", transaction.description());

        transaction.apply(target);
        self.transactions.push(transaction);
        self.cursor += 1;
    }

    /// Reverts the transaction before the cursor and moves the cursor back.
    ///
    /// Returns the description of the reverted transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NothingToUndo`] if the cursor is at the
    /// start of the history, in which case the target is not touched.
    pub fn undo(&mut self, target: &mut T::Target) -> TransactionResult<String> {
        if !self.can_undo() {
            return Err(TransactionError::NothingToUndo);
        }

        self.cursor -= 1;
        let transaction = &self.transactions[self.cursor];
        transaction.revert(target);

        let description = transaction.description();
        log::debug!("Undo: {}", description);

        Ok(description)
    }

    /// Re-applies the transaction at the cursor and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NothingToRedo`] if the cursor is at the end
    /// of the history, in which case the target is not touched.
    pub fn redo(&mut self, target: &mut T::Target) -> TransactionResult<String> {
        if !self.can_redo() {
            return Err(TransactionError::NothingToRedo);
        }

        let transaction = &self.transactions[self.cursor];
        transaction.apply(target);
        self.cursor += 1;

        let description = transaction.description();
        log::debug!("Redo: {}", description);

        Ok(description)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.transactions.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.transactions.get(i))
            .map(|t| t.description())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.transactions.get(self.cursor).map(|t| t.description())
    }

    /// The cursor position, between `0` and [`len`](Self::len) inclusive.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Forgets all history without touching any target.
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.cursor = 0;
    }

    /// Mutable access to every recorded transaction, applied or undone.
    pub fn transactions_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.transactions.iter_mut()
    }
}

impl<T: Transaction> Default for TransactionStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Appends a value on apply, removes the last matching value on revert.
    struct PushValue(i32);

    impl Transaction for PushValue {
        type Target = Vec<i32>;

        fn apply(&self, target: &mut Vec<i32>) {
            target.push(self.0);
        }

        fn revert(&self, target: &mut Vec<i32>) {
            if let Some(pos) = target.iter().rposition(|v| *v == self.0) {
                target.remove(pos);
            }
        }

        fn description(&self) -> String {
            format!("Push {}", self.0)
        }
    }

    #[test]
    fn test_initial_state() {
        let stack: TransactionStack<PushValue> = TransactionStack::new();

        assert!(stack.is_empty());
        assert_eq!(stack.position(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(stack.undo_description(), None);
        assert_eq!(stack.redo_description(), None);
    }

    #[test]
    fn test_process_applies_and_advances() {
        let mut stack = TransactionStack::new();
        let mut target: Vec<i32> = vec![];

        stack.process(PushValue(1), &mut target);
        stack.process(PushValue(2), &mut target);

        assert_eq!(target, vec![1, 2]);
        assert_eq!(stack.position(), 2);
        assert!(stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(stack.undo_description().as_deref(), Some("Push 2"));
    }

    #[test]
    fn test_undo_then_redo() {
        let mut stack = TransactionStack::new();
        let mut target: Vec<i32> = vec![];
        stack.process(PushValue(7), &mut target);

        let description = stack.undo(&mut target).unwrap();
        assert_eq!(description, "Push 7");
        assert!(target.is_empty());
        assert!(!stack.can_undo());
        assert!(stack.can_redo());

        let description = stack.redo(&mut target).unwrap();
        assert_eq!(description, "Push 7");
        assert_eq!(target, vec![7]);
        assert!(stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn test_undo_on_empty_history_leaves_target_alone() {
        let mut stack: TransactionStack<PushValue> = TransactionStack::new();
        let mut target = vec![4, 5];

        assert_eq!(stack.undo(&mut target), Err(TransactionError::NothingToUndo));
        assert_eq!(target, vec![4, 5]);
    }

    #[test]
    fn test_redo_at_head_leaves_target_alone() {
        let mut stack = TransactionStack::new();
        let mut target: Vec<i32> = vec![];
        stack.process(PushValue(1), &mut target);

        assert_eq!(stack.redo(&mut target), Err(TransactionError::NothingToRedo));
        assert_eq!(target, vec![1]);
        assert_eq!(stack.position(), 1);
    }

    #[test]
    fn test_process_after_undo_discards_redo_history() {
        let mut stack = TransactionStack::new();
        let mut target: Vec<i32> = vec![];

        stack.process(PushValue(1), &mut target);
        stack.process(PushValue(2), &mut target);
        stack.undo(&mut target).unwrap();
        stack.undo(&mut target).unwrap();
        stack.process(PushValue(3), &mut target);

        assert_eq!(target, vec![3]);
        assert_eq!(stack.len(), 1);
        assert!(!stack.can_redo());
        assert_eq!(stack.redo(&mut target), Err(TransactionError::NothingToRedo));
    }

    #[test]
    fn test_descriptions_follow_cursor() {
        let mut stack = TransactionStack::new();
        let mut target: Vec<i32> = vec![];

        stack.process(PushValue(1), &mut target);
        stack.process(PushValue(2), &mut target);
        stack.undo(&mut target).unwrap();

        assert_eq!(stack.undo_description().as_deref(), Some("Push 1"));
        assert_eq!(stack.redo_description().as_deref(), Some("Push 2"));
    }

    #[test]
    fn test_clear() {
        let mut stack = TransactionStack::new();
        let mut target: Vec<i32> = vec![];
        stack.process(PushValue(1), &mut target);

        stack.clear();

        assert!(stack.is_empty());
        assert!(!stack.can_undo());
        assert_eq!(target, vec![1]);
    }
}
