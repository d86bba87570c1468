//! Lifecycle container for the current board.
//!
//! There is deliberately no process-global slot: a session is an owned value
//! the hosting application threads through its call chain. One writer path
//! (`initialize`), any number of readers. Re-initializing replaces the table
//! wholesale and invalidates any point references borrowed before it.

use crate::builder::{self, BoardSource, BuildError};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no board has been initialized in this session")]
    Uninitialized,
}

/// Holds the most recently constructed [`Table`] for one solving session.
#[derive(Debug, Default)]
pub struct BoardSession {
    table: Option<Table>,
}

impl BoardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from `source` and makes it current.
    ///
    /// On failure the previous board, if any, is left untouched; a partially
    /// built board is never published.
    pub fn initialize(&mut self, source: BoardSource) -> Result<(), BuildError> {
        let table = builder::build(source)?;
        self.table = Some(table);
        Ok(())
    }

    pub fn table(&self) -> Result<&Table, SessionError> {
        self.table.as_ref().ok_or(SessionError::Uninitialized)
    }

    pub fn table_mut(&mut self) -> Result<&mut Table, SessionError> {
        self.table.as_mut().ok_or(SessionError::Uninitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.table.is_some()
    }
}
