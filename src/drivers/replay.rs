use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::row::ResultSet;
use crate::value::SqlValue;

/// One statement the driver was asked to execute, kept for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Scripted outcome for a single execution.
enum Outcome {
    Rows(ResultSet),
    Fail(String),
}

/// In-memory [`Driver`] for tests.
///
/// Replays scripted result sets (or failures) in FIFO order and records
/// every statement it executes, so tests can assert both the rendered SQL
/// and the bound parameters. An exhausted script yields empty results.
///
/// # Example
/// ```
/// use veneer::drivers::ReplayDriver;
///
/// let driver = ReplayDriver::new()
///     .respond_with_rows(&["id", "title"], &[&["1", "groceries"]]);
/// ```
#[derive(Default)]
pub struct ReplayDriver {
    script: Mutex<VecDeque<Outcome>>,
    log: Mutex<Vec<Statement>>,
}

impl ReplayDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result set for the next execution.
    pub fn respond_with(self, result: ResultSet) -> Self {
        self.script.lock().unwrap().push_back(Outcome::Rows(result));
        self
    }

    /// Queue a result set built from string literals: one slice of column
    /// names, then one slice per row in column order.
    pub fn respond_with_rows(self, columns: &[&str], rows: &[&[&str]]) -> Self {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        self.respond_with(ResultSet::new(columns, rows))
    }

    /// Queue a query failure with the given message.
    pub fn respond_with_error(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Outcome::Fail(message.to_string()));
        self
    }

    /// All statements executed so far, in order.
    pub fn statements(&self) -> Vec<Statement> {
        self.log.lock().unwrap().clone()
    }

    /// The most recently executed statement, if any.
    pub fn last_statement(&self) -> Option<Statement> {
        self.log.lock().unwrap().last().cloned()
    }

    /// Assert the most recent statement's SQL and parameters.
    pub fn assert_last(&self, sql: &str, params: &[SqlValue]) {
        let last = self.last_statement().expect("no statements were executed");
        assert_eq!(last.sql, sql, "SQL mismatch");
        assert_eq!(last.params, params, "parameter mismatch");
    }
}

#[async_trait]
impl Driver for ReplayDriver {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<ResultSet> {
        self.log.lock().unwrap().push(Statement {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        match self.script.lock().unwrap().pop_front() {
            Some(Outcome::Rows(result)) => Ok(result),
            Some(Outcome::Fail(message)) => Err(Error::Query(message)),
            None => Ok(ResultSet::empty()),
        }
    }
}
