use async_trait::async_trait;

use crate::error::Result;
use crate::row::ResultSet;
use crate::value::SqlValue;

/// Seam to the underlying database client.
///
/// A driver executes one statement with 1-indexed `$n` positional
/// parameters and returns the rows it produced. Connection state, value
/// encoding, and the wire protocol all live behind this trait.
#[async_trait]
pub trait Driver: Send + Sync {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<ResultSet>;
}
