use async_trait::async_trait;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error};

use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::row::ResultSet;
use crate::value::SqlValue;

/// [`Driver`] backed by tokio-postgres over a single connection.
pub struct PostgresDriver {
    client: Client,
}

impl PostgresDriver {
    /// Connect to a PostgreSQL database and spawn its connection task.
    pub async fn connect(url: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(url, NoTls)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!(error = %e, "postgres connection task failed");
            }
        });

        Ok(Self { client })
    }
}

#[async_trait]
impl Driver for PostgresDriver {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<ResultSet> {
        debug!(sql, params = params.len(), "executing statement");

        let owned: Vec<Box<dyn ToSql + Sync + Send>> = params.iter().map(to_sql).collect();
        let refs: Vec<&(dyn ToSql + Sync)> = owned
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(sql, &refs)
            .await
            .map_err(|e| Error::Query(e.to_string()))?;

        let columns: Vec<String> = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let values: Vec<Vec<String>> = rows
            .iter()
            .map(|row| (0..row.len()).map(|i| render_column(row, i)).collect())
            .collect();

        Ok(ResultSet::new(columns, values))
    }
}

fn to_sql(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null => Box::new(None::<String>),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Int32(i) => Box::new(*i),
        SqlValue::Int64(i) => Box::new(*i),
        SqlValue::Bool(b) => Box::new(*b),
    }
}

/// Render one column to its text form by probing the common types.
/// Covers the types [`SqlValue`] round-trips plus f64; anything else
/// falls back to a NULL marker.
fn render_column(row: &tokio_postgres::Row, index: usize) -> String {
    if let Ok(v) = row.try_get::<_, i32>(index) {
        return v.to_string();
    }
    if let Ok(v) = row.try_get::<_, i64>(index) {
        return v.to_string();
    }
    if let Ok(v) = row.try_get::<_, String>(index) {
        return v;
    }
    if let Ok(v) = row.try_get::<_, bool>(index) {
        return v.to_string();
    }
    if let Ok(v) = row.try_get::<_, f64>(index) {
        return v.to_string();
    }
    match row.try_get::<_, Option<String>>(index) {
        Ok(Some(v)) => v,
        _ => "NULL".to_string(),
    }
}
