use crate::error::Result;
use crate::row::Row;

/// Rough type tag for a column. Informational only: nothing validates or
/// encodes based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
}

/// A named column with its type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }
}

/// Function that maps a returned row onto an application value.
pub type Decoder<T> = fn(&Row) -> Result<T>;

/// Static description of a table: its name, primary key, ordered columns,
/// and the decoder that turns a returned row into a `T`.
///
/// A schema is built once per entity type and outlives every [`Query`]
/// constructed from it.
///
/// [`Query`]: crate::query::Query
pub struct Schema<T> {
    table: &'static str,
    primary_key: &'static str,
    fields: Vec<Field>,
    decode: Decoder<T>,
}

impl<T> Schema<T> {
    pub fn new(
        table: &'static str,
        primary_key: &'static str,
        fields: Vec<Field>,
        decode: Decoder<T>,
    ) -> Self {
        Self {
            table,
            primary_key,
            fields,
            decode,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn primary_key(&self) -> &'static str {
        self.primary_key
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn decode_row(&self, row: &Row) -> Result<T> {
        (self.decode)(row)
    }

    /// Render the INSERT statement for this table.
    ///
    /// The primary-key column is excluded by name match; placeholders are
    /// numbered positionally by field order. Values supplied at execution
    /// time must follow that same order.
    pub fn insert_sql(&self) -> String {
        let columns: Vec<&str> = self
            .fields
            .iter()
            .map(|f| f.name)
            .filter(|name| *name != self.primary_key)
            .collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("${n}")).collect();
        format!(
            "INSERT INTO {}({}) VALUES ({}) RETURNING *",
            self.table,
            columns.join(", "),
            placeholders.join(", ")
        )
    }
}
