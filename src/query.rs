use crate::schema::Schema;
use crate::value::SqlValue;

/// Accumulator of select columns, condition fragments, and bound parameters,
/// scoped to a [`Schema`].
///
/// Each builder call consumes the query and returns an extended one; a query
/// is built up, handed to the [`Database`] facade once, and discarded.
///
/// Condition fragments are literal SQL text (`"id = $1"`). Placeholder
/// numbers inside them are the caller's bookkeeping: they must continue from
/// whatever bindings the query already carries, and the builder performs no
/// renumbering or arity checking.
///
/// [`Database`]: crate::database::Database
#[must_use]
pub struct Query<'a, T> {
    schema: &'a Schema<T>,
    select: Vec<String>,
    conditions: Vec<String>,
    bindings: Vec<SqlValue>,
}

impl<'a, T> Query<'a, T> {
    /// Start an empty query against `schema`.
    pub fn from(schema: &'a Schema<T>) -> Self {
        Self {
            schema,
            select: Vec::new(),
            conditions: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Append columns to the select list, preserving order.
    ///
    /// Columns are not deduplicated; selecting the same column twice emits
    /// it twice. A query whose select list stays empty renders the
    /// syntactically invalid `SELECT  FROM t` — callers must select
    /// something (or `"*"`) before building a SELECT.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.select.extend(columns.iter().map(|c| c.to_string()));
        self
    }

    /// Append one condition fragment and flatten its bound values onto the
    /// query, preserving call order. Fragments are joined with ` AND ` at
    /// render time.
    pub fn filter(mut self, fragment: impl Into<String>, values: Vec<SqlValue>) -> Self {
        self.conditions.push(fragment.into());
        self.bindings.extend(values);
        self
    }

    /// The accumulated parameter values, in fragment order.
    pub fn bindings(&self) -> &[SqlValue] {
        &self.bindings
    }

    pub(crate) fn schema(&self) -> &'a Schema<T> {
        self.schema
    }

    /// Render the SELECT statement.
    pub fn build_select(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {}",
            self.select.join(", "),
            self.schema.table()
        );
        self.push_where(&mut sql);
        sql
    }

    /// Render the UPDATE statement for `fields`.
    ///
    /// SET placeholders are numbered after the query's existing bindings,
    /// starting at `bindings.len() + 1`, so the values for `fields` must be
    /// appended after the bindings when the statement is executed. This
    /// assumes the condition fragments number their placeholders `$1..$k`
    /// contiguously.
    pub fn update_sql(&self, fields: &[(&str, SqlValue)]) -> String {
        let offset = self.bindings.len();
        let assignments: Vec<String> = fields
            .iter()
            .enumerate()
            .map(|(i, (name, _))| format!("{} = ${}", name, offset + i + 1))
            .collect();
        let mut sql = format!("UPDATE {} SET {}", self.schema.table(), assignments.join(", "));
        self.push_where(&mut sql);
        sql.push_str(" RETURNING *");
        sql
    }

    /// Render the DELETE statement.
    pub fn delete_sql(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.schema.table());
        self.push_where(&mut sql);
        sql.push_str(" RETURNING *");
        sql
    }

    fn push_where(&self, sql: &mut String) {
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::row::Row;
    use crate::schema::Field;

    fn decode_unit(_row: &Row) -> Result<()> {
        Ok(())
    }

    fn notes_schema() -> Schema<()> {
        Schema::new(
            "notes",
            "id",
            vec![
                Field::integer("id"),
                Field::text("title"),
                Field::text("content"),
            ],
            decode_unit,
        )
    }

    #[test]
    fn test_select_without_conditions() {
        let schema = notes_schema();
        let sql = Query::from(&schema).select(&["id", "title"]).build_select();
        assert_eq!(sql, "SELECT id, title FROM notes");
    }

    #[test]
    fn test_select_with_condition() {
        let schema = notes_schema();
        let query = Query::from(&schema)
            .select(&["id", "title"])
            .filter("id = $1", vec![SqlValue::Int32(5)]);
        assert_eq!(query.build_select(), "SELECT id, title FROM notes WHERE id = $1");
        assert_eq!(query.bindings(), &[SqlValue::Int32(5)]);
    }

    #[test]
    fn test_conditions_join_with_and_in_call_order() {
        let schema = notes_schema();
        let query = Query::from(&schema)
            .select(&["*"])
            .filter("id = $1", vec![SqlValue::Int32(5)])
            .filter("title = $2", vec![SqlValue::from("groceries")]);
        assert_eq!(
            query.build_select(),
            "SELECT * FROM notes WHERE id = $1 AND title = $2"
        );
        assert_eq!(
            query.bindings(),
            &[SqlValue::Int32(5), SqlValue::Text("groceries".to_string())]
        );
    }

    #[test]
    fn test_select_does_not_deduplicate() {
        let schema = notes_schema();
        let sql = Query::from(&schema)
            .select(&["id"])
            .select(&["id"])
            .build_select();
        assert_eq!(sql, "SELECT id, id FROM notes");
    }

    #[test]
    fn test_empty_select_renders_naively() {
        // Documented behavior: no select list produces invalid SQL rather
        // than an error.
        let schema = notes_schema();
        assert_eq!(Query::from(&schema).build_select(), "SELECT  FROM notes");
    }

    #[test]
    fn test_insert_excludes_primary_key() {
        let schema = notes_schema();
        assert_eq!(
            schema.insert_sql(),
            "INSERT INTO notes(title, content) VALUES ($1, $2) RETURNING *"
        );
    }

    #[test]
    fn test_insert_placeholder_count() {
        let schema = notes_schema();
        let sql = schema.insert_sql();
        let placeholders = sql.matches('$').count();
        assert_eq!(placeholders, schema.fields().len() - 1);
        assert!(!sql.contains("id,"));
    }

    #[test]
    fn test_update_numbers_after_bindings() {
        let schema = notes_schema();
        let query = Query::from(&schema).filter("id = $1", vec![SqlValue::Int32(5)]);
        let sql = query.update_sql(&[
            ("title", SqlValue::from("chores")),
            ("content", SqlValue::from("mow the lawn")),
        ]);
        assert_eq!(
            sql,
            "UPDATE notes SET title = $2, content = $3 WHERE id = $1 RETURNING *"
        );
    }

    #[test]
    fn test_update_without_conditions() {
        let schema = notes_schema();
        let sql = Query::from(&schema).update_sql(&[("title", SqlValue::from("chores"))]);
        assert_eq!(sql, "UPDATE notes SET title = $1 RETURNING *");
    }

    #[test]
    fn test_delete_with_condition() {
        let schema = notes_schema();
        let query = Query::from(&schema).filter("id = $1", vec![SqlValue::Int32(5)]);
        assert_eq!(query.delete_sql(), "DELETE FROM notes WHERE id = $1 RETURNING *");
    }

    #[test]
    fn test_delete_without_conditions() {
        let schema = notes_schema();
        assert_eq!(Query::from(&schema).delete_sql(), "DELETE FROM notes RETURNING *");
    }
}
