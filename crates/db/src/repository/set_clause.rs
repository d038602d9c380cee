//! Builder for the SET clause of a partial `UPDATE`.
//!
//! Column names are static, values are always bound through positional
//! placeholders (`$1`, `$2`, …) so nothing caller-supplied ever reaches the
//! SQL text.

use crate::models::UpdateListInput;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetClause {
    assignments: Vec<(&'static str, String)>,
}

impl SetClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `column = <value>`.
    pub fn set(&mut self, column: &'static str, value: impl Into<String>) -> &mut Self {
        self.assignments.push((column, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Render `col = $1, col2 = $2` and return the next free placeholder
    /// index, so the caller can number its own WHERE parameters after it.
    pub fn render(&self) -> (String, usize) {
        let sql = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        (sql, self.assignments.len() + 1)
    }

    /// Values in placeholder order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|(_, value)| value.as_str())
    }
}

impl From<&UpdateListInput> for SetClause {
    fn from(input: &UpdateListInput) -> Self {
        let mut clause = SetClause::new();
        if let Some(title) = &input.title {
            clause.set("title", title.as_str());
        }
        if let Some(description) = &input.description {
            clause.set("description", description.as_str());
        }
        clause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_are_numbered_in_order() {
        let input = UpdateListInput {
            title: Some("groceries".into()),
            description: Some("weekly run".into()),
        };
        let clause = SetClause::from(&input);
        let (sql, next) = clause.render();

        assert_eq!(sql, "title = $1, description = $2");
        assert_eq!(next, 3);
        assert_eq!(clause.values().collect::<Vec<_>>(), vec!["groceries", "weekly run"]);
    }

    #[test]
    fn description_only_starts_at_first_placeholder() {
        let input = UpdateListInput {
            title: None,
            description: Some("new text".into()),
        };
        let (sql, next) = SetClause::from(&input).render();

        assert_eq!(sql, "description = $1");
        assert_eq!(next, 2);
    }

    #[test]
    fn empty_input_yields_empty_clause() {
        let clause = SetClause::from(&UpdateListInput::default());
        assert!(clause.is_empty());
        assert_eq!(clause.render(), (String::new(), 1));
    }

    #[test]
    fn values_never_appear_in_sql() {
        let mut clause = SetClause::new();
        clause.set("title", "x'; DROP TABLE todo_lists; --");
        let (sql, _) = clause.render();

        assert_eq!(sql, "title = $1");
        assert_eq!(clause.len(), 1);
    }
}
