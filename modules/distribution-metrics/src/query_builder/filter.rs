//! Equality filters built from request parameters.
//!
//! Each accepted parameter becomes one `AND <expression> = <placeholder>`
//! condition. The expression and the placeholder name both come from the
//! allow-list entry; the request value only ever lands in [`BoundParams`].

use super::allow_list::AllowList;
use super::params::RequestParameters;

/// One rendered condition: trusted expression plus the name its value is bound under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCondition {
    expression: &'static str,
    placeholder: &'static str,
}

impl FilterCondition {
    pub fn expression(&self) -> &'static str {
        self.expression
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }
}

/// Placeholder name to request value, in condition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundParams {
    values: Vec<(&'static str, String)>,
}

impl BoundParams {
    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == placeholder)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validated filter conditions with their bound values.
///
/// Only [`build_filter_clause`] constructs a non-empty clause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterClause {
    conditions: Vec<FilterCondition>,
    params: BoundParams,
}

impl FilterClause {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    pub fn bound_params(&self) -> &BoundParams {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render with named placeholders, e.g. `AND "Ctg" = :Ctg`.
    pub fn render_named(&self) -> String {
        self.render_with(|condition, _| format!(":{}", condition.placeholder))
    }

    /// Render with Postgres positional placeholders starting at `$first_index`.
    pub(crate) fn render_positional(&self, first_index: usize) -> String {
        self.render_with(|_, i| format!("${}", first_index + i))
    }

    fn render_with(&self, placeholder: impl Fn(&FilterCondition, usize) -> String) -> String {
        self.conditions
            .iter()
            .enumerate()
            .map(|(i, condition)| {
                format!("AND {} = {}", condition.expression, placeholder(condition, i))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build equality filters for every allow-listed, non-empty parameter.
///
/// Unknown keys are dropped without error; empty values mean "no filter".
pub fn build_filter_clause(allow_list: &AllowList, params: &RequestParameters) -> FilterClause {
    let mut clause = FilterClause::empty();

    for (key, value) in params.iter() {
        let Some(entry) = allow_list.get(key) else {
            tracing::debug!(key, "ignoring parameter not in filter allow-list");
            continue;
        };
        if value.is_empty() {
            continue;
        }

        clause.conditions.push(FilterCondition {
            expression: entry.expression,
            placeholder: entry.key,
        });
        clause.params.values.push((entry.key, value.to_string()));
    }

    clause
}
