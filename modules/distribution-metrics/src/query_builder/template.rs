//! Splicing validated builder output into fixed report SQL.
//!
//! A [`SqlTemplate`] is built from `&'static str` only, and the filter and
//! group-by inputs can only come out of the builder, so composition never
//! sees free-form request text. This is the single place where SQL strings
//! are concatenated.

use chrono::NaiveDate;
use thiserror::Error;

use super::filter::FilterClause;
use super::group_by::GroupBySelection;

const SELECT_SLOT: &str = "{select}";
const FILTERS_SLOT: &str = "{filters}";
const GROUP_BY_SLOT: &str = "{group_by}";

/// Errors in wiring a template to builder output. These are programming
/// errors and never depend on request values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template {template} has a group-by splice point but no selection was supplied")]
    MissingSelection { template: &'static str },

    #[error("Template {template} has no group-by splice point for the supplied selection")]
    UnusedSelection { template: &'static str },

    #[error("Template {template} has no filter splice point but {count} filter(s) were supplied")]
    UnusedFilters { template: &'static str, count: usize },

    #[error("Template {template} has splice points and cannot be used as a fixed query")]
    NotFixed { template: &'static str },
}

/// Developer-authored report SQL with optional `{select}`, `{filters}` and
/// `{group_by}` splice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlTemplate {
    name: &'static str,
    text: &'static str,
}

impl SqlTemplate {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    fn has_filters_slot(&self) -> bool {
        self.text.contains(FILTERS_SLOT)
    }

    fn has_selection_slot(&self) -> bool {
        self.text.contains(SELECT_SLOT) || self.text.contains(GROUP_BY_SLOT)
    }
}

/// A value bound out-of-band to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Date(NaiveDate),
    BigInt(i64),
}

/// Final statement text plus its positional bind values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedQuery {
    template: &'static str,
    sql: String,
    binds: Vec<BindValue>,
}

impl ComposedQuery {
    /// Use a template without splice points as-is, with caller-supplied binds
    /// for its own `$n` placeholders.
    pub fn fixed(template: &SqlTemplate, binds: Vec<BindValue>) -> Result<Self, TemplateError> {
        if template.has_filters_slot() || template.has_selection_slot() {
            return Err(TemplateError::NotFixed {
                template: template.name,
            });
        }
        Ok(Self {
            template: template.name,
            sql: template.text.to_string(),
            binds,
        })
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }
}

/// Splice a filter clause and an optional group-by selection into `template`.
///
/// Filters render positionally (`$1..$n`) and their values become the bind
/// list in the same order. Every occurrence of a splice point is replaced.
pub fn compose_template(
    template: &SqlTemplate,
    filters: &FilterClause,
    selection: Option<&GroupBySelection>,
) -> Result<ComposedQuery, TemplateError> {
    if !filters.is_empty() && !template.has_filters_slot() {
        return Err(TemplateError::UnusedFilters {
            template: template.name,
            count: filters.conditions().len(),
        });
    }

    let mut sql = template.text.to_string();

    match (selection, template.has_selection_slot()) {
        (Some(selection), true) => {
            sql = sql
                .replace(SELECT_SLOT, &selection.select_fragment())
                .replace(GROUP_BY_SLOT, &selection.group_by_fragment());
        }
        (None, true) => {
            return Err(TemplateError::MissingSelection {
                template: template.name,
            })
        }
        (Some(_), false) => {
            return Err(TemplateError::UnusedSelection {
                template: template.name,
            })
        }
        (None, false) => {}
    }

    sql = sql.replace(FILTERS_SLOT, &filters.render_positional(1));

    let binds = filters
        .bound_params()
        .values()
        .map(|value| BindValue::Text(value.to_string()))
        .collect();

    Ok(ComposedQuery {
        template: template.name,
        sql,
        binds,
    })
}
