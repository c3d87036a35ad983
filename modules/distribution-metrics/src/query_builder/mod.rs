//! Safe dynamic SQL for reports.
//!
//! Request parameters select entries from static allow-lists; the entries
//! supply every identifier that reaches SQL, and request values travel only
//! as bind parameters.
//!
//! ```text
//! RequestParameters ──► build_filter_clause ──────► FilterClause (+ BoundParams)
//!        │                                                 │
//!        └─ groupBy ─► build_group_by_selection ─► GroupBySelection
//!                                                          │
//!                    SqlTemplate ──► compose_template ◄────┘
//!                                          │
//!                                          ▼
//!                                    ComposedQuery (sql + binds)
//! ```

pub mod allow_list;
pub mod filter;
pub mod group_by;
pub mod params;
pub mod template;

pub use allow_list::{AllowList, AllowListEntry};
pub use filter::{build_filter_clause, BoundParams, FilterClause, FilterCondition};
pub use group_by::{build_group_by_selection, GroupBySelection, InvalidGroupByKey};
pub use params::RequestParameters;
pub use template::{compose_template, BindValue, ComposedQuery, SqlTemplate, TemplateError};
