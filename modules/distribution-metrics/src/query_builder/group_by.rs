//! Group-by selection from the comma-separated `groupBy` parameter.

use thiserror::Error;

use super::allow_list::{AllowList, AllowListEntry};

/// The request named one or more grouping keys that are not allow-listed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid groupBy value(s): {}. Allowed: {}",
    .invalid_keys.join(", "),
    .allowed_keys.join(", ")
)]
pub struct InvalidGroupByKey {
    pub invalid_keys: Vec<String>,
    pub allowed_keys: Vec<String>,
}

/// Validated grouping columns, in the order the caller asked for them.
///
/// Duplicates are kept: asking for `a,a` groups by `a` twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBySelection {
    columns: Vec<&'static AllowListEntry>,
}

impl GroupBySelection {
    /// `SELECT`-list fragment: `<expression> AS "<key>"` per column.
    pub fn select_fragment(&self) -> String {
        self.columns
            .iter()
            .map(|column| format!("{} AS \"{}\"", column.expression, column.key))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `GROUP BY` fragment: the same expressions, comma-joined.
    pub fn group_by_fragment(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.expression)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Validated keys, echoed back in the response envelope.
    pub fn keys(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.key).collect()
    }
}

/// Resolve `raw` (or `default_key` when absent) against the allow-list.
///
/// Every token is trimmed and checked; any unknown token fails the whole
/// selection before SQL is built.
pub fn build_group_by_selection(
    allow_list: &AllowList,
    raw: Option<&str>,
    default_key: &'static str,
) -> Result<GroupBySelection, InvalidGroupByKey> {
    let raw = raw.unwrap_or(default_key);

    let mut columns = Vec::new();
    let mut invalid_keys = Vec::new();
    for token in raw.split(',').map(str::trim) {
        match allow_list.get(token) {
            Some(entry) => columns.push(entry),
            None => invalid_keys.push(token.to_string()),
        }
    }

    if !invalid_keys.is_empty() {
        return Err(InvalidGroupByKey {
            invalid_keys,
            allowed_keys: allow_list.keys().into_iter().map(String::from).collect(),
        });
    }

    Ok(GroupBySelection { columns })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP_BY: AllowList = AllowList::new(&[
        AllowListEntry::new("Ctg", r#""Ctg""#),
        AllowListEntry::new("AD", r#""AD""#),
        AllowListEntry::new("grp_brand", "grp_brand"),
    ]);

    #[test]
    fn test_two_valid_keys() {
        let selection = build_group_by_selection(&GROUP_BY, Some("Ctg,AD"), "Ctg").unwrap();

        assert_eq!(selection.select_fragment(), r#""Ctg" AS "Ctg", "AD" AS "AD""#);
        assert_eq!(selection.group_by_fragment(), r#""Ctg", "AD""#);
        assert_eq!(selection.keys(), vec!["Ctg", "AD"]);
    }

    #[test]
    fn test_invalid_key_rejected() {
        let err = build_group_by_selection(&GROUP_BY, Some("Ctg,Foo"), "Ctg").unwrap_err();

        assert_eq!(err.invalid_keys, vec!["Foo".to_string()]);
        assert_eq!(err.allowed_keys, vec!["Ctg", "AD", "grp_brand"]);
        assert_eq!(
            err.to_string(),
            "Invalid groupBy value(s): Foo. Allowed: Ctg, AD, grp_brand"
        );
    }

    #[test]
    fn test_order_preserved_without_dedup() {
        let selection = build_group_by_selection(&GROUP_BY, Some("grp_brand,AD,AD"), "Ctg").unwrap();
        assert_eq!(selection.keys(), vec!["grp_brand", "AD", "AD"]);
        assert_eq!(selection.group_by_fragment(), r#"grp_brand, "AD", "AD""#);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let selection = build_group_by_selection(&GROUP_BY, Some(" AD , Ctg"), "Ctg").unwrap();
        assert_eq!(selection.keys(), vec!["AD", "Ctg"]);
    }

    #[test]
    fn test_absent_falls_back_to_default() {
        let selection = build_group_by_selection(&GROUP_BY, None, "Ctg").unwrap();
        assert_eq!(selection.keys(), vec!["Ctg"]);
        assert_eq!(selection.select_fragment(), r#""Ctg" AS "Ctg""#);
    }

    #[test]
    fn test_empty_value_is_an_invalid_key() {
        let err = build_group_by_selection(&GROUP_BY, Some(""), "Ctg").unwrap_err();
        assert_eq!(err.invalid_keys, vec![String::new()]);

        let err = build_group_by_selection(&GROUP_BY, Some("AD,"), "Ctg").unwrap_err();
        assert_eq!(err.invalid_keys, vec![String::new()]);
    }

    #[test]
    fn test_all_invalid_tokens_reported_in_order() {
        let err = build_group_by_selection(&GROUP_BY, Some("x,Ctg,ctg,\"AD\""), "Ctg").unwrap_err();
        assert_eq!(err.invalid_keys, vec!["x", "ctg", "\"AD\""]);
    }

    #[test]
    fn test_repeated_build_is_identical() {
        let first = build_group_by_selection(&GROUP_BY, Some("AD,Ctg"), "Ctg").unwrap();
        let second = build_group_by_selection(&GROUP_BY, Some("AD,Ctg"), "Ctg").unwrap();
        assert_eq!(first.select_fragment(), second.select_fragment());
        assert_eq!(first.group_by_fragment(), second.group_by_fragment());
    }
}
