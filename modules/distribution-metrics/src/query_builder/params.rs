//! Request query parameters as an ordered, de-duplicated map.

/// Query-string parameters in first-seen order.
///
/// A repeated name keeps the position of its first occurrence and takes the
/// value of its last one, matching common query-string parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    pairs: Vec<(String, String)>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove a parameter and return its value.
    ///
    /// Used for control parameters (`groupBy`, `displayMode`) so they never
    /// reach the filter builder.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(existing, _)| existing == name)?;
        Some(self.pairs.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl From<Vec<(String, String)>> for RequestParameters {
    fn from(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_value_wins_first_position_kept() {
        let params: RequestParameters =
            [("AD", "North"), ("Ctg", "Beverages"), ("AD", "South")].into_iter().collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("AD"), Some("South"));
        let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["AD", "Ctg"]);
    }

    #[test]
    fn test_take_removes_parameter() {
        let mut params: RequestParameters =
            [("groupBy", "Ctg,AD"), ("channel", "Retail")].into_iter().collect();

        assert_eq!(params.take("groupBy").as_deref(), Some("Ctg,AD"));
        assert_eq!(params.take("groupBy"), None);
        assert_eq!(params.get("channel"), Some("Retail"));
        assert_eq!(params.len(), 1);
    }
}
