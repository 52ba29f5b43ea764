//! Ordered query string parameters.

use url::form_urlencoded;

/// Query string parameters in insertion order.
///
/// Setting an existing key replaces its value in place; new keys are
/// appended. Serializes as `application/x-www-form-urlencoded` without a
/// leading `?`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    params: Vec<(String, String)>,
}

impl QueryState {
    /// An empty query.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a `location.search` style string. The leading `?` is optional.
    /// A repeated key keeps its first position and its last value.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        form_urlencoded::parse(search.as_bytes()).fold(Self::empty(), |query, (k, v)| {
            query.set(k.into_owned(), v.into_owned())
        })
    }

    /// Set `key` to `value`, returning the updated query.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Keys in order.
    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Form-encoded query string.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

impl std::fmt::Display for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
