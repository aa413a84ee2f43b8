//! Query string construction.
//!
//! Request parameters render to a list of `(key, value)` pairs following the
//! API's JSON:API conventions: bracketed composite keys (`page[offset]`,
//! `filter[route]`, `fields[stop]`), comma-joined list values, and a `-`
//! prefix on the sort key for descending order. Empty scalars and empty
//! lists are omitted entirely. Percent-encoding happens in the transport
//! layer when the pairs are attached to the request.

/// A sort key for some resource's list endpoint.
pub trait SortKey: Copy {
    fn as_str(self) -> &'static str;
}

/// Sort direction plus key, rendered as `key` or `-key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<K> {
    key: K,
    descending: bool,
}

impl<K: SortKey> Sort<K> {
    /// Sort ascending by `key`.
    pub fn asc(key: K) -> Self {
        Self {
            key,
            descending: false,
        }
    }

    /// Sort descending by `key`.
    pub fn desc(key: K) -> Self {
        Self {
            key,
            descending: true,
        }
    }

    fn render(self) -> String {
        if self.descending {
            format!("-{}", self.key.as_str())
        } else {
            self.key.as_str().to_string()
        }
    }
}

/// Accumulates query pairs, skipping empty values.
#[derive(Debug, Default)]
pub(crate) struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` unless the value is empty.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value));
        }
    }

    /// Add `key=value` when present.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
    }

    /// Add `key=v1,v2,v3` unless the list is empty. List order is preserved.
    pub fn push_list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key.to_string(), joined));
        }
    }

    /// Add the `sort` parameter when a sort was requested.
    pub fn push_sort<K: SortKey>(&mut self, sort: Option<Sort<K>>) {
        if let Some(sort) = sort {
            self.pairs.push(("sort".to_string(), sort.render()));
        }
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum TestSortKey {
        Latitude,
    }

    impl SortKey for TestSortKey {
        fn as_str(self) -> &'static str {
            "latitude"
        }
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let mut query = QueryBuilder::new();
        query.push("page[offset]", "");
        query.push_opt::<u32>("page[limit]", None);
        query.push_list::<&str>("filter[id]", &[]);
        assert!(query.into_pairs().is_empty());
    }

    #[test]
    fn test_scalar_and_list_rendering() {
        let mut query = QueryBuilder::new();
        query.push_opt("page[offset]", Some(20));
        query.push("filter[direction_id]", "1");
        query.push_list("filter[route]", &["Red", "Orange", "Blue"]);
        assert_eq!(
            query.into_pairs(),
            vec![
                ("page[offset]".to_string(), "20".to_string()),
                ("filter[direction_id]".to_string(), "1".to_string()),
                ("filter[route]".to_string(), "Red,Orange,Blue".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_order_is_preserved() {
        let mut query = QueryBuilder::new();
        query.push_list("fields[stop]", &["name", "latitude", "longitude"]);
        assert_eq!(
            query.into_pairs(),
            vec![(
                "fields[stop]".to_string(),
                "name,latitude,longitude".to_string()
            )]
        );
    }

    #[test]
    fn test_sort_direction_prefix() {
        let mut query = QueryBuilder::new();
        query.push_sort(Some(Sort::desc(TestSortKey::Latitude)));
        assert_eq!(
            query.into_pairs(),
            vec![("sort".to_string(), "-latitude".to_string())]
        );

        let mut query = QueryBuilder::new();
        query.push_sort(Some(Sort::asc(TestSortKey::Latitude)));
        assert_eq!(
            query.into_pairs(),
            vec![("sort".to_string(), "latitude".to_string())]
        );
    }
}
