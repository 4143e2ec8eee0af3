// Copyright 2024 Vincent Chan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use bson::Document;
use indexmap::IndexMap;
use log::{debug, warn};
use crate::{Config, Direction, Error, Result, TimeUnit};
use crate::index::{IndexDefinition, IndexFilter, IndexModel};

/// What a unique index does with documents that already share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplicates {
    Retain,

    /// Drop all but the first duplicate while building the index.
    ///
    /// Removed from the server in 3.0, which ignores the option. It is still
    /// rendered as `dropDups` for older servers unless
    /// [`Config::legacy_drop_dups`] is turned off.
    Drop,
}

/// A secondary index under construction.
///
/// Setters return the same instance so calls can be chained:
///
/// ```
/// use index_definition::{Direction, Index, IndexDefinition};
/// use bson::doc;
///
/// let mut index = Index::new();
/// index.on("email", Direction::Ascending).unique().sparse();
///
/// assert_eq!(index.index_keys(), doc! { "email": 1 });
/// assert_eq!(index.index_options(), doc! { "unique": true, "sparse": true });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Insertion order is the order of the key pattern.
    field_spec: IndexMap<String, Direction>,
    name: Option<String>,
    unique: bool,
    drop_duplicates: bool,
    sparse: bool,
    background: bool,
    expire_after_seconds: Option<i64>,
    filter: Option<Arc<dyn IndexFilter>>,
}

impl Index {

    pub fn new() -> Index {
        Index::default()
    }

    pub fn with_field<K: Into<String>>(key: K, direction: Direction) -> Index {
        let mut index = Index::new();
        index.on(key, direction);
        index
    }

    /// Adds `key` to the index. A key that is already present keeps its
    /// position and takes the new direction.
    pub fn on<K: Into<String>>(&mut self, key: K, direction: Direction) -> &mut Index {
        self.field_spec.insert(key.into(), direction);
        self
    }

    pub fn named<S: Into<String>>(&mut self, name: S) -> &mut Index {
        self.name = Some(name.into());
        self
    }

    /// Reject documents that contain a duplicate value for the indexed fields.
    pub fn unique(&mut self) -> &mut Index {
        self.unique = true;
        self
    }

    pub fn unique_with(&mut self, duplicates: Duplicates) -> &mut Index {
        if duplicates == Duplicates::Drop {
            warn!("dropDups is ignored by servers since 3.0, index keys: {}", self.index_keys());
            self.drop_duplicates = true;
        }
        self.unique()
    }

    /// Skip documents that are missing the indexed field.
    pub fn sparse(&mut self) -> &mut Index {
        self.sparse = true;
        self
    }

    /// Build the index without blocking other operations on the collection.
    pub fn background(&mut self) -> &mut Index {
        self.background = true;
        self
    }

    /// Sets the time-to-live. The value is converted to seconds right away.
    ///
    /// Fails with [`Error::InvalidArgument`] when no unit is given; the index
    /// is left untouched in that case.
    pub fn expire_after(&mut self, value: i64, unit: Option<TimeUnit>) -> Result<&mut Index> {
        let unit = unit.ok_or_else(|| {
            Error::invalid_argument("TimeUnit for expiration must not be null")
        })?;
        let seconds = unit.to_seconds(value);
        debug!("expire after {} {} ({} seconds)", value, unit, seconds);
        self.expire_after_seconds = Some(seconds);
        Ok(self)
    }

    pub fn expire_after_seconds(&mut self, seconds: i64) -> &mut Index {
        self.expire_after_seconds = Some(seconds);
        self
    }

    pub fn expire_after_duration(&mut self, duration: Duration) -> &mut Index {
        let seconds = i64::try_from(duration.as_secs()).unwrap_or(i64::MAX);
        self.expire_after_seconds(seconds)
    }

    /// Only index the documents matching `filter`. `None` clears a filter set
    /// before.
    pub fn partial(&mut self, filter: Option<Arc<dyn IndexFilter>>) -> &mut Index {
        self.filter = filter;
        self
    }

    #[inline]
    pub fn fields(&self) -> &IndexMap<String, Direction> {
        &self.field_spec
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    #[inline]
    pub fn is_drop_duplicates(&self) -> bool {
        self.drop_duplicates
    }

    #[inline]
    pub fn is_sparse(&self) -> bool {
        self.sparse
    }

    #[inline]
    pub fn is_background(&self) -> bool {
        self.background
    }

    #[inline]
    pub fn ttl_seconds(&self) -> Option<i64> {
        self.expire_after_seconds
    }

    #[inline]
    pub fn partial_filter(&self) -> Option<&Arc<dyn IndexFilter>> {
        self.filter.as_ref()
    }

    pub fn index_options_with_config(&self, config: &Config) -> Document {
        let mut options = Document::new();

        if let Some(name) = self.name.as_deref().filter(|name| has_text(name)) {
            options.insert("name", name);
        }
        if self.unique {
            options.insert("unique", true);
        }
        if self.drop_duplicates && config.legacy_drop_dups {
            options.insert("dropDups", true);
        }
        if self.sparse {
            options.insert("sparse", true);
        }
        if self.background {
            options.insert("background", true);
        }
        if let Some(seconds) = self.expire_after_seconds.filter(|seconds| *seconds >= 0) {
            options.insert("expireAfterSeconds", seconds);
        }
        if let Some(filter) = &self.filter {
            options.insert("partialFilterExpression", filter.filter_object());
        }

        options
    }

    pub fn to_model(&self) -> IndexModel {
        IndexModel::from_definition(self)
    }

}

impl IndexDefinition for Index {

    fn index_keys(&self) -> Document {
        let mut keys = Document::new();
        for (key, direction) in &self.field_spec {
            keys.insert(key.as_str(), direction.key_value());
        }
        keys
    }

    fn index_options(&self) -> Document {
        self.index_options_with_config(&Config::default())
    }

}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index: {} - Options: {}", self.index_keys(), self.index_options())
    }
}

#[inline]
fn has_text(s: &str) -> bool {
    s.chars().any(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use bson::doc;
    use crate::{Config, Direction, Duplicates, Index, IndexDefinition, TimeUnit};

    #[test]
    fn test_empty_index() {
        let index = Index::new();
        assert!(index.index_keys().is_empty());
        assert!(index.index_options().is_empty());
    }

    #[test]
    fn test_blank_name_is_omitted() {
        let mut index = Index::with_field("a", Direction::Ascending);
        index.named("   ");
        assert!(index.index_options().is_empty());

        index.named("");
        assert!(index.index_options().is_empty());

        index.named("a_1");
        assert_eq!(index.index_options(), doc! { "name": "a_1" });
    }

    #[test]
    fn test_unique_with_duplicates() {
        let mut retain = Index::with_field("a", Direction::Ascending);
        retain.unique_with(Duplicates::Retain);
        assert!(retain.is_unique());
        assert!(!retain.is_drop_duplicates());
        assert_eq!(retain.index_options(), doc! { "unique": true });

        let mut drop = Index::with_field("a", Direction::Ascending);
        drop.unique_with(Duplicates::Drop);
        assert!(drop.is_unique());
        assert!(drop.is_drop_duplicates());
        assert_eq!(drop.index_options(), doc! { "unique": true, "dropDups": true });
    }

    #[test]
    fn test_drop_dups_suppressed_by_config() {
        let mut index = Index::with_field("a", Direction::Ascending);
        index.unique_with(Duplicates::Drop);

        let config = Config::builder().legacy_drop_dups(false).build();
        assert_eq!(index.index_options_with_config(&config), doc! { "unique": true });
    }

    #[test]
    fn test_negative_ttl_is_omitted() {
        let mut index = Index::with_field("a", Direction::Ascending);
        index.expire_after(-5, Some(TimeUnit::Minutes)).unwrap();
        assert_eq!(index.ttl_seconds(), Some(-300));
        assert!(index.index_options().is_empty());

        index.expire_after_seconds(0);
        assert_eq!(index.index_options(), doc! { "expireAfterSeconds": 0_i64 });
    }

    #[test]
    fn test_expire_after_duration_saturates() {
        let mut index = Index::with_field("a", Direction::Ascending);
        index.expire_after_duration(Duration::MAX);
        assert_eq!(index.ttl_seconds(), Some(i64::MAX));
        assert_eq!(index.index_options(), doc! { "expireAfterSeconds": i64::MAX });
    }

    #[test]
    fn test_partial_filter_cleared() {
        let mut index = Index::with_field("a", Direction::Ascending);
        index.partial(Some(Arc::new(doc! { "a": { "$exists": true } })));
        assert_eq!(
            index.index_options(),
            doc! { "partialFilterExpression": { "a": { "$exists": true } } },
        );

        index.partial(None);
        assert!(index.partial_filter().is_none());
        assert!(index.index_options().is_empty());
    }

    #[test]
    fn test_display() {
        let mut index = Index::with_field("email", Direction::Ascending);
        index.unique();
        let text = index.to_string();
        assert!(text.starts_with("Index: "));
        assert!(text.contains("email"));
        assert!(text.contains(" - Options: "));
        assert!(text.contains("unique"));
    }

}
