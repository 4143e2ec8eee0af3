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


use bson::{doc, Bson, Document};
use serde::{Deserialize, Deserializer, Serialize};
use crate::Result;
use crate::index::IndexDefinition;

/// One entry of the `indexes` array of a `createIndexes` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexModel {
    #[serde(rename = "key")]
    pub keys: Document,

    /// The options for the index.
    #[serde(flatten, deserialize_with = "deserialize_options")]
    pub options: Option<Document>,
}

/// An absent options document reads back as `None`, the same as
/// [`IndexModel::from_definition`] stores it.
fn deserialize_options<'de, D>(deserializer: D) -> std::result::Result<Option<Document>, D::Error>
where
    D: Deserializer<'de>,
{
    let options = Document::deserialize(deserializer)?;
    Ok(if options.is_empty() { None } else { Some(options) })
}

impl IndexModel {

    pub fn from_definition<D: IndexDefinition + ?Sized>(definition: &D) -> IndexModel {
        let options = definition.index_options();
        IndexModel {
            keys: definition.index_keys(),
            options: if options.is_empty() { None } else { Some(options) },
        }
    }

    /// Renders `{ "key": <keys>, <options...> }`, the shape the server
    /// expects for an index specification.
    pub fn to_document(&self) -> Document {
        let mut result = doc! {
            "key": self.keys.clone(),
        };
        if let Some(options) = &self.options {
            for (key, value) in options {
                result.insert(key.as_str(), value.clone());
            }
        }
        result
    }

    pub fn serialize_to_document(&self) -> Result<Document> {
        let result = bson::to_document(self)?;
        Ok(result)
    }

}

/// Builds the `createIndexes` command for `collection`.
pub fn create_indexes_command(collection: &str, indexes: &[&dyn IndexDefinition]) -> Document {
    let specs: Vec<Bson> = indexes
        .iter()
        .map(|definition| Bson::Document(IndexModel::from_definition(*definition).to_document()))
        .collect();

    doc! {
        "createIndexes": collection,
        "indexes": specs,
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;
    use crate::{Direction, Index, IndexModel};

    #[test]
    fn test_model_without_options() {
        let index = Index::with_field("age", Direction::Ascending);
        let model = index.to_model();
        assert_eq!(model.keys, doc! { "age": 1 });
        assert!(model.options.is_none());
        assert_eq!(model.to_document(), doc! { "key": { "age": 1 } });
    }

    #[test]
    fn test_deserialize_model_without_options() {
        let model = Index::with_field("a", Direction::Ascending).to_model();
        let parsed = bson::from_document::<IndexModel>(model.to_document()).unwrap();
        assert_eq!(parsed, model);
        assert!(parsed.options.is_none());
    }

    #[test]
    fn test_deserialize_model_with_options() {
        let mut index = Index::with_field("createdAt", Direction::Descending);
        index.named("created_at_ttl").unique().expire_after_seconds(3600);

        let model = index.to_model();
        let parsed = bson::from_document::<IndexModel>(model.to_document()).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn test_serialize_matches_to_document() {
        let mut index = Index::with_field("author.age", Direction::Descending);
        index.named("author_age").unique();

        let model = IndexModel::from_definition(&index);
        let serialized = model.serialize_to_document().unwrap();
        assert_eq!(serialized, model.to_document());
        assert_eq!(
            serialized,
            doc! {
                "key": { "author.age": -1 },
                "name": "author_age",
                "unique": true,
            },
        );
    }

}
