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


use std::fmt::Debug;
use bson::Document;

/// The predicate of a partial index.
///
/// The index only keeps a handle to the filter; the document is obtained when
/// the options are rendered.
pub trait IndexFilter: Debug + Send + Sync {
    fn filter_object(&self) -> Document;
}

impl IndexFilter for Document {
    fn filter_object(&self) -> Document {
        self.clone()
    }
}

/// A filter expression given as a ready-made document.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialIndexFilter {
    filter_expression: Document,
}

impl PartialIndexFilter {

    pub fn of(filter_expression: Document) -> PartialIndexFilter {
        PartialIndexFilter {
            filter_expression,
        }
    }

}

impl IndexFilter for PartialIndexFilter {
    fn filter_object(&self) -> Document {
        self.filter_expression.clone()
    }
}

impl From<Document> for PartialIndexFilter {
    fn from(filter_expression: Document) -> Self {
        PartialIndexFilter::of(filter_expression)
    }
}
