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

#![cfg_attr(docsrs, deny(broken_intra_doc_links))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Declarative secondary index definitions for document stores.
//!
//! An [`Index`] accumulates the fields, name and flags of an index, and renders
//! them into the two documents a MongoDB-compatible driver expects when it
//! creates an index: the key pattern and the options document.
//!
//! ```
//! use index_definition::{Direction, Index, IndexDefinition, TimeUnit};
//! use bson::doc;
//!
//! let mut index = Index::new();
//! index
//!     .on("createdAt", Direction::Descending)
//!     .expire_after(1, Some(TimeUnit::Hours))
//!     .unwrap();
//!
//! assert_eq!(index.index_keys(), doc! { "createdAt": -1 });
//! assert_eq!(index.index_options(), doc! { "expireAfterSeconds": 3600_i64 });
//! ```
//!
//! Nothing in this crate talks to a server. The rendered documents are handed
//! to whatever driver the caller uses.

mod config;
mod direction;
mod errors;
mod time_unit;
pub mod index;

pub use bson;
pub use config::{Config, ConfigBuilder};
pub use direction::Direction;
pub use errors::Error;
pub use index::{
    create_indexes_command,
    Duplicates,
    Index,
    IndexDefinition,
    IndexFilter,
    IndexModel,
    PartialIndexFilter,
};
pub use time_unit::TimeUnit;

pub type Result<T> = std::result::Result<T, Error>;
