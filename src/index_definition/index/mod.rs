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


mod index;
mod index_definition;
mod index_filter;
mod index_model;

pub use index::{Duplicates, Index};
pub use index_definition::IndexDefinition;
pub use index_filter::{IndexFilter, PartialIndexFilter};
pub use index_model::{create_indexes_command, IndexModel};
