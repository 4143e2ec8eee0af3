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


use bson::Document;

/// Anything that can be rendered into the two documents a driver needs to
/// create an index.
pub trait IndexDefinition {

    /// The key pattern, e.g. `{ "email": 1, "createdAt": -1 }`.
    fn index_keys(&self) -> Document;

    /// The creation options. Keys at their default value are left out.
    fn index_options(&self) -> Document;

}
