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


use index_definition::{Direction, Index};

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An index over `keys`, all ascending, in the given order.
#[allow(dead_code)]
pub fn prepare_index(keys: &[&str]) -> Index {
    init_logger();

    let mut index = Index::new();
    for key in keys {
        index.on(*key, Direction::Ascending);
    }
    index
}
