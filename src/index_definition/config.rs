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


/// Rendering switches that depend on the server generation the documents
/// are sent to.
#[derive(Debug, Clone)]
pub struct Config {
    /// Render `dropDups` when the legacy drop-duplicates flag is set.
    /// Servers from 3.0 on ignore the option.
    pub legacy_drop_dups: bool,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {

    fn default() -> Self {
        Config {
            legacy_drop_dups: true,
        }
    }

}

pub struct ConfigBuilder {
    legacy_drop_dups: Option<bool>,
}

impl ConfigBuilder {
    pub fn legacy_drop_dups(mut self, legacy_drop_dups: bool) -> Self {
        self.legacy_drop_dups = Some(legacy_drop_dups);
        self
    }

    pub fn build(self) -> Config {
        let default = Config::default();
        Config {
            legacy_drop_dups: self.legacy_drop_dups.unwrap_or(default.legacy_drop_dups),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder { legacy_drop_dups: None }
    }
}
