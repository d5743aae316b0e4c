/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

//! Parsing of configuration for authorization decision handling.

use config::ConfigBuilder;
use config::builder::BuilderState;
use serde::Deserialize;
use serde::Serialize;

use super::AppConfigDefaults;

/// Configuration of authorization decision handling.
#[derive(Debug, Deserialize, Serialize)]
pub struct AuthzConfig {
    /// See [Self::cache_size()].
    cachesize: String,
    /// See [Self::cache_ttl_micros()].
    cachettl: String,
}

impl AppConfigDefaults for AuthzConfig {
    /// Provide defaults for this part of the configuration
    fn set_defaults<T: BuilderState>(
        config_builder: ConfigBuilder<T>,
        prefix: &str,
    ) -> ConfigBuilder<T> {
        config_builder
            .set_default(prefix.to_string() + "." + "cachesize", "1000")
            .unwrap()
            .set_default(prefix.to_string() + "." + "cachettl", "300000000")
            .unwrap()
    }
}

impl AuthzConfig {
    /// Target number of memoized authorization decisions.
    ///
    /// The actual number of entries can overshoot the target during high
    /// load, since eviction runs in the background.
    pub fn cache_size(&self) -> u64 {
        self.cachesize.parse::<u64>().unwrap_or(1000)
    }

    /// Time to live for memoized authorization decisions in microseconds.
    pub fn cache_ttl_micros(&self) -> u64 {
        self.cachettl.parse::<u64>().unwrap_or(300_000_000)
    }
}
