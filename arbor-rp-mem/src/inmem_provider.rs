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

//! Ephemeral in-memory implementation of [ResourceProvider].

mod inmem_facades;
mod inmem_resource;

use self::inmem_facades::InMemProviderFacades;
use self::inmem_resource::InMemResource;
use arbor_rp::rp::ResourceProvider;
use crossbeam_skiplist::SkipMap;
use std::sync::Arc;

/// Ephemeral in-memory implementation of [ResourceProvider].
pub struct InMemoryResourceProvider {
    resources: SkipMap<String, Arc<InMemResource>>,
}

impl InMemoryResourceProvider {
    /// Return a new instance.
    pub async fn new() -> Arc<Self> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Using in-mem resource provider.");
        }
        Arc::new(Self {
            resources: SkipMap::default(),
        })
    }

    /// Get [ResourceProvider] instance.
    pub fn as_resource_provider(self: &Arc<Self>) -> ResourceProvider {
        ResourceProvider::new(Arc::new(InMemProviderFacades::new(self)))
    }
}
