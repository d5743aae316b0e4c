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

//! Ephemeral in-memory specific resource provider code.

mod inmem_hierarchy_facade;
mod inmem_resource_facade;

pub use self::inmem_hierarchy_facade::*;
pub use self::inmem_resource_facade::*;
use super::InMemoryResourceProvider;
use arbor_rp::rp::facades::*;
use std::sync::Arc;

/// Ephemeral in-memory specific resource provider code.
pub struct InMemProviderFacades {
    hierarchy_facade: InMemHierarchyFacade,
    resource_facade: InMemResourceFacade,
}

impl InMemProviderFacades {
    /// Return a new instance.
    pub fn new(inmem_provider: &Arc<InMemoryResourceProvider>) -> Self {
        Self {
            hierarchy_facade: InMemHierarchyFacade::default(),
            resource_facade: InMemResourceFacade::new(inmem_provider),
        }
    }
}

impl ResourceProviderFacades for InMemProviderFacades {
    fn hierarchy_facade(&self) -> &dyn HierarchyFacade {
        &self.hierarchy_facade
    }

    fn resource_facade(&self) -> &dyn ResourceFacade {
        &self.resource_facade
    }
}
