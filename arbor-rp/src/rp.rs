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

//! Resource Provider abstraction

pub mod facades;

use self::facades::*;
use std::sync::Arc;

/// The Resource Provider.
///
/// Implementation logic is abstracted by [ResourceProviderFacades] for
/// related operations.
pub struct ResourceProvider {
    facades: Box<Arc<dyn ResourceProviderFacades>>,
}

impl ResourceProvider {
    /// Return a new instance.
    pub fn new(resource_provider_facades: Arc<dyn ResourceProviderFacades>) -> Self {
        Self {
            facades: Box::new(resource_provider_facades),
        }
    }
}

impl ResourceProviderFacades for ResourceProvider {
    fn hierarchy_facade(&self) -> &dyn HierarchyFacade {
        self.facades.hierarchy_facade()
    }

    fn resource_facade(&self) -> &dyn ResourceFacade {
        self.facades.resource_facade()
    }
}
