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

//! Ephemeral in-memory implementation of [ResourceFacade].

use crate::InMemoryResourceProvider;
use crate::inmem_provider::inmem_resource::InMemResource;
use arbor_rp::ld::GraphName;
use arbor_rp::ld::Resource;
use arbor_rp::ld::ResourceServerError;
use arbor_rp::ld::ResourceServerErrorKind;
use arbor_rp::ld::Triple;
use arbor_rp::rp::facades::ResourceFacade;
use std::sync::Arc;

/// Ephemeral in-memory implementation of [ResourceFacade].
pub struct InMemResourceFacade {
    inmem_provider: Arc<InMemoryResourceProvider>,
}

impl InMemResourceFacade {
    /// Return a new instance.
    pub fn new(inmem_provider: &Arc<InMemoryResourceProvider>) -> Self {
        Self {
            inmem_provider: Arc::clone(inmem_provider),
        }
    }
}

#[async_trait::async_trait]
impl ResourceFacade for InMemResourceFacade {
    async fn resource_by_id(
        &self,
        resource_id: &str,
    ) -> Result<Option<Arc<dyn Resource>>, ResourceServerError> {
        Ok(self
            .inmem_provider
            .resources
            .get(resource_id)
            .map(|entry| Arc::clone(entry.value()) as Arc<dyn Resource>))
    }

    async fn resource_persist(
        &self,
        resource_id: &str,
        graphs: Vec<(GraphName, Vec<Triple>)>,
    ) -> Result<(), ResourceServerError> {
        if resource_id.is_empty() {
            return Err(ResourceServerErrorKind::MalformedIdentifier
                .error_with_msg("Empty resource identifier."));
        }
        self.inmem_provider.resources.insert(
            resource_id.to_owned(),
            Arc::new(InMemResource::new(resource_id, graphs)),
        );
        Ok(())
    }
}
