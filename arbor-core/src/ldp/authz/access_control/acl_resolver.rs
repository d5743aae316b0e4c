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

//! Effective ACL resource resolution.

use arbor_rp::ld::Resource;
use arbor_rp::ld::ResourceServerError;
use arbor_rp::ld::ResourceServerErrorKind;
use arbor_rp::ld::identifier;
use arbor_rp::rp::ResourceProvider;
use arbor_rp::rp::facades::ResourceProviderFacades;
use std::sync::Arc;

/// Outcome of an effective ACL resolution.
///
/// `resource` is `None` when the walk ended at a hierarchy root without an
/// access control graph of its own. An empty statement set is used then.
pub struct EffectiveAcl {
    identifier: String,
    resource: Option<Arc<dyn Resource>>,
}

impl std::fmt::Debug for EffectiveAcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectiveAcl")
            .field("identifier", &self.identifier)
            .field("resource", &self.resource.is_some())
            .finish()
    }
}

impl EffectiveAcl {
    /// Identifier of the resource whose access control graph decides access.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The resolved resource, when one with an access control graph exists.
    pub fn resource(&self) -> Option<&Arc<dyn Resource>> {
        self.resource.as_ref()
    }
}

/// Locates the nearest resource in the containment chain that carries an
/// access control graph.
pub struct AclResolver {
    rp: Arc<ResourceProvider>,
}

impl AclResolver {
    /// Return a new instance.
    pub fn new(rp: &Arc<ResourceProvider>) -> Self {
        Self { rp: Arc::clone(rp) }
    }

    /// Walk from the target towards the hierarchy root until a resource
    /// with its own access control graph is found.
    ///
    /// Resources that do not exist yet are skipped, not errors. The walk is
    /// bounded by the depth of the identifier path, so corrupted containment
    /// state in the backend surfaces as an error instead of a stalled
    /// request.
    pub async fn find_effective_acl(
        &self,
        resource_id: &str,
    ) -> Result<EffectiveAcl, ResourceServerError> {
        let max_steps = identifier::path_depth(resource_id) + 1;
        let mut current_id = resource_id.to_owned();
        for _ in 0..max_steps {
            if let Some(resource) = self
                .rp
                .resource_facade()
                .resource_by_id(&current_id)
                .await?
            {
                if resource.has_acl() {
                    if log::log_enabled!(log::Level::Trace) {
                        log::trace!("Access to '{resource_id}' is decided by '{current_id}'.");
                    }
                    return Ok(EffectiveAcl {
                        identifier: current_id,
                        resource: Some(resource),
                    });
                }
            }
            match self
                .rp
                .hierarchy_facade()
                .container_by_id(&current_id)
                .await?
            {
                Some(container_id) => current_id = container_id,
                None => {
                    // Hierarchy root without an access control graph.
                    return Ok(EffectiveAcl {
                        identifier: current_id,
                        resource: None,
                    });
                }
            }
        }
        Err(ResourceServerErrorKind::ContainmentLoop.error_with_msg(format!(
            "Containment walk from '{resource_id}' did not reach a root within {max_steps} steps."
        )))
    }
}
