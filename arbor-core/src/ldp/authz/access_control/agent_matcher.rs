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

//! Access control statement to requester matching.

use super::Authorization;
use crate::ldp::authz::vocab;
use arbor_rp::ld::GraphName;
use arbor_rp::ld::identifier;
use arbor_rp::rp::ResourceProvider;
use arbor_rp::rp::facades::ResourceProviderFacades;
use std::sync::Arc;

/// Matches access control statements against the requester's effective
/// agent.
pub struct AgentMatcher {
    rp: Arc<ResourceProvider>,
}

impl AgentMatcher {
    /// Return a new instance.
    pub fn new(rp: &Arc<ResourceProvider>) -> Self {
        Self { rp: Arc::clone(rp) }
    }

    /// Return `true` if the statement applies to the effective agent.
    pub async fn applies(&self, authorization: &Authorization, effective_agent: &str) -> bool {
        if authorization.agent_classes().contains(vocab::foaf::AGENT) {
            // Granted to every agent, including unauthenticated ones.
            return true;
        }
        if authorization.agents().contains(effective_agent) {
            return true;
        }
        if authorization
            .agent_classes()
            .contains(vocab::acl::AUTHENTICATED_AGENT)
            && effective_agent != vocab::arbor::ANONYMOUS_AGENT
        {
            return true;
        }
        for group_id in authorization.agent_groups() {
            if self.is_group_member(group_id, effective_agent).await {
                return true;
            }
        }
        false
    }

    /// Return `true` if the effective agent is listed as a member of the
    /// group resource.
    ///
    /// A missing or unreadable group resource counts as no membership, so
    /// matching continues with the remaining rules instead of failing the
    /// decision.
    async fn is_group_member(&self, group_id: &str, effective_agent: &str) -> bool {
        let group_resource_id = identifier::strip_trailing_slash(group_id);
        let resource = match self
            .rp
            .resource_facade()
            .resource_by_id(group_resource_id)
            .await
        {
            Ok(Some(resource)) => resource,
            Ok(None) => return false,
            Err(e) => {
                log::debug!("Membership lookup in group '{group_id}' failed: {e}");
                return false;
            }
        };
        match resource.triples_by_graph(&GraphName::UserManaged).await {
            Ok(triples) => triples.iter().any(|triple| {
                triple.predicate() == vocab::vcard::HAS_MEMBER
                    && triple
                        .object()
                        .as_iri()
                        .is_some_and(|member| member == effective_agent)
            }),
            Err(e) => {
                log::debug!("Membership lookup in group '{group_id}' failed: {e}");
                false
            }
        }
    }
}
