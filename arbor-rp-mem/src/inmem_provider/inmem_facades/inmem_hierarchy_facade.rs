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

//! Ephemeral in-memory implementation of [HierarchyFacade].

use arbor_rp::ld::ResourceServerError;
use arbor_rp::ld::identifier;
use arbor_rp::rp::facades::HierarchyFacade;

/// Ephemeral in-memory implementation of [HierarchyFacade].
///
/// Containment in this provider follows the identifier's path structure
/// directly instead of stored containment relations.
#[derive(Default)]
pub struct InMemHierarchyFacade {}

#[async_trait::async_trait]
impl HierarchyFacade for InMemHierarchyFacade {
    async fn container_by_id(
        &self,
        resource_id: &str,
    ) -> Result<Option<String>, ResourceServerError> {
        Ok(identifier::container_of(resource_id))
    }
}
