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

//! Containment hierarchy operations.

use crate::ld::ResourceServerError;

/// Containment hierarchy operations.
#[async_trait::async_trait]
pub trait HierarchyFacade: Send + Sync {
    /// Return the identifier of the container holding the identified
    /// resource or `None` when the identifier is a hierarchy root.
    ///
    /// Implementations answer from the identifier's path structure or from
    /// stored containment relations. Callers still bound their walks, since
    /// a backend with corrupted containment state must not be able to stall
    /// the server.
    async fn container_by_id(
        &self,
        resource_id: &str,
    ) -> Result<Option<String>, ResourceServerError>;
}
