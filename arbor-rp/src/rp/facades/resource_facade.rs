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

//! Resource retrieval and persistence operations.

use crate::ld::GraphName;
use crate::ld::Resource;
use crate::ld::ResourceServerError;
use crate::ld::Triple;
use std::sync::Arc;

/// Resource retrieval and persistence operations.
#[async_trait::async_trait]
pub trait ResourceFacade: Send + Sync {
    /// Return the resource with the `resource_id` or `None` when no such
    /// resource exists.
    ///
    /// Absence of a resource is a normal outcome and not an error.
    async fn resource_by_id(
        &self,
        resource_id: &str,
    ) -> Result<Option<Arc<dyn Resource>>, ResourceServerError>;

    /// Create or replace the resource with the `resource_id` from its named
    /// graphs.
    ///
    /// The stored resource carries its own access control graph when
    /// `graphs` contains a [GraphName::AccessControl] entry, even an empty
    /// one.
    async fn resource_persist(
        &self,
        resource_id: &str,
        graphs: Vec<(GraphName, Vec<Triple>)>,
    ) -> Result<(), ResourceServerError>;
}
