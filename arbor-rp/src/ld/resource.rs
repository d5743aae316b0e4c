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

//! Read-only view of a stored resource.

use super::GraphName;
use super::ResourceServerError;
use super::Triple;

/// Read-only view of a stored resource.
///
/// Implementations are point-in-time snapshots handed out by a resource
/// provider. Consumers never mutate resource state through this interface.
#[async_trait::async_trait]
pub trait Resource: Send + Sync {
    /// Return the resource's identifier.
    fn identifier(&self) -> &str;

    /// Return `true` if the resource carries its own access control graph.
    ///
    /// An existing but empty [GraphName::AccessControl] graph still counts
    /// as carrying one.
    fn has_acl(&self) -> bool;

    /// Return the statements of one of the resource's named graphs.
    ///
    /// A missing graph yields an empty list.
    async fn triples_by_graph(
        &self,
        graph_name: &GraphName,
    ) -> Result<Vec<Triple>, ResourceServerError>;
}
