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

//! Linked data platform core.

pub mod authz {
    //! Authorization

    pub mod vocab;

    mod access_control;
    mod session;

    pub use self::access_control::AccessControl;
    pub use self::access_control::Authorization;
    pub use self::access_control::AuthorizedModes;
    pub use self::session::Session;
}

use self::authz::AccessControl;
use crate::conf::AppConfig;
use arbor_rp::ld::GraphName;
use arbor_rp::ld::ResourceServerError;
use arbor_rp::ld::Triple;
use arbor_rp::rp::ResourceProvider;
use arbor_rp::rp::facades::ResourceProviderFacades;
use arbor_rp_mem::InMemoryResourceProvider;
use std::sync::Arc;

/** Linked data resource server core.

Owns the configured resource provider and the access control decision engine
built on top of it. Outer surfaces such as the HTTP layer hold on to one
instance and route all resource access through it.
*/
pub struct ResourceServer {
    rp: Arc<ResourceProvider>,
    access_control: Arc<AccessControl>,
}

impl ResourceServer {
    /// Return a new instance.
    pub async fn new(app_config: &Arc<AppConfig>) -> Arc<Self> {
        // Setup persistence from config.
        let rp = match app_config.backend.implementation() {
            "mem" => {
                let inmem_provider = InMemoryResourceProvider::new().await;
                Arc::new(inmem_provider.as_resource_provider())
            }
            unknown_provider => panic!("Unknown resource provider type '{unknown_provider}'."),
        };
        let access_control = AccessControl::new(&rp, &app_config.authz).await;
        Arc::new(Self { rp, access_control })
    }

    /// Return the access control decision point.
    pub fn access_control(&self) -> &Arc<AccessControl> {
        &self.access_control
    }

    /// Create or replace a resource from its named graphs.
    ///
    /// Memoized decisions derived from the resource's previous access
    /// control graph are dropped, so the stored graph takes effect on the
    /// next decision.
    pub async fn resource_upsert(
        &self,
        resource_id: &str,
        graphs: Vec<(GraphName, Vec<Triple>)>,
    ) -> Result<(), ResourceServerError> {
        self.rp
            .resource_facade()
            .resource_persist(resource_id, graphs)
            .await?;
        self.access_control.invalidate_decisions(resource_id);
        Ok(())
    }
}
