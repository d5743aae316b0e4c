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

//! Resource access control.

mod acl_resolver;
mod agent_matcher;
mod authorization;
mod decision_cache;

pub use self::acl_resolver::*;
pub use self::agent_matcher::*;
pub use self::authorization::*;
pub use self::decision_cache::*;
use super::Session;
use super::vocab;
use crate::conf::AuthzConfig;
use crate::util::LogScopeDuration;
use arbor_rp::ld::GraphName;
use arbor_rp::ld::ResourceServerError;
use arbor_rp::rp::ResourceProvider;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Granted access of a single decision.
#[derive(Debug)]
pub struct AuthorizedModes {
    effective_acl: String,
    modes: BTreeSet<String>,
}

impl AuthorizedModes {
    /// Identifier of the resource whose access control graph decided the
    /// access.
    pub fn effective_acl(&self) -> &str {
        &self.effective_acl
    }

    /// Granted access mode identifiers.
    pub fn modes(&self) -> &BTreeSet<String> {
        &self.modes
    }

    /// Return `true` if the access mode was granted.
    pub fn is_granted(&self, mode: &str) -> bool {
        self.modes.contains(mode)
    }
}

/// Access controller.
///
/// Computes the access modes a session is granted on a resource from the
/// access control graph of the resource's effective ACL resource.
pub struct AccessControl {
    cache: Arc<DecisionCache>,
    resolver: AclResolver,
    matcher: AgentMatcher,
}

impl AccessControl {
    /// Return a new instance.
    pub async fn new(rp: &Arc<ResourceProvider>, authz_config: &AuthzConfig) -> Arc<Self> {
        Arc::new(Self {
            cache: DecisionCache::new(
                authz_config.cache_size(),
                authz_config.cache_ttl_micros(),
            )
            .await,
            resolver: AclResolver::new(rp),
            matcher: AgentMatcher::new(rp),
        })
    }

    /// Compute the access modes the session is granted on the resource.
    ///
    /// Decisions are fail-closed: an error from the storage backend is
    /// returned as an error instead of an empty grant, so callers can tell
    /// a denied request from a failed one.
    pub async fn get_access_modes(
        &self,
        session: &Session,
        resource_id: &str,
    ) -> Result<AuthorizedModes, ResourceServerError> {
        let _log_scope_duration =
            LogScopeDuration::new(log::Level::Trace, module_path!(), "get_access_modes", 0);
        if session.agent() == vocab::arbor::ADMINISTRATOR_AGENT {
            // Administrators bypass resolution, caching and matching.
            return Ok(AuthorizedModes {
                effective_acl: resource_id.to_owned(),
                modes: vocab::acl::ALL_MODES
                    .iter()
                    .map(|mode| mode.to_string())
                    .collect(),
            });
        }
        let effective_acl = self.resolver.find_effective_acl(resource_id).await?;
        let authorizations = if let Some(resource) = effective_acl.resource() {
            let resource = Arc::clone(resource);
            self.cache
                .get_or_compute(effective_acl.identifier(), || async move {
                    let triples = resource.triples_by_graph(&GraphName::AccessControl).await?;
                    Ok(Authorization::collect_from_graph(&triples))
                })
                .await?
        } else {
            // Hierarchy root without an access control graph. Not cached,
            // so it stays distinguishable from a computed empty graph.
            Arc::new(Vec::new())
        };
        let inherited = effective_acl.identifier() != resource_id;
        let mut modes = BTreeSet::new();
        for authorization in authorizations.iter() {
            let applicable = authorization.access_to().contains(resource_id)
                || (inherited && authorization.defaults().contains(effective_acl.identifier()));
            if !applicable {
                continue;
            }
            if self
                .matcher
                .applies(authorization, session.effective_agent())
                .await
            {
                if log::log_enabled!(log::Level::Trace) {
                    log::trace!(
                        "Statement '{}' applies to session '{session}' on '{resource_id}'.",
                        authorization.subject()
                    );
                }
                modes.extend(authorization.modes().iter().cloned());
            }
        }
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Session '{session}' was granted {modes:?} on '{resource_id}' by the ACL of '{}'.",
                effective_acl.identifier()
            );
        }
        Ok(AuthorizedModes {
            effective_acl: effective_acl.identifier().to_owned(),
            modes,
        })
    }

    /// Drop memoized statements parsed from the resource's access control
    /// graph.
    pub fn invalidate_decisions(&self, resource_id: &str) {
        self.cache.invalidate(resource_id);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::conf::AppConfig;
    use arbor_rp::ld::Resource;
    use arbor_rp::ld::ResourceServerErrorKind;
    use arbor_rp::ld::Triple;
    use arbor_rp::rp::facades::HierarchyFacade;
    use arbor_rp::rp::facades::ResourceFacade;
    use arbor_rp::rp::facades::ResourceProviderFacades;
    use arbor_rp_mem::InMemoryResourceProvider;

    const ROOT: &str = "https://app.example";
    const PARENT: &str = "https://app.example/shared";
    const CHILD: &str = "https://app.example/shared/doc";
    const ALICE: &str = "https://app.example/profile/alice#me";
    const BOB: &str = "https://app.example/profile/bob#me";
    const CAROL: &str = "https://app.example/profile/carol#me";
    const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    pub fn initialize_env_logger() {
        env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init()
            .map_err(|e| {
                log::trace!("Env logger for testing was probably already initialized: {e:?}")
            })
            .ok();
    }

    async fn empty_provider() -> Arc<ResourceProvider> {
        let inmem_provider = InMemoryResourceProvider::new().await;
        Arc::new(inmem_provider.as_resource_provider())
    }

    async fn access_control_for(rp: &Arc<ResourceProvider>) -> Arc<AccessControl> {
        AccessControl::new(rp, &AppConfig::default().authz).await
    }

    async fn persist(rp: &Arc<ResourceProvider>, resource_id: &str, acl: Option<Vec<Triple>>) {
        let graphs = match acl {
            Some(triples) => vec![(GraphName::AccessControl, triples)],
            None => vec![(GraphName::UserManaged, Vec::new())],
        };
        rp.resource_facade()
            .resource_persist(resource_id, graphs)
            .await
            .unwrap();
    }

    /// Root and child carry ACL graphs, the parent in between does not.
    async fn shared_tree_provider() -> Arc<ResourceProvider> {
        let rp = empty_provider().await;
        persist(
            &rp,
            ROOT,
            Some(vec![
                Triple::of_iris("https://app.example/acl#owner", vocab::acl::AGENT, ALICE),
                Triple::of_iris(
                    "https://app.example/acl#owner",
                    vocab::acl::MODE,
                    vocab::acl::READ,
                ),
                Triple::of_iris(
                    "https://app.example/acl#owner",
                    vocab::acl::MODE,
                    vocab::acl::APPEND,
                ),
                Triple::of_iris("https://app.example/acl#owner", vocab::acl::ACCESS_TO, ROOT),
                Triple::of_iris("https://app.example/acl#owner", vocab::acl::DEFAULT, ROOT),
                Triple::of_iris("https://app.example/acl#ops", vocab::acl::AGENT, CAROL),
                Triple::of_iris(
                    "https://app.example/acl#ops",
                    vocab::acl::MODE,
                    vocab::acl::READ,
                ),
                Triple::of_iris(
                    "https://app.example/acl#ops",
                    vocab::acl::MODE,
                    vocab::acl::WRITE,
                ),
                Triple::of_iris("https://app.example/acl#ops", vocab::acl::ACCESS_TO, ROOT),
            ]),
        )
        .await;
        persist(&rp, PARENT, None).await;
        persist(
            &rp,
            CHILD,
            Some(vec![
                Triple::of_iris("https://app.example/acl#doc", vocab::acl::AGENT, ALICE),
                Triple::of_iris(
                    "https://app.example/acl#doc",
                    vocab::acl::MODE,
                    vocab::acl::READ,
                ),
                Triple::of_iris(
                    "https://app.example/acl#doc",
                    vocab::acl::MODE,
                    vocab::acl::WRITE,
                ),
                Triple::of_iris(
                    "https://app.example/acl#doc",
                    vocab::acl::MODE,
                    vocab::acl::CONTROL,
                ),
                Triple::of_iris("https://app.example/acl#doc", vocab::acl::ACCESS_TO, CHILD),
                Triple::of_iris(
                    "https://app.example/acl#anyone",
                    vocab::acl::AGENT_CLASS,
                    vocab::foaf::AGENT,
                ),
                Triple::of_iris(
                    "https://app.example/acl#anyone",
                    vocab::acl::MODE,
                    vocab::acl::READ,
                ),
                Triple::of_iris(
                    "https://app.example/acl#anyone",
                    vocab::acl::ACCESS_TO,
                    CHILD,
                ),
            ]),
        )
        .await;
        rp
    }

    #[tokio::test]
    async fn administrator_gets_every_mode() {
        initialize_env_logger();
        let access_control = access_control_for(&empty_provider().await).await;
        let session = Session::new(vocab::arbor::ADMINISTRATOR_AGENT);
        let modes = access_control
            .get_access_modes(&session, "https://app.example/anything")
            .await
            .unwrap();
        assert_eq!(modes.effective_acl(), "https://app.example/anything");
        for mode in vocab::acl::ALL_MODES {
            assert!(modes.is_granted(mode));
        }
    }

    #[tokio::test]
    async fn decisions_follow_the_containment_hierarchy() {
        initialize_env_logger();
        let access_control = access_control_for(&shared_tree_provider().await).await;
        // The child carries its own ACL graph.
        let child_modes = access_control
            .get_access_modes(&Session::new(ALICE), CHILD)
            .await
            .unwrap();
        assert_eq!(child_modes.effective_acl(), CHILD);
        assert!(child_modes.is_granted(vocab::acl::READ));
        assert!(child_modes.is_granted(vocab::acl::WRITE));
        assert!(child_modes.is_granted(vocab::acl::CONTROL));
        // The parent lacks one and inherits the root's `default` statement.
        let parent_modes = access_control
            .get_access_modes(&Session::new(ALICE), PARENT)
            .await
            .unwrap();
        assert_eq!(parent_modes.effective_acl(), ROOT);
        assert!(parent_modes.is_granted(vocab::acl::READ));
        assert!(parent_modes.is_granted(vocab::acl::APPEND));
        assert!(!parent_modes.is_granted(vocab::acl::WRITE));
        assert!(!parent_modes.is_granted(vocab::acl::CONTROL));
        // Statements without a `default` marking do not flow down.
        let parent_ops_modes = access_control
            .get_access_modes(&Session::new(CAROL), PARENT)
            .await
            .unwrap();
        assert!(parent_ops_modes.modes().is_empty());
        // Directly on the root both statements are in force.
        let root_owner_modes = access_control
            .get_access_modes(&Session::new(ALICE), ROOT)
            .await
            .unwrap();
        assert!(root_owner_modes.is_granted(vocab::acl::APPEND));
        assert!(!root_owner_modes.is_granted(vocab::acl::WRITE));
        let root_ops_modes = access_control
            .get_access_modes(&Session::new(CAROL), ROOT)
            .await
            .unwrap();
        assert!(root_ops_modes.is_granted(vocab::acl::WRITE));
        assert!(!root_ops_modes.is_granted(vocab::acl::APPEND));
    }

    #[tokio::test]
    async fn public_class_statement_covers_anonymous_requests() {
        initialize_env_logger();
        let access_control = access_control_for(&shared_tree_provider().await).await;
        let modes = access_control
            .get_access_modes(&Session::anonymous(), CHILD)
            .await
            .unwrap();
        assert!(modes.is_granted(vocab::acl::READ));
        assert!(!modes.is_granted(vocab::acl::WRITE));
    }

    #[tokio::test]
    async fn delegation_substitutes_the_effective_identity() {
        initialize_env_logger();
        let rp = empty_provider().await;
        let private = "https://app.example/private";
        persist(
            &rp,
            private,
            Some(vec![
                Triple::of_iris("https://app.example/acl#p", vocab::acl::AGENT, ALICE),
                Triple::of_iris(
                    "https://app.example/acl#p",
                    vocab::acl::MODE,
                    vocab::acl::CONTROL,
                ),
                Triple::of_iris("https://app.example/acl#p", vocab::acl::ACCESS_TO, private),
            ]),
        )
        .await;
        let access_control = access_control_for(&rp).await;
        let delegated_modes = access_control
            .get_access_modes(&Session::delegated(BOB, ALICE), private)
            .await
            .unwrap();
        let direct_modes = access_control
            .get_access_modes(&Session::new(ALICE), private)
            .await
            .unwrap();
        assert_eq!(delegated_modes.modes(), direct_modes.modes());
        assert!(delegated_modes.is_granted(vocab::acl::CONTROL));
        // The acting agent's own permissions are never unioned in.
        let reverse_modes = access_control
            .get_access_modes(&Session::delegated(ALICE, BOB), private)
            .await
            .unwrap();
        assert!(reverse_modes.modes().is_empty());
    }

    #[tokio::test]
    async fn statements_with_unrelated_type_are_honored() {
        initialize_env_logger();
        let rp = empty_provider().await;
        let resource_id = "https://app.example/notes";
        persist(
            &rp,
            resource_id,
            Some(vec![
                Triple::of_iris(
                    "https://app.example/acl#n",
                    RDF_TYPE,
                    "https://app.example/ns#Bookmark",
                ),
                Triple::of_iris("https://app.example/acl#n", vocab::acl::AGENT, ALICE),
                Triple::of_iris(
                    "https://app.example/acl#n",
                    vocab::acl::MODE,
                    vocab::acl::READ,
                ),
                Triple::of_iris(
                    "https://app.example/acl#n",
                    vocab::acl::ACCESS_TO,
                    resource_id,
                ),
            ]),
        )
        .await;
        let access_control = access_control_for(&rp).await;
        let modes = access_control
            .get_access_modes(&Session::new(ALICE), resource_id)
            .await
            .unwrap();
        assert!(modes.is_granted(vocab::acl::READ));
    }

    #[tokio::test]
    async fn ancestor_statement_can_name_the_target_directly() {
        initialize_env_logger();
        let rp = empty_provider().await;
        let leaf = "https://app.example/inbox/item";
        persist(
            &rp,
            ROOT,
            Some(vec![
                Triple::of_iris("https://app.example/acl#drop", vocab::acl::AGENT, BOB),
                Triple::of_iris(
                    "https://app.example/acl#drop",
                    vocab::acl::MODE,
                    vocab::acl::APPEND,
                ),
                Triple::of_iris("https://app.example/acl#drop", vocab::acl::ACCESS_TO, leaf),
            ]),
        )
        .await;
        let access_control = access_control_for(&rp).await;
        let modes = access_control
            .get_access_modes(&Session::new(BOB), leaf)
            .await
            .unwrap();
        assert_eq!(modes.effective_acl(), ROOT);
        assert!(modes.is_granted(vocab::acl::APPEND));
    }

    #[tokio::test]
    async fn root_without_acl_grants_nothing() {
        initialize_env_logger();
        let access_control = access_control_for(&empty_provider().await).await;
        let modes = access_control
            .get_access_modes(&Session::new(ALICE), "https://app.example/x")
            .await
            .unwrap();
        assert_eq!(modes.effective_acl(), ROOT);
        assert!(modes.modes().is_empty());
    }

    struct FailingResourceFacade {}

    #[async_trait::async_trait]
    impl ResourceFacade for FailingResourceFacade {
        async fn resource_by_id(
            &self,
            _resource_id: &str,
        ) -> Result<Option<Arc<dyn Resource>>, ResourceServerError> {
            Err(ResourceServerErrorKind::BackendFailure.error_with_msg("storage offline"))
        }

        async fn resource_persist(
            &self,
            _resource_id: &str,
            _graphs: Vec<(GraphName, Vec<Triple>)>,
        ) -> Result<(), ResourceServerError> {
            Err(ResourceServerErrorKind::BackendFailure.error_with_msg("storage offline"))
        }
    }

    struct RootOnlyHierarchyFacade {}

    #[async_trait::async_trait]
    impl HierarchyFacade for RootOnlyHierarchyFacade {
        async fn container_by_id(
            &self,
            _resource_id: &str,
        ) -> Result<Option<String>, ResourceServerError> {
            Ok(None)
        }
    }

    struct FailingProviderFacades {
        resource_facade: FailingResourceFacade,
        hierarchy_facade: RootOnlyHierarchyFacade,
    }

    impl ResourceProviderFacades for FailingProviderFacades {
        fn hierarchy_facade(&self) -> &dyn HierarchyFacade {
            &self.hierarchy_facade
        }

        fn resource_facade(&self) -> &dyn ResourceFacade {
            &self.resource_facade
        }
    }

    #[tokio::test]
    async fn backend_failures_fail_the_decision() {
        initialize_env_logger();
        let rp = Arc::new(ResourceProvider::new(Arc::new(FailingProviderFacades {
            resource_facade: FailingResourceFacade {},
            hierarchy_facade: RootOnlyHierarchyFacade {},
        })));
        let access_control = access_control_for(&rp).await;
        let result = access_control
            .get_access_modes(&Session::new(ALICE), CHILD)
            .await;
        assert!(matches!(
            result.unwrap_err().kind(),
            ResourceServerErrorKind::BackendFailure
        ));
    }
}
