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

//! Parsed access control statement.

use crate::ldp::authz::vocab;
use arbor_rp::ld::Term;
use arbor_rp::ld::Triple;
use std::collections::BTreeSet;

/// One parsed access control statement.
///
/// Built from all statements of an access control graph that share a
/// subject. Only IRI objects are collected; literals and document scoped
/// nodes are skipped rather than failing the parse, so one malformed
/// statement can not take down the access check. A subject is honored on
/// the strength of its properties alone and never required to declare an
/// `rdf:type`.
#[derive(Debug)]
pub struct Authorization {
    subject: Term,
    agents: BTreeSet<String>,
    agent_classes: BTreeSet<String>,
    agent_groups: BTreeSet<String>,
    modes: BTreeSet<String>,
    access_to: BTreeSet<String>,
    defaults: BTreeSet<String>,
}

impl Authorization {
    /// Parse the statements with the `subject` out of `triples` into a new
    /// instance.
    pub fn from_triples(subject: &Term, triples: &[Triple]) -> Self {
        let mut authorization = Self {
            subject: subject.to_owned(),
            agents: BTreeSet::new(),
            agent_classes: BTreeSet::new(),
            agent_groups: BTreeSet::new(),
            modes: BTreeSet::new(),
            access_to: BTreeSet::new(),
            defaults: BTreeSet::new(),
        };
        for triple in triples {
            if triple.subject() != subject {
                continue;
            }
            let Some(object_iri) = triple.object().as_iri() else {
                continue;
            };
            match triple.predicate() {
                vocab::acl::AGENT => {
                    authorization.agents.insert(object_iri.to_owned());
                }
                vocab::acl::AGENT_CLASS => {
                    authorization.agent_classes.insert(object_iri.to_owned());
                }
                vocab::acl::AGENT_GROUP => {
                    authorization.agent_groups.insert(object_iri.to_owned());
                }
                vocab::acl::MODE => {
                    authorization.modes.insert(object_iri.to_owned());
                }
                vocab::acl::ACCESS_TO => {
                    authorization.access_to.insert(object_iri.to_owned());
                }
                vocab::acl::DEFAULT => {
                    authorization.defaults.insert(object_iri.to_owned());
                }
                _ => {}
            }
        }
        authorization
    }

    /// Parse every access control statement in an access control graph.
    ///
    /// Statements granting no mode are dropped, since they can never
    /// contribute to a decision.
    pub fn collect_from_graph(triples: &[Triple]) -> Vec<Self> {
        triples
            .iter()
            .map(Triple::subject)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|subject| Self::from_triples(subject, triples))
            .filter(|authorization| !authorization.modes.is_empty())
            .collect()
    }

    /// Subject node the statement was parsed from.
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// Agents granted access directly.
    pub fn agents(&self) -> &BTreeSet<String> {
        &self.agents
    }

    /// Classes of agents granted access.
    pub fn agent_classes(&self) -> &BTreeSet<String> {
        &self.agent_classes
    }

    /// Group resources whose members are granted access.
    pub fn agent_groups(&self) -> &BTreeSet<String> {
        &self.agent_groups
    }

    /// Granted access modes.
    pub fn modes(&self) -> &BTreeSet<String> {
        &self.modes
    }

    /// Resources the statement governs directly.
    pub fn access_to(&self) -> &BTreeSet<String> {
        &self.access_to
    }

    /// Containers whose descendants inherit the statement.
    pub fn defaults(&self) -> &BTreeSet<String> {
        &self.defaults
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    #[test]
    fn group_statements_by_subject() {
        let triples = vec![
            Triple::of_iris(
                "https://app.example/acl#owner",
                vocab::acl::AGENT,
                "https://app.example/profile/alice#me",
            ),
            Triple::of_iris(
                "https://app.example/acl#owner",
                vocab::acl::MODE,
                vocab::acl::WRITE,
            ),
            Triple::of_iris(
                "https://app.example/acl#public",
                vocab::acl::AGENT_CLASS,
                vocab::foaf::AGENT,
            ),
            Triple::of_iris(
                "https://app.example/acl#public",
                vocab::acl::MODE,
                vocab::acl::READ,
            ),
        ];
        let authorizations = Authorization::collect_from_graph(&triples);
        assert_eq!(authorizations.len(), 2);
        let owner = authorizations
            .iter()
            .find(|authorization| {
                authorization
                    .agents()
                    .contains("https://app.example/profile/alice#me")
            })
            .unwrap();
        assert!(owner.modes().contains(vocab::acl::WRITE));
        assert!(!owner.modes().contains(vocab::acl::READ));
        let public = authorizations
            .iter()
            .find(|authorization| authorization.agent_classes().contains(vocab::foaf::AGENT))
            .unwrap();
        assert!(public.modes().contains(vocab::acl::READ));
    }

    #[test]
    fn non_iri_objects_are_skipped() {
        let subject = Term::Iri("https://app.example/acl#a".to_string());
        let triples = vec![
            Triple::new(
                subject.to_owned(),
                vocab::acl::AGENT,
                Term::Literal("https://app.example/profile/alice#me".to_string()),
            ),
            Triple::new(
                subject.to_owned(),
                vocab::acl::MODE,
                Term::BlankNode("b0".to_string()),
            ),
            Triple::new(
                subject.to_owned(),
                vocab::acl::MODE,
                Term::Iri(vocab::acl::READ.to_string()),
            ),
        ];
        let authorization = Authorization::from_triples(&subject, &triples);
        assert!(authorization.agents().is_empty());
        assert_eq!(authorization.modes().len(), 1);
    }

    #[test]
    fn unrecognized_predicates_are_ignored() {
        let subject = Term::Iri("https://app.example/acl#a".to_string());
        let triples = vec![
            Triple::of_iris(
                "https://app.example/acl#a",
                RDF_TYPE,
                "https://app.example/ns#SomethingElse",
            ),
            Triple::of_iris(
                "https://app.example/acl#a",
                "https://app.example/ns#comment",
                "https://app.example/other",
            ),
            Triple::of_iris("https://app.example/acl#a", vocab::acl::MODE, vocab::acl::READ),
        ];
        let authorization = Authorization::from_triples(&subject, &triples);
        assert_eq!(authorization.modes().len(), 1);
        assert!(authorization.agents().is_empty());
        assert!(authorization.agent_classes().is_empty());
    }

    #[test]
    fn statements_without_modes_are_dropped() {
        let triples = vec![
            Triple::of_iris(
                "https://app.example/acl#modeless",
                vocab::acl::AGENT,
                "https://app.example/profile/alice#me",
            ),
            Triple::of_iris(
                "https://app.example/acl#granting",
                vocab::acl::AGENT,
                "https://app.example/profile/alice#me",
            ),
            Triple::of_iris(
                "https://app.example/acl#granting",
                vocab::acl::MODE,
                vocab::acl::APPEND,
            ),
        ];
        let authorizations = Authorization::collect_from_graph(&triples);
        assert_eq!(authorizations.len(), 1);
        assert_eq!(
            authorizations[0].subject(),
            &Term::Iri("https://app.example/acl#granting".to_string())
        );
    }

    #[test]
    fn blank_node_subjects_are_honored() {
        let subject = Term::BlankNode("auth0".to_string());
        let triples = vec![
            Triple::new(
                subject.to_owned(),
                vocab::acl::AGENT,
                Term::Iri("https://app.example/profile/alice#me".to_string()),
            ),
            Triple::new(
                subject.to_owned(),
                vocab::acl::MODE,
                Term::Iri(vocab::acl::READ.to_string()),
            ),
        ];
        let authorizations = Authorization::collect_from_graph(&triples);
        assert_eq!(authorizations.len(), 1);
        assert!(
            authorizations[0]
                .agents()
                .contains("https://app.example/profile/alice#me")
        );
    }
}
