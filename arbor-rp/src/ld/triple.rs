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

//! Parsed statement from a named graph.

use super::Term;

/// One parsed statement from a named graph of a resource.
///
/// The predicate is always an IRI, so it is kept as a plain string. Subject
/// and object can be any [Term].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Triple {
    subject: Term,
    predicate: String,
    object: Term,
}

impl Triple {
    /// Return a new instance.
    pub fn new(subject: Term, predicate: &str, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.to_owned(),
            object,
        }
    }

    /// Return a new instance where both subject and object are IRIs.
    pub fn of_iris(subject: &str, predicate: &str, object: &str) -> Self {
        Self::new(
            Term::Iri(subject.to_owned()),
            predicate,
            Term::Iri(object.to_owned()),
        )
    }

    /// Return the subject node.
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// Return the predicate identifier.
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// Return the object node.
    pub fn object(&self) -> &Term {
        &self.object
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}
