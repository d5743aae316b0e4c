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

//! Node of a parsed statement.

/// A single node of a parsed [Triple](crate::ld::Triple).
///
/// Serialization and parsing of RDF documents happen outside of this crate,
/// so terms arrive already split into their syntactic categories.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Term {
    /// A globally scoped resource identifier.
    Iri(String),
    /// A document scoped node without a global identifier.
    BlankNode(String),
    /// A literal value in its lexical form.
    Literal(String),
}

impl Term {
    /// Return the identifier when this term is an [Term::Iri].
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(label) => write!(f, "_:{label}"),
            Self::Literal(value) => write!(f, "\"{value}\""),
        }
    }
}
