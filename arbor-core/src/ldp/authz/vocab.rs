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

//! Well-known identifiers consumed by access decisions.

pub mod acl {
    //! Web Access Control vocabulary subset.
    //!
    //! <http://www.w3.org/ns/auth/acl#>

    /// Read access mode.
    pub const READ: &str = "http://www.w3.org/ns/auth/acl#Read";
    /// Write access mode.
    pub const WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
    /// Append access mode.
    pub const APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
    /// Control access mode.
    pub const CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";

    /// Every grantable access mode.
    pub const ALL_MODES: [&str; 4] = [READ, WRITE, APPEND, CONTROL];

    /// Predicate granting access to a named agent.
    pub const AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
    /// Predicate granting access to a class of agents.
    pub const AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";
    /// Predicate granting access to the members of a group resource.
    pub const AGENT_GROUP: &str = "http://www.w3.org/ns/auth/acl#agentGroup";
    /// Predicate stating a granted access mode.
    pub const MODE: &str = "http://www.w3.org/ns/auth/acl#mode";
    /// Predicate naming the resources a statement governs directly.
    pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";
    /// Predicate naming the containers whose descendants inherit a statement.
    pub const DEFAULT: &str = "http://www.w3.org/ns/auth/acl#default";

    /// Class of all authenticated agents.
    pub const AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";
}

pub mod foaf {
    //! FOAF vocabulary subset.
    //!
    //! <http://xmlns.com/foaf/0.1/>

    /// Class of all agents, authenticated or not.
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
}

pub mod vcard {
    //! vCard vocabulary subset.
    //!
    //! <http://www.w3.org/2006/vcard/ns#>

    /// Group membership predicate.
    pub const HAS_MEMBER: &str = "http://www.w3.org/2006/vcard/ns#hasMember";
}

pub mod arbor {
    //! Server specific agent identifiers.

    /// Agent with unconditional full access to every resource.
    pub const ADMINISTRATOR_AGENT: &str =
        "https://mydriatech.github.io/arbor/ns#AdministratorAgent";
    /// Agent assigned to unauthenticated requests.
    pub const ANONYMOUS_AGENT: &str = "https://mydriatech.github.io/arbor/ns#AnonymousAgent";
}
