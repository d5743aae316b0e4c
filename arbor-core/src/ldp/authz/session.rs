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

//! Requester security context.

use crate::ldp::authz::vocab;

/// Immutable security context of a single request.
///
/// Created by the authentication layer once per request and never mutated
/// afterwards.
#[derive(Clone, Debug)]
pub struct Session {
    agent: String,
    delegated_by: Option<String>,
}

impl Session {
    /// Return a new instance for an agent acting on its own behalf.
    pub fn new(agent: &str) -> Self {
        Self {
            agent: agent.to_owned(),
            delegated_by: None,
        }
    }

    /// Return a new instance for an agent acting on behalf of `delegated_by`.
    pub fn delegated(agent: &str, delegated_by: &str) -> Self {
        Self {
            agent: agent.to_owned(),
            delegated_by: Some(delegated_by.to_owned()),
        }
    }

    /// Return a new instance for an unauthenticated requester.
    pub fn anonymous() -> Self {
        Self::new(vocab::arbor::ANONYMOUS_AGENT)
    }

    /// Identifier of the acting agent.
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Identifier of the agent the request is made on behalf of.
    pub fn delegated_by(&self) -> Option<&str> {
        self.delegated_by.as_deref()
    }

    /// Identifier whose permissions decide the request.
    ///
    /// Delegation substitutes the identity instead of unioning privileges,
    /// so a delegated request is decided on `delegated_by` alone and the
    /// acting agent's own permissions are never consulted.
    pub fn effective_agent(&self) -> &str {
        self.delegated_by.as_deref().unwrap_or(&self.agent)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(delegated_by) = &self.delegated_by {
            write!(f, "{} (on behalf of {delegated_by})", self.agent)
        } else {
            write!(f, "{}", self.agent)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn effective_agent_without_delegation() {
        let session = Session::new("https://app.example/profile/alice#me");
        assert_eq!(
            session.effective_agent(),
            "https://app.example/profile/alice#me"
        );
        assert_eq!(session.delegated_by(), None);
    }

    #[test]
    fn delegation_substitutes_the_identity() {
        let session = Session::delegated(
            "https://app.example/profile/alice#me",
            "https://app.example/profile/bob#me",
        );
        assert_eq!(session.agent(), "https://app.example/profile/alice#me");
        assert_eq!(
            session.effective_agent(),
            "https://app.example/profile/bob#me"
        );
    }

    #[test]
    fn anonymous_session_uses_reserved_agent() {
        let session = Session::anonymous();
        assert_eq!(session.agent(), vocab::arbor::ANONYMOUS_AGENT);
        assert_eq!(session.effective_agent(), vocab::arbor::ANONYMOUS_AGENT);
    }
}
