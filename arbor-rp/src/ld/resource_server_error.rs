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

//! Resource server errors.

use std::error::Error;
use std::fmt;

/// Cause of error.
#[derive(Debug)]
pub enum ResourceServerErrorKind {
    /// Malformed identifier. E.g. resource or agent identifier.
    MalformedIdentifier,
    /// The storage backend failed to deliver an answer.
    BackendFailure,
    /// A containment walk did not terminate within its bound.
    ContainmentLoop,
}

impl ResourceServerErrorKind {
    /// Create a new instance with an error message.
    pub fn error_with_msg<S: AsRef<str>>(self, msg: S) -> ResourceServerError {
        ResourceServerError {
            kind: self,
            msg: Some(msg.as_ref().to_string()),
        }
    }

    /// Create a new instance without an error message.
    pub fn error(self) -> ResourceServerError {
        ResourceServerError {
            kind: self,
            msg: None,
        }
    }
}

impl fmt::Display for ResourceServerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/** Resource server error.

Create a new instance via [ResourceServerErrorKind].
*/
#[derive(Debug)]
pub struct ResourceServerError {
    kind: ResourceServerErrorKind,
    msg: Option<String>,
}

impl ResourceServerError {
    /// Return the type of error.
    pub fn kind(&self) -> &ResourceServerErrorKind {
        &self.kind
    }
}

impl fmt::Display for ResourceServerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(msg) = &self.msg {
            write!(f, "{} {}", self.kind, msg)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Error for ResourceServerError {}
