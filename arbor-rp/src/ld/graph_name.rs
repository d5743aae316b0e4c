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

//! Server managed named graphs of a resource.

/// Named graph of a stored resource.
///
/// Each resource keeps its statements partitioned into server managed named
/// graphs. Only the graphs consumed by this crate family are modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum GraphName {
    /// Graph holding the resource's own access control statements.
    AccessControl,
    /// Graph holding the statements managed by the resource's owner.
    UserManaged,
}

impl GraphName {
    /// Return the short name of the named graph.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccessControl => "acl",
            Self::UserManaged => "user",
        }
    }
}
