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

//! Resource provider facades.

mod hierarchy_facade;
mod resource_facade;

pub use self::hierarchy_facade::*;
pub use self::resource_facade::*;

/// Provide access to resource provider facades.
pub trait ResourceProviderFacades: Send + Sync {
    /// See [HierarchyFacade].
    fn hierarchy_facade(&self) -> &dyn HierarchyFacade;

    /// See [ResourceFacade].
    fn resource_facade(&self) -> &dyn ResourceFacade;
}
