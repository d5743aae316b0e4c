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

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod ld {
    //! Linked data value objects shared across the resource server.

    pub mod identifier;

    mod graph_name;
    mod resource;
    mod resource_server_error;
    mod term;
    mod triple;

    pub use self::graph_name::GraphName;
    pub use self::resource::Resource;
    pub use self::resource_server_error::ResourceServerError;
    pub use self::resource_server_error::ResourceServerErrorKind;
    pub use self::term::Term;
    pub use self::triple::Triple;
}
pub mod rp;
