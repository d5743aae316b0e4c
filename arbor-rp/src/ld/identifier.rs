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

//! Resource identifier handling.
//!
//! Resource identifiers are IRIs whose path segments mirror the containment
//! hierarchy. The helpers in this module only inspect the path part and
//! leave scheme and authority untouched, so both `https://host/a/b` and
//! opaque `app:data/a/b` style identifiers work.

/// Return the identifier with a single trailing path separator removed.
///
/// Identifiers are compared frequently and some clients mint them with a
/// trailing `/`. The comparison relevant form is the stripped one.
pub fn strip_trailing_slash(identifier: &str) -> &str {
    identifier.strip_suffix('/').unwrap_or(identifier)
}

/// Return the identifier of the container holding the identified resource
/// or `None` when the identifier is a hierarchy root.
pub fn container_of(identifier: &str) -> Option<String> {
    let trimmed = strip_trailing_slash(identifier);
    let base = base_len(trimmed);
    trimmed[base..]
        .rfind('/')
        .map(|index| trimmed[..base + index].to_owned())
}

/// Return the number of ancestors between the identified resource and its
/// hierarchy root.
///
/// An upper bound for any containment walk starting at the identifier.
pub fn path_depth(identifier: &str) -> usize {
    let trimmed = strip_trailing_slash(identifier);
    let base = base_len(trimmed);
    trimmed[base..].matches('/').count()
}

/// Return the length of the non-path prefix of the identifier.
///
/// Covers `scheme://authority` as well as opaque `scheme:` prefixes.
fn base_len(identifier: &str) -> usize {
    if let Some(scheme_end) = identifier.find(':') {
        let after_scheme = &identifier[scheme_end + 1..];
        if let Some(after_authority_start) = after_scheme.strip_prefix("//") {
            let authority_len = after_authority_start
                .find('/')
                .unwrap_or(after_authority_start.len());
            scheme_end + 3 + authority_len
        } else {
            scheme_end + 1
        }
    } else {
        0
    }
}
