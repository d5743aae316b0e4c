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

//! Ephemeral in-memory implementation of [Resource].

use arbor_rp::ld::GraphName;
use arbor_rp::ld::Resource;
use arbor_rp::ld::ResourceServerError;
use arbor_rp::ld::Triple;
use crossbeam_skiplist::SkipMap;

/// Ephemeral in-memory implementation of [Resource].
///
/// Snapshots are immutable once built. Writes to the provider replace the
/// stored snapshot wholesale, so handed out instances stay consistent.
pub struct InMemResource {
    identifier: String,
    graphs: SkipMap<String, Vec<Triple>>,
}

impl InMemResource {
    /// Return a new instance from the resource's named graphs.
    pub fn new(identifier: &str, graphs: Vec<(GraphName, Vec<Triple>)>) -> Self {
        let graphs_by_name = SkipMap::new();
        for (graph_name, triples) in graphs {
            graphs_by_name.insert(graph_name.name().to_owned(), triples);
        }
        Self {
            identifier: identifier.to_owned(),
            graphs: graphs_by_name,
        }
    }
}

#[async_trait::async_trait]
impl Resource for InMemResource {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn has_acl(&self) -> bool {
        self.graphs
            .contains_key(GraphName::AccessControl.name())
    }

    async fn triples_by_graph(
        &self,
        graph_name: &GraphName,
    ) -> Result<Vec<Triple>, ResourceServerError> {
        Ok(self
            .graphs
            .get(graph_name.name())
            .map(|entry| entry.value().to_owned())
            .unwrap_or_default())
    }
}
