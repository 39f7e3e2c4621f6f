//! The immutable catalog and identifier-based lookup.
//!
//! `Catalog::new` walks every path, section, unit, and node once (path order
//! → section order → unit order → node order) and records each node's
//! position in an index keyed by node identifier. Because node identifiers
//! are unique system-wide, the equivalent exhaustive scan would find the
//! same single match; the index only removes the repeated walk per lookup.
//! All reads take `&self`, so a process-wide `Arc<Catalog>` can serve
//! concurrent requests without synchronization.

use std::collections::HashMap;
use std::collections::HashSet;

use lingua_core::error::DomainError;

use crate::model::{LearningPath, Node, QuizQuestion};

/// Position of a node within the hierarchy: indices into
/// paths / sections / units / nodes, in that order.
type NodePosition = (usize, usize, usize, usize);

/// The full curriculum catalog, immutable after construction.
#[derive(Debug)]
pub struct Catalog {
    paths: Vec<LearningPath>,
    node_index: HashMap<String, NodePosition>,
}

/// A node together with the identifiers of its owners, for breadcrumb
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLocation<'a> {
    /// Owning path identifier.
    pub path_id: &'a str,
    /// Owning section identifier.
    pub section_id: &'a str,
    /// Owning unit identifier.
    pub unit_id: &'a str,
    /// The node itself.
    pub node: &'a Node,
}

impl Catalog {
    /// Builds a catalog from an ordered path sequence, indexing every node.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a path or node identifier is
    /// duplicated anywhere in the hierarchy; uniqueness is a catalog
    /// invariant and is enforced here rather than assumed.
    pub fn new(paths: Vec<LearningPath>) -> Result<Self, DomainError> {
        let mut path_ids = HashSet::new();
        let mut node_index = HashMap::new();

        for (pi, path) in paths.iter().enumerate() {
            if !path_ids.insert(path.id.as_str()) {
                return Err(DomainError::Validation(format!(
                    "duplicate path id: {}",
                    path.id
                )));
            }
            for (si, section) in path.sections.iter().enumerate() {
                for (ui, unit) in section.units.iter().enumerate() {
                    for (ni, node) in unit.nodes.iter().enumerate() {
                        if node_index
                            .insert(node.id.clone(), (pi, si, ui, ni))
                            .is_some()
                        {
                            return Err(DomainError::Validation(format!(
                                "duplicate node id: {}",
                                node.id
                            )));
                        }
                    }
                }
            }
        }

        Ok(Self { paths, node_index })
    }

    /// The full ordered path sequence.
    #[must_use]
    pub fn paths(&self) -> &[LearningPath] {
        &self.paths
    }

    /// Total number of nodes across the catalog.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    /// Looks up a path by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PathNotFound` when no path matches.
    pub fn find_path(&self, path_id: &str) -> Result<&LearningPath, DomainError> {
        self.paths
            .iter()
            .find(|p| p.id == path_id)
            .ok_or_else(|| DomainError::PathNotFound(path_id.to_owned()))
    }

    /// Looks up a node by identifier, anywhere in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NodeNotFound` when no node matches. Callers
    /// must treat that as a client error, not a system fault.
    pub fn find_node(&self, node_id: &str) -> Result<&Node, DomainError> {
        self.locate_node(node_id).map(|loc| loc.node)
    }

    /// Looks up a node and the identifiers of its owning path, section, and
    /// unit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NodeNotFound` when no node matches.
    pub fn locate_node(&self, node_id: &str) -> Result<NodeLocation<'_>, DomainError> {
        let &(pi, si, ui, ni) = self
            .node_index
            .get(node_id)
            .ok_or_else(|| DomainError::NodeNotFound(node_id.to_owned()))?;

        let path = &self.paths[pi];
        let section = &path.sections[si];
        let unit = &section.units[ui];
        Ok(NodeLocation {
            path_id: &path.id,
            section_id: &section.id,
            unit_id: &unit.id,
            node: &unit.nodes[ni],
        })
    }

    /// Returns a node's ordered question sequence; empty when the node
    /// carries none.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NodeNotFound` when the identifier does not
    /// resolve, so callers can distinguish "no questions" from "no such
    /// node".
    pub fn questions(&self, node_id: &str) -> Result<&[QuizQuestion], DomainError> {
        self.find_node(node_id).map(|n| n.questions.as_slice())
    }
}
