//! The implication graph: a causal record of the current trail.
//!
//! # Overview
//!
//! Nodes are assignment events (an atom bound to a value at a level), and an
//! edge from node *s* to node *t* records that the clause labelling the edge
//! forced the assignment of *t* given (among others) the assignment of *s*.
//!
//! Two invariants are maintained in step with the trail:
//!
//! - Every non-decision node has at least one incoming edge explaining it.
//! - Every decision node has none.
//!
//! On a conflict, a distinguished [conflict node](ConflictNode) records the
//! clash, with edges from every assignment which jointly falsifies the
//! conflicting clause.
//!
//! The graph is a purpose-built adjacency structure scoped to assignment
//! events and antecedent edges.
//! Nodes are appended in trail order and levels along the node list are
//! nondecreasing, so [undo_to](ImplicationGraph::undo_to) is a pop of some
//! suffix of the list.
//!
//! # Export
//!
//! Everything observable is exposed through shared references:
//! [nodes](ImplicationGraph::nodes),
//! [edges_to](ImplicationGraph::edges_to), and
//! [conflict](ImplicationGraph::conflict).
//! No mutation capability is granted to external callers, and at every hook
//! invocation the view reflects the trail exactly.

use std::collections::HashMap;

use crate::{
    db::LevelIndex,
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{Clause, ClauseIndex},
        literal::Literal,
    },
    types::err::InvariantError,
};

/// An index into the nodes of the graph.
pub type NodeIndex = usize;

/// An assignment event: an atom bound to a value at a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphNode {
    /// The atom-value bind, represented as a literal.
    pub literal: Literal,

    /// The decision level of the bind.
    pub level: LevelIndex,

    /// The clause which forced the bind, absent for decisions.
    pub antecedent: Option<ClauseIndex>,
}

/// A causal link: the assignment at `source` helped force the assignment the
/// edge points to, through the clause `antecedent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    /// The node of a falsified literal of the antecedent.
    pub source: NodeIndex,

    /// The clause the edge is labelled with.
    pub antecedent: ClauseIndex,
}

/// The synthetic node recording a conflict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConflictNode {
    /// The clause which became empty.
    pub clause: ClauseIndex,

    /// The decision level the conflict surfaced at.
    pub level: LevelIndex,

    /// The nodes of the assignments which jointly falsify the clause.
    pub sources: Vec<NodeIndex>,
}

/// The implication graph of the current trail.
#[derive(Debug, Default)]
pub struct ImplicationGraph {
    /// Assignment events, in trail order.
    nodes: Vec<GraphNode>,

    /// Incoming edges, parallel to `nodes`.
    incoming: Vec<Vec<GraphEdge>>,

    /// The node of each atom currently on the trail.
    atom_nodes: HashMap<Atom, NodeIndex>,

    /// The conflict node, when the most recent propagation found a clash.
    conflict: Option<ConflictNode>,
}

impl ImplicationGraph {
    /// A fresh, empty graph.
    pub fn new() -> Self {
        ImplicationGraph::default()
    }

    /// An iterator over the nodes of the graph, in trail order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// The node at the given index.
    pub fn node(&self, index: NodeIndex) -> Option<&GraphNode> {
        self.nodes.get(index)
    }

    /// The incoming edges of the node at the given index.
    pub fn edges_to(&self, index: NodeIndex) -> &[GraphEdge] {
        match self.incoming.get(index) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// The node of the given atom, when the atom is on the trail.
    pub fn node_of(&self, atom: Atom) -> Option<NodeIndex> {
        self.atom_nodes.get(&atom).copied()
    }

    /// The conflict node, when the most recent propagation found a clash.
    pub fn conflict(&self) -> Option<&ConflictNode> {
        self.conflict.as_ref()
    }

    /// A count of (assignment event) nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Records a free decision as a node with no incoming edges.
    pub fn record_decision(&mut self, literal: Literal, level: LevelIndex) -> NodeIndex {
        log::trace!(target: targets::GRAPH, "+decision {literal} @ {level}");
        self.push_node(GraphNode {
            literal,
            level,
            antecedent: None,
        })
    }

    /// Records a forced assignment as a node with an incoming edge from each
    /// of the antecedent's other (falsified) literals' nodes.
    ///
    /// An antecedent literal without a node breaks the trail/graph invariant
    /// and is surfaced as an error.
    pub fn record_forced(
        &mut self,
        literal: Literal,
        level: LevelIndex,
        antecedent: ClauseIndex,
        clause: &Clause,
    ) -> Result<NodeIndex, InvariantError> {
        log::trace!(target: targets::GRAPH, "+forced {literal} @ {level} by clause {antecedent}");
        let node = self.push_node(GraphNode {
            literal,
            level,
            antecedent: Some(antecedent),
        });

        for other in clause.literals().filter(|other| **other != literal) {
            let source = match self.node_of(other.atom()) {
                Some(source) => source,
                None => return Err(InvariantError::UnrecordedAntecedent(other.atom())),
            };
            self.incoming[node].push(GraphEdge { source, antecedent });
        }

        Ok(node)
    }

    /// Records a conflict node with edges from every assignment which
    /// falsifies a literal of the clause.
    pub fn mark_conflict(
        &mut self,
        index: ClauseIndex,
        clause: &Clause,
        level: LevelIndex,
    ) -> Result<(), InvariantError> {
        log::trace!(target: targets::GRAPH, "+conflict with clause {index} @ {level}");
        let mut sources = Vec::with_capacity(clause.size());
        for literal in clause.literals() {
            match self.node_of(literal.atom()) {
                Some(source) => sources.push(source),
                None => return Err(InvariantError::UnrecordedAntecedent(literal.atom())),
            }
        }

        self.conflict = Some(ConflictNode {
            clause: index,
            level,
            sources,
        });
        Ok(())
    }

    /// Removes the conflict node and every node (with its edges) whose level
    /// exceeds the given level, keeping the graph consistent with the trail
    /// after a backtrack.
    pub fn undo_to(&mut self, level: LevelIndex) {
        self.conflict = None;

        while let Some(node) = self.nodes.last() {
            if node.level <= level {
                break;
            }
            self.atom_nodes.remove(&node.literal.atom());
            self.nodes.pop();
            self.incoming.pop();
        }
    }

    /// Removes every node and edge, leaving an empty graph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.incoming.clear();
        self.atom_nodes.clear();
        self.conflict = None;
    }

    fn push_node(&mut self, node: GraphNode) -> NodeIndex {
        let index = self.nodes.len();
        self.atom_nodes.insert(node.literal.atom(), index);
        self.nodes.push(node);
        self.incoming.push(Vec::new());
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::Clause;

    #[test]
    fn forced_nodes_are_explained() {
        let mut graph = ImplicationGraph::new();
        let p = Literal::new(0, true);
        let q = Literal::new(1, true);

        graph.record_decision(p.negate(), 1);

        // -p forces q through (p v q).
        let clause = Clause::new(vec![p, q]).unwrap();
        let node = graph.record_forced(q, 1, 0, &clause).unwrap();

        assert_eq!(graph.edges_to(node).len(), 1);
        assert_eq!(graph.edges_to(node)[0].antecedent, 0);
        assert_eq!(graph.node(node).unwrap().antecedent, Some(0));
    }

    #[test]
    fn undo_removes_levels_above_target() {
        let mut graph = ImplicationGraph::new();
        graph.record_decision(Literal::new(0, true), 1);
        graph.record_decision(Literal::new(1, true), 2);
        graph.record_decision(Literal::new(2, true), 3);

        graph.undo_to(1);

        assert_eq!(graph.node_count(), 1);
        assert!(graph.node_of(2).is_none());
        assert!(graph.nodes().all(|node| node.level <= 1));
    }

    #[test]
    fn missing_antecedent_source_is_an_invariant_error() {
        let mut graph = ImplicationGraph::new();
        let p = Literal::new(0, true);
        let q = Literal::new(1, true);

        // No node for p, so forcing q through (p v q) cannot be explained.
        let clause = Clause::new(vec![p, q]).unwrap();
        let result = graph.record_forced(q, 1, 0, &clause);
        assert_eq!(result, Err(InvariantError::UnrecordedAntecedent(0)));
    }
}
