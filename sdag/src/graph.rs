//! Region dependency graph.
//!
//! One [`Region`] covers a contiguous scheduling scope (a loop body). The
//! host scheduler builds it once per region, runs its mutation passes over
//! it, and then list-schedules using the accumulated edges. Nodes live in
//! an arena and are addressed by [`NodeId`]; edges are adjacency lists of
//! `(predecessor, kind)` pairs. Passes only ever append edges.

use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

/// Stable identity of one ordinary node inside a region.
///
/// Ordinal position in the region's original program order. Sentinels are
/// not addressable; they carry no edges from mutation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SU({})", self.0)
    }
}

/// Kind tag on a dependency edge.
///
/// Mutation passes may only add [`DepKind::Artificial`] edges: advisory
/// ordering constraints with no data or aliasing meaning, used purely to
/// bias the list scheduler's choice among legal orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepKind {
    /// True data dependency (register or memory value flow).
    Data,
    /// Ordering dependency from the host's alias/barrier analysis.
    Order,
    /// Advisory scheduling constraint added by a mutation pass.
    Artificial,
}

impl fmt::Display for DepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepKind::Data => write!(f, "Data"),
            DepKind::Order => write!(f, "Ord"),
            DepKind::Artificial => write!(f, "Artificial"),
        }
    }
}

/// One directed edge stored on a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    node: NodeId,
    kind: DepKind,
}

/// A graph vertex wrapping one instruction occurrence.
#[derive(Debug)]
pub struct SchedNode<I> {
    inst: I,
}

impl<I> SchedNode<I> {
    pub fn inst(&self) -> &I {
        &self.inst
    }
}

/// One scheduling region: node arena, sentinels, and dependency edges.
///
/// The arena owns the ordinary nodes in original program order. The entry
/// and exit sentinels optionally carry an instruction (the exit sentinel of
/// a loop body carries its backedge branch) but take no edges here.
#[derive(Debug)]
pub struct Region<I> {
    nodes: Vec<SchedNode<I>>,
    preds: Vec<SmallVec<[Edge; 4]>>,
    succs: Vec<SmallVec<[Edge; 4]>>,
    entry: Option<I>,
    exit: Option<I>,
}

impl<I> Region<I> {
    /// Build a region over `insts` in program order, without sentinel
    /// instructions.
    pub fn new(insts: Vec<I>) -> Self {
        let n = insts.len();
        Self {
            nodes: insts.into_iter().map(|inst| SchedNode { inst }).collect(),
            preds: vec![SmallVec::new(); n],
            succs: vec![SmallVec::new(); n],
            entry: None,
            exit: None,
        }
    }

    /// Attach the instruction carried by the entry sentinel.
    pub fn with_entry(mut self, inst: I) -> Self {
        self.entry = Some(inst);
        self
    }

    /// Attach the instruction carried by the exit sentinel.
    pub fn with_exit(mut self, inst: I) -> Self {
        self.exit = Some(inst);
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &SchedNode<I> {
        &self.nodes[id.0]
    }

    pub fn inst(&self, id: NodeId) -> &I {
        &self.nodes[id.0].inst
    }

    pub fn entry_inst(&self) -> Option<&I> {
        self.entry.as_ref()
    }

    pub fn exit_inst(&self) -> Option<&I> {
        self.exit.as_ref()
    }

    /// First ordinary node in program order.
    pub fn first(&self) -> Option<(NodeId, &I)> {
        self.nodes.first().map(|n| (NodeId(0), &n.inst))
    }

    /// Iterate ordinary nodes in original program order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &I)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), &n.inst))
    }

    /// Iterate ordinary nodes in reverse program order.
    pub fn iter_rev(&self) -> impl Iterator<Item = (NodeId, &I)> {
        self.nodes.iter().enumerate().rev().map(|(i, n)| (NodeId(i), &n.inst))
    }

    /// Predecessors of `id`: nodes it must be scheduled after.
    pub fn preds(&self, id: NodeId) -> impl Iterator<Item = (NodeId, DepKind)> + '_ {
        self.preds[id.0].iter().map(|e| (e.node, e.kind))
    }

    /// Successors of `id`: nodes that must be scheduled after it.
    pub fn succs(&self, id: NodeId) -> impl Iterator<Item = (NodeId, DepKind)> + '_ {
        self.succs[id.0].iter().map(|e| (e.node, e.kind))
    }

    /// Total number of edges in the region.
    pub fn num_edges(&self) -> usize {
        self.preds.iter().map(|p| p.len()).sum()
    }

    /// Number of edges of the given kind.
    pub fn num_edges_of_kind(&self, kind: DepKind) -> usize {
        self.preds.iter().flat_map(|p| p.iter()).filter(|e| e.kind == kind).count()
    }

    /// Add the edge `dependent` must-follow `must_follow`, tagged `kind`.
    ///
    /// Returns `false` without mutating for a self-edge or when the same
    /// `(must_follow, kind)` pair is already a predecessor of `dependent`.
    /// Edges are additive only; nothing removes or rewrites them.
    ///
    /// The host scheduler's invariant is that the graph stays acyclic.
    /// Callers are responsible for direction; debug builds verify it.
    pub fn add_edge(&mut self, dependent: NodeId, must_follow: NodeId, kind: DepKind) -> bool {
        if dependent == must_follow {
            return false;
        }
        let edge = Edge { node: must_follow, kind };
        if self.preds[dependent.0].contains(&edge) {
            return false;
        }
        debug_assert!(
            !self.depends_on(must_follow, dependent),
            "edge {must_follow} -> {dependent} would close a cycle"
        );
        self.preds[dependent.0].push(edge);
        self.succs[must_follow.0].push(Edge { node: dependent, kind });
        true
    }

    /// Whether `node` transitively depends on (must follow) `on`.
    fn depends_on(&self, node: NodeId, on: NodeId) -> bool {
        let mut stack = vec![node];
        let mut seen = vec![false; self.nodes.len()];
        while let Some(cur) = stack.pop() {
            if cur == on {
                return true;
            }
            if std::mem::replace(&mut seen[cur.0], true) {
                continue;
            }
            stack.extend(self.preds[cur.0].iter().map(|e| e.node));
        }
        false
    }

    /// Trace-dump the region: sentinels, every node, and its predecessor
    /// edges.
    pub fn dump(&self, label: impl Fn(&I) -> String) {
        trace!(nodes = self.nodes.len(), edges = self.num_edges(), "region dump");
        if let Some(entry) = &self.entry {
            trace!("EntrySU: {}", label(entry));
        }
        for (id, inst) in self.iter() {
            trace!("{id}: {}", label(inst));
            for (pred, kind) in self.preds(id) {
                trace!("  must follow {pred} [{kind}]");
            }
        }
        if let Some(exit) = &self.exit {
            trace!("ExitSU: {}", label(exit));
        }
    }
}
