//! Scheduling DAG model for the Vega backend.
//!
//! This crate defines the region-level dependency graph that scheduling
//! passes operate on before list scheduling runs:
//!
//! - [`graph`] - `Region`: node arena, entry/exit sentinels, dependency edges
//! - [`inst`] - `InstInfo`: capability queries the host supplies per instruction
//!
//! The graph is an arena of nodes addressed by stable [`NodeId`] indices plus
//! adjacency lists of edges. Passes never create or destroy nodes; they only
//! read node data and append edges.

pub mod graph;
pub mod inst;


pub use graph::{DepKind, NodeId, Region, SchedNode};
pub use inst::InstInfo;
