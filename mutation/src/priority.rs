//! Priority ranks for the interleavable memory categories.
//!
//! One reverse scan over the region's node order. The memory category whose
//! last occurrence sits nearest the loop end gets rank 0 (highest
//! precedence), the next distinct category rank 1, and so on. The scan order
//! is fixed by the region, never by hash iteration, so repeated invocations
//! over the same region produce the same assignment.

use smallvec::SmallVec;
use vega_sdag::{InstInfo, Region};

use crate::classify::{InstCategory, classify};

/// Rank assignment for {shared-write, shared-read, global-read}.
///
/// Categories with no members stay unassigned and are skipped by the
/// interleaver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityMap {
    /// Categories in rank order; index == priority.
    order: SmallVec<[InstCategory; 3]>,
}

impl PriorityMap {
    /// Number of assigned priorities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Rank of `category`, if any of its nodes occur in the region.
    pub fn rank(&self, category: InstCategory) -> Option<usize> {
        self.order.iter().position(|&c| c == category)
    }

    /// Categories in increasing rank order.
    pub fn in_rank_order(&self) -> impl Iterator<Item = InstCategory> + '_ {
        self.order.iter().copied()
    }
}

/// Scan `region` backwards once and rank the memory categories.
pub fn assign_priorities<I: InstInfo>(region: &Region<I>) -> PriorityMap {
    let mut map = PriorityMap::default();
    for (_, inst) in region.iter_rev() {
        let category = classify(inst);
        if category.is_interleavable_memory() && map.rank(category).is_none() {
            map.order.push(category);
            if map.order.len() == 3 {
                break;
            }
        }
    }
    map
}
