use crate::graph::{DepKind, NodeId, Region};
use crate::test::Nop;

fn region(n: usize) -> Region<Nop> {
    Region::new(vec![Nop; n])
}

#[test]
fn iteration_follows_program_order() {
    let r = region(4);
    let forward: Vec<_> = r.iter().map(|(id, _)| id.index()).collect();
    let backward: Vec<_> = r.iter_rev().map(|(id, _)| id.index()).collect();
    assert_eq!(forward, vec![0, 1, 2, 3]);
    assert_eq!(backward, vec![3, 2, 1, 0]);
}

#[test]
fn add_edge_records_both_directions() {
    let mut r = region(3);
    assert!(r.add_edge(NodeId(2), NodeId(0), DepKind::Artificial));

    let preds: Vec<_> = r.preds(NodeId(2)).collect();
    assert_eq!(preds, vec![(NodeId(0), DepKind::Artificial)]);

    let succs: Vec<_> = r.succs(NodeId(0)).collect();
    assert_eq!(succs, vec![(NodeId(2), DepKind::Artificial)]);

    assert_eq!(r.num_edges(), 1);
    assert_eq!(r.num_edges_of_kind(DepKind::Artificial), 1);
    assert_eq!(r.num_edges_of_kind(DepKind::Data), 0);
}

#[test]
fn duplicate_pair_is_rejected() {
    let mut r = region(3);
    assert!(r.add_edge(NodeId(2), NodeId(0), DepKind::Artificial));
    assert!(!r.add_edge(NodeId(2), NodeId(0), DepKind::Artificial));
    assert_eq!(r.num_edges(), 1);

    // Same pair under a different kind is a distinct edge.
    assert!(r.add_edge(NodeId(2), NodeId(0), DepKind::Data));
    assert_eq!(r.num_edges(), 2);
}

#[test]
fn self_edge_is_rejected() {
    let mut r = region(2);
    assert!(!r.add_edge(NodeId(1), NodeId(1), DepKind::Artificial));
    assert_eq!(r.num_edges(), 0);
}

#[test]
#[should_panic(expected = "would close a cycle")]
#[cfg(debug_assertions)]
fn cycle_is_caught_in_debug_builds() {
    let mut r = region(2);
    assert!(r.add_edge(NodeId(1), NodeId(0), DepKind::Data));
    r.add_edge(NodeId(0), NodeId(1), DepKind::Artificial);
}

#[test]
fn node_id_display_matches_dump_format() {
    assert_eq!(NodeId(7).to_string(), "SU(7)");
    assert_eq!(DepKind::Artificial.to_string(), "Artificial");
}

#[test]
fn sentinels_are_carried_but_not_addressable() {
    let r = Region::new(vec![Nop; 2]).with_entry(Nop).with_exit(Nop);
    assert!(r.entry_inst().is_some());
    assert!(r.exit_inst().is_some());
    assert_eq!(r.len(), 2);
}
