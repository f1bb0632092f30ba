use vega_sdag::NodeId;

use crate::bucket::CategoryBuckets;
use crate::classify::InstCategory;
use crate::error::MutationError;
use crate::latency::LatencyModel;
use crate::test::helpers::{TestInst, loop_region};

#[test]
fn buckets_preserve_program_order() {
    let region = loop_region(vec![
        TestInst::DsRead,     // 0
        TestInst::BufferLoad, // 1
        TestInst::DsRead,     // 2
        TestInst::Mfma,       // 3
        TestInst::DsWrite,    // 4
        TestInst::Mfma,       // 5
    ]);
    let buckets = CategoryBuckets::build(&region, &LatencyModel::default()).unwrap();

    assert_eq!(buckets.bucket(InstCategory::SharedRead), &[NodeId(0), NodeId(2)]);
    assert_eq!(buckets.bucket(InstCategory::GlobalRead), &[NodeId(1)]);
    assert_eq!(buckets.bucket(InstCategory::ComputeAcc), &[NodeId(3), NodeId(5)]);
    assert_eq!(buckets.bucket(InstCategory::SharedWrite), &[NodeId(4)]);
    assert_eq!(buckets.count(InstCategory::Other), 0);
}

#[test]
fn per_node_latencies_follow_the_model() {
    let model = LatencyModel::default();
    let region = loop_region(vec![
        TestInst::DsRead,
        TestInst::BufferLoad,
        TestInst::Mfma,
        TestInst::InlineAsm("s_barrier"),
        TestInst::VMul,
        TestInst::ValuNop,
    ]);
    let buckets = CategoryBuckets::build(&region, &model).unwrap();

    assert_eq!(buckets.latency(NodeId(0)), 4);
    assert_eq!(buckets.latency(NodeId(1)), 30);
    assert_eq!(buckets.latency(NodeId(2)), 0);
    assert_eq!(buckets.latency(NodeId(3)), 55);
    assert_eq!(buckets.latency(NodeId(4)), 8);
    assert_eq!(buckets.latency(NodeId(5)), 4);
}

#[test]
fn global_write_is_fatal() {
    // Scenario B: the detector matched, but the body stores to global memory.
    let region = loop_region(vec![TestInst::DsRead, TestInst::Mfma, TestInst::BufferStore]);
    let err = CategoryBuckets::build(&region, &LatencyModel::default()).unwrap_err();
    assert_eq!(err, MutationError::GlobalWriteInHotLoop { node: NodeId(2) });
}

#[test]
fn latency_budget_overflow_is_fatal() {
    // Two global reads (60) against one MFMA (hide capacity 56).
    let region =
        loop_region(vec![TestInst::DsRead, TestInst::BufferLoad, TestInst::BufferLoad, TestInst::Mfma]);
    let err = CategoryBuckets::build(&region, &LatencyModel::default()).unwrap_err();
    assert_eq!(
        err,
        MutationError::LatencyBudgetExceeded { demand: 30 + 30 + 4, capacity: 56, compute_count: 1 }
    );
}

#[test]
fn latency_budget_exactly_full_passes() {
    // Fourteen shared reads at weight 4 exactly fill one MFMA's capacity.
    let mut body = vec![TestInst::DsRead; 14];
    body.push(TestInst::Mfma);
    let region = loop_region(body);
    assert!(CategoryBuckets::build(&region, &LatencyModel::default()).is_ok());
}

#[test]
fn barrier_and_scalar_weights_do_not_count_against_the_budget() {
    // A barrier (55) would blow the budget if it were counted.
    let region = loop_region(vec![
        TestInst::DsRead,
        TestInst::InlineAsm("s_barrier"),
        TestInst::VMul,
        TestInst::Mfma,
    ]);
    assert!(CategoryBuckets::build(&region, &LatencyModel::default()).is_ok());
}

#[test]
fn custom_model_shifts_the_budget() {
    let model = LatencyModel { hide_per_compute: 4, ..LatencyModel::default() };
    let region = loop_region(vec![TestInst::DsRead, TestInst::DsRead, TestInst::Mfma]);
    let err = CategoryBuckets::build(&region, &model).unwrap_err();
    assert_eq!(err, MutationError::LatencyBudgetExceeded { demand: 8, capacity: 4, compute_count: 1 });
}
