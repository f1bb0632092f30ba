use vega_sdag::Region;

use crate::detect::is_gemm_hot_loop;
use crate::test::helpers::{TestInst, loop_region, open_region};

#[test]
fn matches_the_hot_loop_shape() {
    let region = loop_region(vec![TestInst::DsRead, TestInst::Mfma]);
    assert!(is_gemm_hot_loop(&region));
}

#[test]
fn first_node_must_be_a_shared_read() {
    // Scenario C: loop opens with a scalar multiply instead.
    let region = loop_region(vec![TestInst::VMul, TestInst::DsRead, TestInst::Mfma]);
    assert!(!is_gemm_hot_loop(&region));
}

#[test]
fn shared_write_does_not_count_as_the_opening_read() {
    let region = loop_region(vec![TestInst::DsWrite, TestInst::Mfma]);
    assert!(!is_gemm_hot_loop(&region));
}

#[test]
fn exit_sentinel_must_carry_the_backedge_branch() {
    let region = open_region(vec![TestInst::DsRead, TestInst::Mfma]);
    assert!(!is_gemm_hot_loop(&region));

    let region = Region::new(vec![TestInst::DsRead, TestInst::Mfma]).with_exit(TestInst::ValuNop);
    assert!(!is_gemm_hot_loop(&region));
}

#[test]
fn empty_region_never_matches() {
    let region = loop_region(vec![]);
    assert!(!is_gemm_hot_loop(&region));
}
