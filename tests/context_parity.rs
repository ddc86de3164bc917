//! Odd/even sweep of patch and search sizes against literal expected crops.
//!
//! The fixture lists, for each of the 16 combinations of patch
//! `{14,15}x{16,17}` and search `{24,25}x{26,27}`, the reference and target
//! crop corners, the target extents, and one hot-spot mapping.

use corrwin::{CorrelationContext, Extents, RowCol, Spot};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct Case {
    patch: [usize; 2],
    search: [usize; 2],
    reference_upper_left: [usize; 2],
    target_upper_left: [usize; 2],
    target_extents: [usize; 2],
    hot_local: [usize; 2],
    hot_spot: [usize; 2],
}

#[derive(Debug, Deserialize)]
struct Sweep {
    reference_center: [usize; 2],
    target_center: [usize; 2],
    cases: Vec<Case>,
}

fn load_sweep() -> Sweep {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("parity_sweep.json");
    let text = fs::read_to_string(&path).expect("read parity fixture");
    serde_json::from_str(&text).expect("parse parity fixture")
}

fn rc(pair: [usize; 2]) -> RowCol {
    RowCol::new(pair[0], pair[1])
}

fn ext(pair: [usize; 2]) -> Extents {
    Extents::new(pair[0], pair[1])
}

#[test]
fn parity_sweep_matches_fixture() {
    let sweep = load_sweep();
    assert_eq!(sweep.cases.len(), 16);

    for case in &sweep.cases {
        let label = format!("patch {:?} search {:?}", case.patch, case.search);
        let ctx = CorrelationContext::from_centers(
            rc(sweep.reference_center),
            rc(sweep.target_center),
            ext(case.patch),
            ext(case.search),
        );
        assert!(ctx.is_valid(), "{label}");

        let reference = ctx.reference_crop();
        assert_eq!(reference.upper_left(), Some(rc(case.reference_upper_left)), "{label}");
        assert_eq!(reference.extents(), Some(ext(case.patch)), "{label}");

        let target = ctx.target_crop();
        assert_eq!(target.upper_left(), Some(rc(case.target_upper_left)), "{label}");
        assert_eq!(target.extents(), Some(ext(case.target_extents)), "{label}");

        assert_eq!(
            ctx.hot_row_col_for_target_at(rc(case.hot_local)),
            Some(rc(case.hot_spot)),
            "{label}"
        );
        let local = rc(case.hot_local).to_spot();
        assert_eq!(
            ctx.hot_spot_for_target_at(local),
            Some(rc(case.hot_spot).to_spot()),
            "{label}"
        );
    }
}

#[test]
fn combined_extents_follow_overlap_formula() {
    let sweep = load_sweep();
    for case in &sweep.cases {
        let ctx = CorrelationContext::from_centers(
            rc(sweep.reference_center),
            rc(sweep.target_center),
            ext(case.patch),
            ext(case.search),
        );
        let combined = ctx.combined_extents().unwrap();
        assert_eq!(combined.high, case.patch[0] + case.search[0] - 1);
        assert_eq!(combined.wide, case.patch[1] + case.search[1] - 1);
    }
}

#[test]
fn odd_search_center_placement_is_zero_motion() {
    let reference_center = RowCol::new(60, 70);
    let target_center = RowCol::new(64, 66);
    for patch_high in [14, 15] {
        for patch_wide in [16, 17] {
            let search = Extents::new(25, 27);
            let ctx = CorrelationContext::from_centers(
                reference_center,
                target_center,
                Extents::new(patch_high, patch_wide),
                search,
            );
            let middle = RowCol::new((search.high - 1) / 2, (search.wide - 1) / 2);
            assert_eq!(ctx.hot_row_col_for_target_at(middle), Some(target_center));
        }
    }
}

#[test]
fn every_placement_stays_inside_target_crop() {
    let ctx = CorrelationContext::from_centers(
        RowCol::new(60, 70),
        RowCol::new(64, 66),
        Extents::new(15, 16),
        Extents::new(24, 27),
    );
    let target = ctx.target_crop();
    let patch = ctx.reference_crop().extents().unwrap();
    let last = RowCol::new(23, 26);
    let far_corner = target
        .full_row_col_for(RowCol::new(last.row + patch.high - 1, last.col + patch.wide - 1))
        .unwrap();
    assert!(target.contains(far_corner));
    assert_eq!(far_corner.row + 1, target.rows().end());
    assert_eq!(far_corner.col + 1, target.cols().end());

    let hot = ctx.hot_spot_for_target_at(Spot::new(0.5, 0.25)).unwrap();
    let origin = ctx.hot_spot_for_target_at(Spot::new(0.0, 0.0)).unwrap();
    assert_eq!(hot, Spot::new(origin.row + 0.5, origin.col + 0.25));
}
