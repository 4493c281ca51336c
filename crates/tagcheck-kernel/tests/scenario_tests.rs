//! End-to-end scenarios for the incorrect-tag rule, driven the way a host
//! drives it: eligibility gate first, then evaluation.

use rstest::rstest;
use tagcheck_kernel::{Checker, Feature, IncorrectTagRule, Rule, Tags};

/// Gate then evaluate, as a host would.
fn run(rule: &IncorrectTagRule, feature: &Feature) -> Option<String> {
    if !rule.is_eligible(feature) {
        return None;
    }
    rule.evaluate(feature).map(|flag| flag.instruction)
}

fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs.iter().copied().collect()
}

// ============================================================================
// Single-feature scenarios
// ============================================================================

#[rstest]
#[case::capitalised_highway(&[("highway", "Primary")], Some("Concerns tag 'highway=Primary'"))]
#[case::surface_exception(&[("surface", "concrete:plates")], None)]
#[case::semicolon_list(&[("access", "yes; no")], None)]
#[case::two_offenders(
    &[("shop", "Bakery"), ("barrier", "Wall Type")],
    Some("Concerns tags 'shop=Bakery', 'barrier=Wall Type'")
)]
#[case::two_offenders_reversed(
    &[("barrier", "Wall Type"), ("shop", "Bakery")],
    Some("Concerns tags 'barrier=Wall Type', 'shop=Bakery'")
)]
#[case::no_tags(&[], None)]
#[case::only_unchecked_keys(
    &[("name", "Bakery Bob's"), ("opening_hours", "Mo-Fr 08:00-18:00")],
    None
)]
#[case::mixed_valid_and_invalid(
    &[("highway", "residential"), ("surface", "Asphalt"), ("lanes", "2")],
    Some("Concerns tag 'surface=Asphalt'")
)]
fn scenario(#[case] pairs: &[(&str, &str)], #[case] expected: Option<&str>) {
    let rule = IncorrectTagRule::new();
    let feature = Feature::point(1).with_tags(tags(pairs));
    assert_eq!(run(&rule, &feature).as_deref(), expected);
}

// ============================================================================
// Logical-entity suppression
// ============================================================================

#[test]
fn two_segments_of_one_way_flag_once() {
    let rule = IncorrectTagRule::new();
    let first = Feature::segment(1, 77).tag("highway", "Bad Value");
    let second = Feature::segment(2, 77).tag("highway", "Bad Value");

    assert_eq!(
        run(&rule, &first).as_deref(),
        Some("Concerns tag 'highway=Bad Value'")
    );
    assert_eq!(run(&rule, &second), None);
}

#[test]
fn later_segment_is_suppressed_whatever_its_tags() {
    let rule = IncorrectTagRule::new();
    let first = Feature::segment(1, 77).tag("highway", "primary");
    let second = Feature::segment(2, 77)
        .tag("highway", "Primary")
        .tag("surface", "Dirt Track");

    assert_eq!(run(&rule, &first), None);
    assert_eq!(run(&rule, &second), None);
}

#[test]
fn evaluating_directly_also_suppresses() {
    // Skipping the gate must not produce a second flag for the same way.
    let rule = IncorrectTagRule::new();
    let first = Feature::segment(1, 77).tag("highway", "Bad Value");
    let second = Feature::segment(2, 77).tag("highway", "Bad Value");

    assert!(rule.evaluate(&first).is_some());
    assert!(rule.evaluate(&second).is_none());
}

#[test]
fn different_ways_are_independent() {
    let rule = IncorrectTagRule::new();
    let a = Feature::segment(1, 10).tag("highway", "Bad Value");
    let b = Feature::segment(2, 11).tag("highway", "Bad Value");

    assert!(run(&rule, &a).is_some());
    assert!(run(&rule, &b).is_some());
}

#[test]
fn repeated_points_are_each_flagged() {
    // Points are never recorded in the seen-set, so a repeated logical id is
    // checked every time.
    let rule = IncorrectTagRule::new();
    let point = Feature::point(5).tag("amenity", "Fuel Station");

    assert!(run(&rule, &point).is_some());
    assert!(run(&rule, &point).is_some());
}

#[test]
fn separate_rule_instances_do_not_share_state() {
    let feature = Feature::segment(1, 77).tag("highway", "Bad Value");

    let first_run = IncorrectTagRule::new();
    assert!(run(&first_run, &feature).is_some());

    let second_run = IncorrectTagRule::new();
    assert!(run(&second_run, &feature).is_some());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn identical_input_gives_identical_instruction() {
    let pairs = [
        ("waterway", "River Bank"),
        ("tourism", "Hotel"),
        ("natural", "wood"),
        ("leisure", "Park"),
    ];

    let instructions: Vec<_> = (0..5)
        .map(|_| {
            let rule = IncorrectTagRule::new();
            run(&rule, &Feature::point(1).with_tags(tags(&pairs)))
        })
        .collect();

    assert_eq!(
        instructions[0].as_deref(),
        Some("Concerns tags 'waterway=River Bank', 'tourism=Hotel', 'leisure=Park'")
    );
    assert!(instructions.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn checker_matches_direct_rule_use() {
    let checker = Checker::with_defaults().unwrap();
    let feature = Feature::point(1).tag("shop", "Bakery").tag("barrier", "Wall Type");
    let flags = checker.check(&feature);
    assert_eq!(flags.len(), 1);
    assert_eq!(
        flags[0].instruction,
        "Concerns tags 'shop=Bakery', 'barrier=Wall Type'"
    );
}
