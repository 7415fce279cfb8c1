//! Harness report rendering and scenario isolation.

use grapheme_buffers::harness::{Report, SCENARIOS, Scenario, Step};
use grapheme_buffers::{BufferOptions, Strategy};

static MIXED: &[Step] = &[
    Step::Insert("s", 4),
    Step::Expect("dogs"),
    Step::Delete(1, -3),
    Step::Expect("cats"),
];

#[test]
fn report_snapshot() {
    let scenario = Scenario {
        name: "mixed",
        initial: "dog",
        steps: MIXED,
    };
    let report = Report::run(&[scenario], &[Strategy::Gap], BufferOptions::default());
    assert_eq!(report.failures(), 2);
    insta::assert_snapshot!(report.render(), @r"
    [gap] mixed
    Pass
    Delete { start: 1, length: -3 } failed: invalid argument: negative delete length -3
    Expected: cats
    Actual:   dogs
    All assertions complete
    ");
}

#[test]
fn builtin_scenarios_pass_in_any_order() {
    let forward = Report::run(SCENARIOS, &Strategy::ALL, BufferOptions::default());
    let reversed: Vec<Scenario> = SCENARIOS.iter().rev().copied().collect();
    let backward = Report::run(&reversed, &Strategy::ALL, BufferOptions::default());
    assert!(forward.passed(), "{}", forward.render());
    assert!(backward.passed(), "{}", backward.render());
}

#[test]
fn strict_mode_flags_clamping_scenario() {
    let report = Report::run(SCENARIOS, &[Strategy::Array], BufferOptions::strict());
    let failing: Vec<_> = report
        .results
        .iter()
        .filter(|r| r.assertions.iter().any(|a| !a.ok))
        .map(|r| r.scenario)
        .collect();
    assert_eq!(failing, vec!["clamped positions"]);
}
