//! Scripted scenarios with pass/fail reporting.
//!
//! Scenarios are listed statically in [`SCENARIOS`]. Each run builds a fresh
//! buffer from the scenario's initial text, so no scenario can observe
//! another's edits and the order they run in does not matter.

use crate::text::{BufferOptions, Edit, Strategy};
use std::fmt::Write as _;

/// Outcome of one assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assertion {
    pub ok: bool,
    pub error: Option<String>,
}

impl Assertion {
    /// A passing assertion.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// A failing assertion with a message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
        }
    }
}

/// Compare `actual` against `expected`.
#[must_use]
pub fn assert_equal(actual: &str, expected: &str) -> Assertion {
    if actual == expected {
        Assertion::pass()
    } else {
        Assertion::fail(format!("Expected: {expected}\nActual:   {actual}\n"))
    }
}

/// One step of a scenario script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Insert(&'static str, i64),
    Delete(i64, i64),
    /// Assert the current text.
    Expect(&'static str),
}

/// A named script run against a fresh buffer.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub initial: &'static str,
    pub steps: &'static [Step],
}

impl Scenario {
    /// Run the script against a new buffer of `strategy`.
    ///
    /// A failed edit becomes a failed assertion; the script carries on with
    /// the next step.
    #[must_use]
    pub fn run(&self, strategy: Strategy, options: BufferOptions) -> Vec<Assertion> {
        let mut buffer = strategy.build(self.initial, options);
        let mut assertions = Vec::new();

        for step in self.steps {
            let edit = match *step {
                Step::Insert(text, position) => Edit::insert(text, position),
                Step::Delete(start, length) => Edit::delete(start, length),
                Step::Expect(expected) => {
                    assertions.push(assert_equal(&buffer.text(), expected));
                    continue;
                }
            };
            if let Err(err) = edit.apply(buffer.as_mut()) {
                assertions.push(Assertion::fail(format!("{edit:?} failed: {err}\n")));
            }
        }

        assertions
    }
}

/// Opening sentence shared by the built-in scenarios.
pub const ORIGINAL_TEXT: &str = "The quick brown fox jumped over the lazy dog";

/// Built-in scenarios, in the order they are reported.
pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "quick brown fox",
        initial: ORIGINAL_TEXT,
        steps: &[
            Step::Insert(" speedy", 4),
            Step::Expect("The speedy quick brown fox jumped over the lazy dog"),
            Step::Delete(43, 5),
            Step::Expect("The speedy quick brown fox jumped over the dog"),
            Step::Insert("s", 47),
            Step::Expect("The speedy quick brown fox jumped over the dogs"),
            Step::Delete(1, 4),
            Step::Expect("speedy quick brown fox jumped over the dogs"),
            Step::Insert("A", 1),
            Step::Insert(" ", 2),
            Step::Expect("A speedy quick brown fox jumped over the dogs"),
            Step::Delete(42, 45),
            Step::Insert("wolf", 42),
            Step::Expect("A speedy quick brown fox jumped over the wolf"),
        ],
    },
    Scenario {
        name: "append and empty",
        initial: ORIGINAL_TEXT,
        steps: &[
            Step::Insert("!", 45),
            Step::Expect("The quick brown fox jumped over the lazy dog!"),
            Step::Delete(1, 45),
            Step::Expect(""),
            Step::Insert("fresh", 1),
            Step::Expect("fresh"),
        ],
    },
    Scenario {
        name: "no-op edits",
        initial: ORIGINAL_TEXT,
        steps: &[
            Step::Delete(10, 0),
            Step::Insert("", 10),
            Step::Expect(ORIGINAL_TEXT),
        ],
    },
    Scenario {
        name: "grapheme clusters",
        initial: "cafe\u{0301} 👨‍👩‍👧 🇯🇵",
        steps: &[
            Step::Delete(4, 1),
            Step::Expect("caf 👨‍👩‍👧 🇯🇵"),
            Step::Insert("é", 4),
            Step::Expect("café 👨‍👩‍👧 🇯🇵"),
            Step::Delete(6, 2),
            Step::Expect("café 🇯🇵"),
            Step::Insert("👍🏽", 7),
            Step::Expect("café 🇯🇵👍🏽"),
        ],
    },
    Scenario {
        name: "clamped positions",
        initial: "middle",
        steps: &[
            Step::Insert("<", 0),
            Step::Insert(">", 99),
            Step::Delete(100, 3),
            Step::Expect("<middle>"),
            Step::Delete(0, 1),
            Step::Expect("middle>"),
        ],
    },
];

/// Outcome of one scenario under one strategy.
#[derive(Clone, Debug)]
pub struct ScenarioResult {
    pub strategy: Strategy,
    pub scenario: &'static str,
    pub assertions: Vec<Assertion>,
}

/// Collected results of a harness run.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pub results: Vec<ScenarioResult>,
}

impl Report {
    /// Run every scenario in `scenarios` under each of `strategies`.
    #[must_use]
    pub fn run(scenarios: &[Scenario], strategies: &[Strategy], options: BufferOptions) -> Self {
        let results = strategies
            .iter()
            .flat_map(|&strategy| {
                scenarios.iter().map(move |scenario| ScenarioResult {
                    strategy,
                    scenario: scenario.name,
                    assertions: scenario.run(strategy, options),
                })
            })
            .collect();
        Self { results }
    }

    /// Whether every assertion passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.results
            .iter()
            .flat_map(|r| &r.assertions)
            .all(|a| a.ok)
    }

    /// Number of failed assertions.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.results
            .iter()
            .flat_map(|r| &r.assertions)
            .filter(|a| !a.ok)
            .count()
    }

    /// Render one line per assertion (`Pass` or the failure message) under
    /// a header per scenario, then the completion line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let _ = writeln!(out, "[{}] {}", result.strategy, result.scenario);
            for assertion in &result.assertions {
                match &assertion.error {
                    Some(message) if !assertion.ok => out.push_str(message),
                    _ => out.push_str("Pass\n"),
                }
            }
        }
        out.push_str("All assertions complete\n");
        out
    }
}
