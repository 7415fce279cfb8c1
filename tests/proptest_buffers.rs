//! Property-based tests: every strategy against a cluster-vector model.
//!
//! The model segments each inserted string on its own. The generated pieces
//! include fragments that would fuse with a neighbour (lone combining marks,
//! `\r` then `\n`, lone regional indicators), so every strategy has to keep
//! inserted clusters separate the same way.

use grapheme_buffers::unicode::{grapheme_count, split_graphemes};
use grapheme_buffers::{BufferOptions, Strategy as StorageStrategy, TextBuffer};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

// ============================================================================
// Strategies
// ============================================================================

/// Generate a string from clusters and cluster fragments.
fn cluster_string(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", "z", " ", "é", "e\u{0301}", "\u{0301}", "中", "😀", "👍🏽", "👨‍👩‍👧",
            "\u{200D}", "❤️", "\r", "\n", "🇺", "🇸",
        ]),
        0..max,
    )
    .prop_map(|parts| parts.concat())
}

#[derive(Clone, Debug)]
enum Op {
    Insert { text: String, position: usize },
    Delete { start: usize, length: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (cluster_string(6), 0usize..40)
            .prop_map(|(text, position)| Op::Insert { text, position }),
        (0usize..40, 0usize..12).prop_map(|(start, length)| Op::Delete { start, length }),
    ]
}

/// Apply `op` to the model with the default clamping rules.
fn apply_model(model: &mut Vec<String>, op: &Op) {
    match op {
        Op::Insert { text, position } => {
            let index = (*position).clamp(1, model.len() + 1) - 1;
            model.splice(index..index, split_graphemes(text));
        }
        Op::Delete { start, length } => {
            if *length == 0 || model.is_empty() || *start > model.len() {
                return;
            }
            let first = (*start).max(1) - 1;
            let end = (first + length).min(model.len());
            model.drain(first..end);
        }
    }
}

fn apply_buffer(buffer: &mut dyn TextBuffer, op: &Op) {
    match op {
        Op::Insert { text, position } => buffer.insert(text, *position).unwrap(),
        Op::Delete { start, length } => buffer.delete(*start, *length).unwrap(),
    }
}

// ============================================================================
// Equivalence
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    /// All strategies match the model after every step.
    #[test]
    fn strategies_match_model(
        initial in cluster_string(24),
        initial_gap in 0usize..8,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let options = BufferOptions::default().with_initial_gap(initial_gap);
        let mut buffers: Vec<_> = StorageStrategy::ALL
            .iter()
            .map(|s| s.build(&initial, options))
            .collect();
        let mut model = split_graphemes(&initial);

        for op in &ops {
            apply_model(&mut model, op);
            let expected = model.concat();
            for buffer in &mut buffers {
                apply_buffer(buffer.as_mut(), op);
                prop_assert_eq!(buffer.text(), expected.clone(), "{} after {:?}", buffer.strategy(), op);
                prop_assert_eq!(buffer.len(), model.len());
            }
        }
    }

    /// Insert followed by deleting the same clusters restores the text.
    #[test]
    fn insert_then_delete_round_trips(
        initial in cluster_string(24),
        text in cluster_string(8),
        position in 1usize..30,
    ) {
        for strategy in StorageStrategy::ALL {
            let mut buf = strategy.build(&initial, BufferOptions::default());
            let position = position.min(buf.len() + 1);
            buf.insert(&text, position).unwrap();
            buf.delete(position, grapheme_count(&text)).unwrap();
            prop_assert_eq!(buf.text(), initial.clone(), "{}", strategy);
        }
    }

    /// Zero-length deletes and empty inserts change nothing.
    #[test]
    fn noop_edits_are_idempotent(initial in cluster_string(24), position in 0usize..30) {
        for strategy in StorageStrategy::ALL {
            let mut buf = strategy.build(&initial, BufferOptions::default());
            buf.delete(position, 0).unwrap();
            buf.insert("", position).unwrap();
            prop_assert_eq!(buf.text(), initial.clone(), "{}", strategy);
        }
    }

    /// Appending at len + 1 and deleting 1..=len behave as boundaries.
    #[test]
    fn boundaries(initial in cluster_string(24), tail in cluster_string(6)) {
        for strategy in StorageStrategy::ALL {
            let mut buf = strategy.build(&initial, BufferOptions::default());
            let len = buf.len();
            buf.insert(&tail, len + 1).unwrap();
            prop_assert_eq!(buf.text(), format!("{initial}{tail}"));
            let len = buf.len();
            buf.delete(1, len).unwrap();
            prop_assert!(buf.is_empty());
            prop_assert_eq!(buf.text(), "");
        }
    }
}
