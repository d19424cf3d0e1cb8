//! Property-based tests for reducer dispatch and draft reconciliation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use redraft::builder::ReducerBuilder;
use redraft::core::{Action, Reducer};
use std::sync::Arc;

#[derive(Clone, PartialEq, Debug)]
struct TestState {
    count: i64,
    label: String,
    tags: Arc<Vec<String>>,
}

fn test_state(count: i64, label: String) -> Arc<TestState> {
    Arc::new(TestState {
        count,
        label,
        tags: Arc::new(vec!["shared".to_string()]),
    })
}

#[derive(Clone, Debug)]
enum TestAction {
    Increment,
    Add(i64),
    Rename(String),
    Reset,
    Unregistered,
    Anonymous,
}

impl Action for TestAction {
    fn kind(&self) -> Option<&str> {
        match self {
            Self::Increment => Some("Increment"),
            Self::Add(_) => Some("Add"),
            Self::Rename(_) => Some("Rename"),
            Self::Reset => Some("Reset"),
            Self::Unregistered => Some("Unregistered"),
            Self::Anonymous => None,
        }
    }
}

fn test_reducer() -> Reducer<TestState, TestAction> {
    ReducerBuilder::new()
        .initial(TestState {
            count: 0,
            label: "initial".to_string(),
            tags: Arc::new(Vec::new()),
        })
        .mutate("Increment", |draft, _| draft.count += 1)
        .mutate("Add", |draft, action| {
            if let TestAction::Add(n) = action {
                draft.count = draft.count.wrapping_add(*n);
            }
        })
        .mutate("Rename", |draft, action| {
            if let TestAction::Rename(label) = action {
                draft.label = label.clone();
            }
        })
        .replace("Reset", |prev, _| TestState {
            count: 0,
            label: "initial".to_string(),
            tags: Arc::clone(&prev.tags),
        })
        .build()
        .unwrap()
}

prop_compose! {
    fn arbitrary_action()(variant in 0..6u8, n in any::<i64>(), label in "[a-z]{0,8}") -> TestAction {
        match variant {
            0 => TestAction::Increment,
            1 => TestAction::Add(n),
            2 => TestAction::Rename(label),
            3 => TestAction::Reset,
            4 => TestAction::Unregistered,
            _ => TestAction::Anonymous,
        }
    }
}

prop_compose! {
    // count bounded so the `+ 1` in increment_adds_one cannot overflow
    fn arbitrary_state()(count in -1_000_000i64..1_000_000, label in "[a-z]{0,8}") -> Arc<TestState> {
        test_state(count, label)
    }
}

proptest! {
    #[test]
    fn unhandled_kinds_are_identity(state in arbitrary_state()) {
        let reducer = test_reducer();

        for action in [TestAction::Unregistered, TestAction::Anonymous] {
            let next = reducer.reduce(Some(Arc::clone(&state)), &action);
            prop_assert!(Arc::ptr_eq(&next, &state));
        }
    }

    #[test]
    fn absent_state_selects_initial(action in arbitrary_action()) {
        let reducer = test_reducer();
        let next = reducer.reduce(None, &action);

        match action {
            TestAction::Increment => prop_assert_eq!(next.count, 1),
            TestAction::Add(n) => prop_assert_eq!(next.count, n),
            TestAction::Reset => prop_assert_eq!(next.count, 0),
            TestAction::Rename(label) => {
                prop_assert_eq!(&next.label, &label);
                prop_assert_eq!(next.count, 0);
            }
            _ => prop_assert_eq!(&*next, &**reducer.initial_state()),
        }
    }

    #[test]
    fn previous_state_is_never_mutated(state in arbitrary_state(), action in arbitrary_action()) {
        let reducer = test_reducer();
        let snapshot = (*state).clone();

        let _ = reducer.reduce(Some(Arc::clone(&state)), &action);

        prop_assert_eq!(&*state, &snapshot);
    }

    #[test]
    fn reduce_is_deterministic(state in arbitrary_state(), action in arbitrary_action()) {
        let reducer = test_reducer();

        let a = reducer.reduce(Some(Arc::clone(&state)), &action);
        let b = reducer.reduce(Some(Arc::clone(&state)), &action);

        prop_assert_eq!(&*a, &*b);
    }

    #[test]
    fn increment_adds_one(state in arbitrary_state()) {
        let reducer = test_reducer();
        let next = reducer.reduce(Some(Arc::clone(&state)), &TestAction::Increment);

        prop_assert_eq!(next.count, state.count + 1);
        prop_assert_eq!(&next.label, &state.label);
    }

    #[test]
    fn untouched_siblings_stay_shared(state in arbitrary_state(), label in "[a-z]{1,8}") {
        let reducer = test_reducer();
        let next = reducer.reduce(Some(Arc::clone(&state)), &TestAction::Rename(label.clone()));

        prop_assert_eq!(&next.label, &label);
        prop_assert_eq!(next.count, state.count);
        prop_assert!(Arc::ptr_eq(&next.tags, &state.tags));
    }

    #[test]
    fn reset_replaces_wholesale(state in arbitrary_state()) {
        let reducer = test_reducer();
        let next = reducer.reduce(Some(Arc::clone(&state)), &TestAction::Reset);

        prop_assert_eq!(next.count, 0);
        prop_assert_eq!(&next.label, "initial");
    }

    #[test]
    fn return_wins_over_mutation(start in any::<i64>(), winner in any::<i64>()) {
        let reducer: Reducer<i64, &str> = ReducerBuilder::new()
            .initial(0i64)
            .on("Both", move |draft, _| {
                **draft = draft.wrapping_add(1);
                Some(winner)
            })
            .build()
            .unwrap();

        let next = reducer.reduce(Some(Arc::new(start)), &"Both");
        prop_assert_eq!(*next, winner);
    }

    #[test]
    fn action_sequences_fold_purely(
        actions in prop::collection::vec(arbitrary_action(), 1..20)
    ) {
        let reducer = test_reducer();

        // Keep every intermediate snapshot alive, then replay and check
        // none of them was disturbed by later transitions.
        let mut snapshots = vec![reducer.reduce(None, &TestAction::Unregistered)];
        for action in &actions {
            let prev = Arc::clone(snapshots.last().expect("seeded above"));
            snapshots.push(reducer.reduce(Some(prev), action));
        }

        let mut replayed = vec![Arc::clone(&snapshots[0])];
        for action in &actions {
            let prev = Arc::clone(replayed.last().expect("seeded above"));
            replayed.push(reducer.reduce(Some(prev), action));
        }

        for (kept, again) in snapshots.iter().zip(&replayed) {
            prop_assert_eq!(&**kept, &**again);
        }
    }
}
