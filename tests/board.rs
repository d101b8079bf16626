use ascii_leaderboard::board::{CRITERIA, Leaderboard, ScoringEvent};
use ascii_leaderboard::error::BoardError;
use proptest::prelude::*;

fn board(count: usize) -> Leaderboard {
    Leaderboard::new(count, |slot| format!("Team {slot}"))
}

#[test]
fn names_carry_their_slot() {
    let board = Leaderboard::new(3, |slot| ["Alfa", "Beta", "Gamma"][slot - 1].to_string());
    let names: Vec<&str> = board.competitors().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Alfa (1)", "Beta (2)", "Gamma (3)"]);
    assert!(board.competitors().iter().all(|c| c.scores() == &[0; CRITERIA]));
}

#[test]
fn stored_values_match_update_even_when_lower() {
    let mut board = board(5);
    board.update_scores(2, [30, 20, 10]).expect("valid slot");
    board.update_scores(2, [1, -4, 0]).expect("valid slot");
    assert_eq!(board.competitor(2).unwrap().scores(), &[1, -4, 0]);
    // Lowering never lowers the record.
    assert_eq!(board.records(), &[30, 20, 10]);
}

#[test]
fn invalid_slot_changes_nothing() {
    let mut board = board(5);
    board.update_scores(1, [3, 3, 3]).unwrap();
    for slot in [0, 6, 99] {
        assert_eq!(
            board.update_scores(slot, [50, 50, 50]),
            Err(BoardError::InvalidSlot { slot, count: 5 })
        );
    }
    assert_eq!(board.records(), &[3, 3, 3]);
    assert!(board.competitors()[1..].iter().all(|c| c.scores() == &[0; CRITERIA]));
}

#[test]
fn events_fire_only_for_strictly_higher_values() {
    let mut board = board(5);
    let events = board.update_scores(4, [5, 0, 7]).unwrap();
    assert_eq!(
        events,
        vec![
            ScoringEvent { criterion: 0, slot: 4, row: 3 },
            ScoringEvent { criterion: 2, slot: 4, row: 3 },
        ]
    );

    // Equal to the record: no event. Above: exactly one.
    let events = board.update_scores(1, [5, 1, 6]).unwrap();
    assert_eq!(events, vec![ScoringEvent { criterion: 1, slot: 1, row: 0 }]);
}

#[test]
fn repeating_a_record_value_fires_once() {
    let mut board = board(5);
    let first = board.update_scores(1, [10, 0, 0]).unwrap();
    let second = board.update_scores(1, [10, 0, 0]).unwrap();
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn all_zero_criterion_has_no_leader() {
    let board = board(5);
    assert!(board.compute_highlights().iter().all(|h| h.is_empty()));
}

#[test]
fn highlights_distinguish_sole_leader_and_tie() {
    let mut board = board(5);
    board.update_scores(1, [9, 4, 0]).unwrap();
    board.update_scores(3, [2, 4, 0]).unwrap();
    board.update_scores(5, [9, 1, 0]).unwrap();
    board.update_scores(2, [1, 2, 0]).unwrap();

    let [first, second, third] = board.compute_highlights();
    assert_eq!(first.slots().collect::<Vec<_>>(), [1, 5]);
    assert!(first.is_tie());
    assert_eq!(second.slots().collect::<Vec<_>>(), [1, 3]);
    assert!(third.is_empty());

    board.update_scores(5, [8, 1, 0]).unwrap();
    let [first, ..] = board.compute_highlights();
    assert_eq!(first.len(), 1);
    assert!(first.contains(1));
    assert!(!first.is_tie());
}

#[test]
fn highlights_follow_current_values_not_records() {
    let mut board = board(3);
    board.update_scores(1, [50, 0, 0]).unwrap();
    board.update_scores(2, [20, 0, 0]).unwrap();
    board.update_scores(1, [5, 0, 0]).unwrap();
    let [first, ..] = board.compute_highlights();
    assert_eq!(first.slots().collect::<Vec<_>>(), [2]);
    assert_eq!(board.records()[0], 50);
}

proptest! {
    #[test]
    fn records_are_running_maximum(
        updates in prop::collection::vec((1usize..=5, prop::array::uniform3(-20i64..100)), 1..40)
    ) {
        let mut board = board(5);
        let mut expected = [0i64; CRITERIA];

        for (slot, values) in updates {
            let before = *board.records();
            let events = board.update_scores(slot, values).unwrap();

            for criterion in 0..CRITERIA {
                let fired = events.iter().filter(|e| e.criterion == criterion).count();
                prop_assert_eq!(fired, usize::from(values[criterion] > before[criterion]));
                prop_assert!(board.records()[criterion] >= before[criterion]);
                expected[criterion] = expected[criterion].max(values[criterion]);
            }
            prop_assert_eq!(board.competitor(slot).unwrap().scores(), &values);
            prop_assert_eq!(board.records(), &expected);
        }
    }

    #[test]
    fn highlights_are_exactly_the_maximum_holders(
        updates in prop::collection::vec((1usize..=4, prop::array::uniform3(0i64..5)), 0..20)
    ) {
        let mut board = board(4);
        for (slot, values) in updates {
            board.update_scores(slot, values).unwrap();
        }
        let highlights = board.compute_highlights();
        for criterion in 0..CRITERIA {
            let best = board.competitors().iter().map(|c| c.scores()[criterion]).max().unwrap();
            let holders: Vec<usize> = board
                .competitors()
                .iter()
                .filter(|c| best != 0 && c.scores()[criterion] == best)
                .map(|c| c.slot())
                .collect();
            prop_assert_eq!(highlights[criterion].slots().collect::<Vec<_>>(), holders);
        }
    }
}
