// End-to-end tests for the evaluation state machine.
//
// Each test drives a real `GameState` through whole windows at the default
// cadence (marker advance every 2 ticks), exactly as the headless runner
// does: per tick, a finite list of input events, then the state transition.
//
// Column liveness at the default cadence: the marker lands on column `c`
// during tick `2c + 3` and moves off during tick `2c + 5`; since inputs are
// applied before the marker moves, column `c` accepts input on ticks
// `2c + 4` and `2c + 5`.

use clavier_core::{
    CriteriaMask, GameConfig, GameEvent, GamePhase, GameState, InputEvent, PromptSource,
    ResultAccumulator,
};
use clavier_data::{Note, Scale};

/// Finite in-memory source with a configurable criteria mask.
struct ListSource {
    pairs: Vec<(Note, Scale)>,
    criteria: CriteriaMask,
}

impl PromptSource for ListSource {
    fn next_pair(&mut self) -> Option<(Note, Scale)> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(self.pairs.remove(0))
        }
    }

    fn criteria(&self) -> CriteriaMask {
        self.criteria
    }
}

/// First tick (1-based) on which `column` accepts input at the default
/// cadence.
fn first_live_tick(column: usize) -> u64 {
    2 * column as u64 + 4
}

fn key(note: Note, scale: Scale) -> InputEvent {
    InputEvent::Key { note, scale }
}

/// Run the game to completion, injecting `presses` (tick, event) pairs.
/// Returns the accumulated results and all emitted events.
fn run(
    game: &mut GameState<ListSource>,
    presses: &[(u64, InputEvent)],
) -> (ResultAccumulator, Vec<GameEvent>) {
    let mut results = ResultAccumulator::new();
    let mut events = Vec::new();
    let mut tick = 0u64;
    loop {
        tick += 1;
        let inputs: Vec<InputEvent> = presses
            .iter()
            .filter(|(t, _)| *t == tick)
            .map(|(_, e)| *e)
            .collect();
        let out = game.tick(&inputs, &mut results);
        events.extend(out.events);
        if out.done {
            break;
        }
        assert!(tick < 1_000, "game failed to terminate");
    }
    (results, events)
}

#[test]
fn scored_window_with_skip_and_mismatch() {
    // The canonical scenario: C/D/E/F prompts, criteria NOTE|TIME.
    // Press C on column 0 (hit), skip column 1, press E on column 2 (hit),
    // press D against expected F on column 3 (miss: NOTE absent).
    let source = ListSource {
        pairs: vec![
            (Note::C, Scale::Major),
            (Note::D, Scale::Major),
            (Note::E, Scale::Minor),
            (Note::F, Scale::Minor),
        ],
        criteria: CriteriaMask::NOTE | CriteriaMask::TIME,
    };
    let mut game = GameState::new(source, GameConfig::default());

    let presses = [
        (first_live_tick(0), key(Note::C, Scale::Major)),
        (first_live_tick(2), key(Note::E, Scale::Minor)),
        (first_live_tick(3), key(Note::D, Scale::Major)),
    ];
    let (results, events) = run(&mut game, &presses);

    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(results.len(), 1);
    let record = &results.records()[0];
    assert_eq!(record.len(), 4);

    let hit = CriteriaMask::CLICK | CriteriaMask::NOTE | CriteriaMask::SCALE | CriteriaMask::TIME;
    assert_eq!(record.entries()[0].result, hit);
    assert!(record.entries()[1].result.is_empty());
    assert_eq!(record.entries()[2].result, hit);
    // Wrong note, right timing: CLICK+TIME only (the scale also mismatched).
    assert_eq!(
        record.entries()[3].result,
        CriteriaMask::CLICK | CriteriaMask::TIME
    );

    // Judged events carry the criteria gate.
    let satisfied: Vec<bool> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::AttemptJudged { satisfied, .. } => Some(*satisfied),
            _ => None,
        })
        .collect();
    assert_eq!(satisfied, [true, true, false]);
}

#[test]
fn exhaustion_terminates_after_one_record() {
    // Exactly 4 pairs: one full window, then an empty refill ends the loop
    // without creating a second record.
    let source = ListSource {
        pairs: vec![
            (Note::C, Scale::Major),
            (Note::D, Scale::Minor),
            (Note::E, Scale::Major),
            (Note::F, Scale::Minor),
        ],
        criteria: CriteriaMask::ALL,
    };
    let mut game = GameState::new(source, GameConfig::default());
    let (results, events) = run(&mut game, &[]);

    assert_eq!(results.len(), 1);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::WindowCompleted { .. }))
            .count(),
        1
    );
    assert!(events.contains(&GameEvent::Finished));
}

#[test]
fn multi_window_session_in_completion_order() {
    // 10 pairs: two full windows plus a short final window of 2.
    let pairs: Vec<(Note, Scale)> = Note::ALL
        .into_iter()
        .cycle()
        .take(10)
        .map(|n| (n, Scale::Major))
        .collect();
    let source = ListSource {
        pairs,
        criteria: CriteriaMask::NOTE | CriteriaMask::TIME,
    };
    let mut game = GameState::new(source, GameConfig::default());
    let (results, _) = run(&mut game, &[]);

    assert_eq!(results.len(), 3);
    assert_eq!(results.records()[0].len(), 4);
    assert_eq!(results.records()[1].len(), 4);
    assert_eq!(results.records()[2].len(), 2);
    // Records mirror the pull order across windows.
    assert_eq!(results.records()[0].entries()[0].note, Note::C);
    assert_eq!(results.records()[1].entries()[0].note, Note::G);
    assert_eq!(results.records()[2].entries()[0].note, Note::D);
}

#[test]
fn cancellation_mid_session_flushes_only_complete_windows() {
    // 8 pairs; cancel during the second window.
    let pairs: Vec<(Note, Scale)> = Note::ALL
        .into_iter()
        .cycle()
        .take(8)
        .map(|n| (n, Scale::Minor))
        .collect();
    let source = ListSource {
        pairs,
        criteria: CriteriaMask::ALL,
    };
    let mut game = GameState::new(source, GameConfig::default());

    // The first window completes during tick 11; exit three ticks later.
    let presses = [(14u64, InputEvent::Exit)];
    let (results, events) = run(&mut game, &presses);

    assert_eq!(game.phase(), GamePhase::Cancelled);
    assert_eq!(results.len(), 1);
    assert!(events.contains(&GameEvent::Cancelled));
    assert!(!events.contains(&GameEvent::Finished));
}
