// Top-level game state and the per-tick transition.
//
// `GameState` owns the window, the marker, the essay ledger, and the prompt
// source, and advances them one clock tick at a time:
//
//   1. Cancellation check — an `Exit` input terminates the loop at once;
//      the partial window is discarded, not flushed.
//   2. Key inputs, applied synchronously against the live column. The first
//      attempt per column wins; the computed result is always recorded,
//      and the `satisfied` flag on the emitted event tells the presentation
//      layer whether to fire confirmation side effects (sound, highlight).
//   3. Marker advance. When the marker passes the final column the essay
//      record is appended to the `ResultAccumulator`, and either a fresh
//      window/record pair is created or — if the source ran dry — the game
//      finishes.
//
// Per-window lifecycle:
//   FILLING -> ACTIVE(-1) -> ACTIVE(0..3, accepting input) -> COMPLETE
//     -> finalize -> FILLING (next window) | FINISHED (source exhausted)
// with CANCELLED reachable from any tick. FILLING and COMPLETE are
// instantaneous within a tick, so only the resting phases are represented
// in `GamePhase`.
//
// Input arrives as a finite ordered list of discrete events polled per tick
// (`InputProvider`) — no registered callbacks, no hidden dispatch. Key
// characters are resolved to `(Note, Scale)` upstream; the core never sees
// an unrecognized key.
//
// See also: `marker.rs` for the liveness rule, `essay.rs` for write-once
// and the accumulator, `eval.rs` for result computation.
//
// **Critical constraint: determinism.** The only inputs are the tick calls
// and the event lists passed to them. Same source, same inputs, same ticks
// — same records.

use crate::config::GameConfig;
use crate::criteria::CriteriaMask;
use crate::essay::{EssayRecord, ResultAccumulator};
use crate::eval::evaluate;
use crate::marker::{Marker, MarkerPosition, WINDOW_COMPLETE};
use crate::prompt::{Prompt, PromptSource};
use crate::window::PromptWindow;
use clavier_data::{Note, Scale};
use serde::{Deserialize, Serialize};

/// A discrete input event, already resolved from raw key characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A recognized key press carrying its note/scale identity.
    Key { note: Note, scale: Scale },
    /// Cancellation (escape key or window-close). Terminates the loop
    /// without finalizing a partial window.
    Exit,
}

/// Abstraction over input sources.
/// Implementations: `ScriptedInput` in `clavier_session` (tick-stamped
/// events for headless runs); an interactive frontend would poll real keys.
pub trait InputProvider {
    /// Drain the events that arrived since the last call, in arrival order.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Resting phase of the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Playing: windows are being presented and scored.
    Running,
    /// The source is exhausted and the last window was finalized.
    Finished,
    /// An exit signal arrived; the partial window was discarded.
    Cancelled,
}

/// Events emitted during a tick, for the presentation/session layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An attempt was evaluated and recorded at `column`. `satisfied` is
    /// true iff the result meets the full session criteria — the gate for
    /// confirmation side effects. The result is recorded regardless.
    AttemptJudged {
        column: usize,
        result: CriteriaMask,
        satisfied: bool,
    },
    /// A window completed and its record was appended to the accumulator.
    /// `record_index` is its position in the accumulator.
    WindowCompleted { record_index: usize },
    /// The source is exhausted; no further windows follow.
    Finished,
    /// An exit signal terminated the loop.
    Cancelled,
}

/// The outcome of one tick.
#[derive(Clone, Debug, Default)]
pub struct TickResult {
    /// Events emitted during this tick, in order.
    pub events: Vec<GameEvent>,
    /// True once the loop has reached `Finished` or `Cancelled`; further
    /// ticks are no-ops.
    pub done: bool,
}

/// Everything a presentation layer needs to draw one tick: the active
/// prompts, the live column (if any), and which criteria are in play.
/// The core itself draws nothing.
#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    pub prompts: &'a [Prompt],
    pub live_column: Option<usize>,
    pub marker_position: MarkerPosition,
    pub criteria: CriteriaMask,
}

/// The evaluation state machine for one play session.
pub struct GameState<S: PromptSource> {
    source: S,
    config: GameConfig,
    /// Session-wide criteria, read from the source at construction.
    criteria: CriteriaMask,
    window: PromptWindow,
    essay: EssayRecord,
    marker: Marker,
    phase: GamePhase,
    /// Clock ticks consumed since construction.
    tick: u64,
}

impl<S: PromptSource> GameState<S> {
    /// Build the session state and pull the first window. A source that is
    /// empty from the start yields an immediately `Finished` game with no
    /// records.
    pub fn new(mut source: S, config: GameConfig) -> GameState<S> {
        let criteria = source.criteria();
        let window = PromptWindow::refill(&mut source);
        let essay = EssayRecord::new(&window);
        let phase = if window.is_empty() {
            GamePhase::Finished
        } else {
            GamePhase::Running
        };
        GameState {
            source,
            criteria,
            marker: Marker::new(config.ticks_per_column),
            config,
            window,
            essay,
            phase,
            tick: 0,
        }
    }

    /// Advance one clock tick: apply the tick's input events, then move the
    /// marker, finalizing and refilling the window as needed. Finalized
    /// records are appended to `results` in completion order.
    pub fn tick(&mut self, inputs: &[InputEvent], results: &mut ResultAccumulator) -> TickResult {
        let mut out = TickResult::default();

        if self.phase != GamePhase::Running {
            out.done = true;
            return out;
        }
        self.tick += 1;

        // Cancellation is checked before any state transition. A partial
        // window is discarded, never flushed.
        if inputs.iter().any(|e| matches!(e, InputEvent::Exit)) {
            self.phase = GamePhase::Cancelled;
            out.events.push(GameEvent::Cancelled);
            out.done = true;
            return out;
        }

        for event in inputs {
            let InputEvent::Key { note, scale } = event else {
                continue;
            };
            self.apply_key(*note, *scale, &mut out.events);
        }

        if self.marker.tick() == WINDOW_COMPLETE {
            self.finalize_window(results, &mut out);
        }

        out.done = self.phase != GamePhase::Running;
        out
    }

    /// Evaluate one key press against the live column, if there is one and
    /// it has not been attempted yet. Outside the live window, and for
    /// repeated presses, this is a no-op.
    fn apply_key(&mut self, note: Note, scale: Scale, events: &mut Vec<GameEvent>) {
        let Some(column) = self.marker.live_column() else {
            return;
        };
        // A short final window can leave the marker over an empty column.
        let Some(expected) = self.window.get(column) else {
            return;
        };
        if self.essay.is_attempted(column) {
            return;
        }
        let result = evaluate(expected, note, scale);
        self.essay.write(column, result);
        events.push(GameEvent::AttemptJudged {
            column,
            result,
            satisfied: result.satisfies(self.criteria),
        });
    }

    /// Append the completed record, then refill or finish.
    fn finalize_window(&mut self, results: &mut ResultAccumulator, out: &mut TickResult) {
        results.append(self.essay.clone());
        out.events.push(GameEvent::WindowCompleted {
            record_index: results.len() - 1,
        });

        if self.window.is_exhausted() {
            self.phase = GamePhase::Finished;
            out.events.push(GameEvent::Finished);
            return;
        }

        self.window = PromptWindow::refill(&mut self.source);
        if self.window.is_empty() {
            self.phase = GamePhase::Finished;
            out.events.push(GameEvent::Finished);
            return;
        }
        self.essay = EssayRecord::new(&self.window);
        self.marker.reset();
    }

    /// The per-tick view for a presentation layer.
    pub fn frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            prompts: self.window.prompts(),
            live_column: self.marker.live_column(),
            marker_position: self.marker.position(),
            criteria: self.criteria,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn criteria(&self) -> CriteriaMask {
        self.criteria
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Clock ticks consumed so far.
    pub fn elapsed_ticks(&self) -> u64 {
        self.tick
    }

    /// The informational screens declared by the source, shown before play.
    pub fn info_screens(&self) -> &[String] {
        self.source.info_screens()
    }
}
