// clavier_core — pure evaluation state machine.
//
// This crate contains all play-time decision logic for Clavier: the rolling
// window of active prompts, the tick-driven marker that defines the live
// input column, the named-flag correctness evaluator, and the criteria-gated
// decision of whether an attempt counts. It has zero rendering or audio
// dependencies and can be tested and run headless.
//
// Module overview:
// - `game.rs`:     Top-level `GameState`, per-tick input processing and
//                  window lifecycle, `GameEvent` output, `RenderFrame` view.
// - `criteria.rs`: `CriteriaMask` — the click/note/scale/time flag set and
//                  the strict AND-gate `satisfies` check.
// - `eval.rs`:     `evaluate()` — the pure per-attempt result computation.
// - `marker.rs`:   Tick-driven marker over the four columns.
// - `window.rs`:   `PromptWindow` — refill-from-source prompt slots.
// - `essay.rs`:    `EssayRecord` per-window score ledger and the
//                  `ResultAccumulator` it flushes into.
// - `prompt.rs`:   `Prompt`, `WINDOW_SIZE`, and the `PromptSource` trait.
// - `config.rs`:   `GameConfig` — tunable cadence parameters.
//
// The companion crate `clavier_session` wraps this library for headless
// runs: it owns the session script, the input feed, and the CSV export.
// That boundary is enforced at the compiler level — this crate cannot
// depend on clocks, files, or key decoding.
//
// **Critical constraint: determinism.** The core is a pure function:
// `(state, input events) -> (new_state, game events)` per tick. No system
// time, no OS entropy, no I/O. Correctness of the timing window depends
// only on tick counting.

pub mod config;
pub mod criteria;
pub mod essay;
pub mod eval;
pub mod game;
pub mod marker;
pub mod prompt;
pub mod window;

pub use config::GameConfig;
pub use criteria::CriteriaMask;
pub use essay::{EssayRecord, ResultAccumulator};
pub use eval::evaluate;
pub use game::{GameEvent, GamePhase, GameState, InputEvent, InputProvider, RenderFrame, TickResult};
pub use marker::{Marker, MarkerPosition};
pub use prompt::{Prompt, PromptSource, WINDOW_SIZE};
pub use window::PromptWindow;
