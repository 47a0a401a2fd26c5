// Prompts and the source they are pulled from.
//
// A `Prompt` is one scheduled note/scale pairing, tagged with the column it
// occupies in the current window. Prompts are immutable after creation and
// discarded when their window completes.
//
// `PromptSource` is the session-facing supply contract: a possibly-finite
// producer of `(Note, Scale)` pairs plus the session-wide criteria mask and
// the informational screens shown before play. The core only ever pulls
// "next up to `WINDOW_SIZE`" pairs through `PromptWindow::refill`.
//
// See also: `window.rs` for the refill logic, `game.rs` for the lifecycle
// that decides when refills happen.

use crate::criteria::CriteriaMask;
use clavier_data::{Note, Scale};
use serde::{Deserialize, Serialize};

/// Number of columns in a full prompt window. Shared by the window, the
/// marker, and the essay record — the single constant that keeps their
/// lengths in agreement.
pub const WINDOW_SIZE: usize = 4;

/// A single scheduled note/scale pairing awaiting (or having received) a
/// user attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Column position in the window, `0..WINDOW_SIZE`.
    pub column: u8,
    pub note: Note,
    pub scale: Scale,
}

/// Supplies prompts and session-wide settings to the core.
///
/// Implementations: `ScriptedSource` in `clavier_session` (finite, from a
/// session script); test sources in this crate's tests.
pub trait PromptSource {
    /// Pull the next `(note, scale)` pair, or `None` when exhausted.
    /// Exhaustion is a normal terminal state, not an error.
    fn next_pair(&mut self) -> Option<(Note, Scale)>;

    /// The criteria an attempt must fully satisfy to count favorably.
    /// Fixed for the whole session, not per-prompt.
    fn criteria(&self) -> CriteriaMask;

    /// Informational screens to display before play begins. Opaque to the
    /// core; the presentation layer decides how to show them.
    fn info_screens(&self) -> &[String] {
        &[]
    }
}
