// Per-attempt result computation.
//
// `evaluate` is the whole correctness model: a pure function from the
// expected prompt and the pressed `(note, scale)` pair to a result mask.
// `CLICK` and `TIME` are always set — the caller only invokes the evaluator
// while the prompt's column is live, so timing correctness is the
// precondition of the call, not a separate check. `NOTE` and `SCALE` are
// set on equality with the prompt.
//
// Whether the result *counts* is a separate question, answered by
// `CriteriaMask::satisfies` against the session's declared criteria. The
// result is always recorded in the essay ledger either way; satisfaction
// only gates confirmation side effects (sound, highlight) downstream.
//
// See also: `criteria.rs` for the mask type, `game.rs` for the liveness and
// write-once guards around this call.

use crate::criteria::CriteriaMask;
use crate::prompt::Prompt;
use clavier_data::{Note, Scale};

/// Compute the result mask for one attempt against the expected prompt.
/// Pure: no mutation, no I/O.
pub fn evaluate(expected: &Prompt, note: Note, scale: Scale) -> CriteriaMask {
    let mut result = CriteriaMask::CLICK | CriteriaMask::TIME;
    if note == expected.note {
        result |= CriteriaMask::NOTE;
    }
    if scale == expected.scale {
        result |= CriteriaMask::SCALE;
    }
    result
}
