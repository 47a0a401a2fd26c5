// Correctness criteria as a named flag set.
//
// Every attempt is scored along four independent dimensions: an attempt was
// made (`CLICK`), the pitch matched (`NOTE`), the scale matched (`SCALE`),
// and the attempt landed inside the live window (`TIME`). A session declares
// which subset of these must ALL hold for an attempt to count favorably.
//
// `CriteriaMask` doubles as the per-attempt result type: `eval.rs` computes
// one mask per attempt, and `satisfies()` gates it against the session's
// declared criteria. The representation is a newtype over `u8` with named
// constants — call sites compose flags with `|`, never raw integers.
//
// The bit values are part of the export format (result rows carry the raw
// bits) and must stay stable: CLICK=1, NOTE=2, SCALE=4, TIME=8.
//
// See also: `eval.rs` for result computation, `essay.rs` for the per-column
// ledger these masks are written into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A set of correctness flags — either a session's declared criteria or a
/// single attempt's computed result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaMask(u8);

impl CriteriaMask {
    /// No flags set. The default state of an unattempted column.
    pub const EMPTY: CriteriaMask = CriteriaMask(0);
    /// An attempt was made.
    pub const CLICK: CriteriaMask = CriteriaMask(1);
    /// The pressed note matched the prompt's note.
    pub const NOTE: CriteriaMask = CriteriaMask(2);
    /// The pressed scale matched the prompt's scale.
    pub const SCALE: CriteriaMask = CriteriaMask(4);
    /// The attempt landed while the column was live.
    pub const TIME: CriteriaMask = CriteriaMask(8);
    /// All four flags.
    pub const ALL: CriteriaMask = CriteriaMask(1 | 2 | 4 | 8);

    /// The raw bit value, as written to exported result rows.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Reconstruct a mask from raw bits. Unknown bits are dropped.
    pub fn from_bits(bits: u8) -> CriteriaMask {
        CriteriaMask(bits & Self::ALL.0)
    }

    /// Whether every flag in `other` is also set in `self`.
    pub fn contains(self, other: CriteriaMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// The criteria gate: true iff every flag the session cares about is
    /// present in this result. A strict AND — no partial credit, and flags
    /// outside `criteria` are ignored.
    pub fn satisfies(self, criteria: CriteriaMask) -> bool {
        self.contains(criteria)
    }

    /// Whether no flag is set (no attempt recorded).
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse a single flag from its stable lowercase name.
    pub fn from_name(name: &str) -> Option<CriteriaMask> {
        match name.to_ascii_lowercase().as_str() {
            "click" => Some(Self::CLICK),
            "note" => Some(Self::NOTE),
            "scale" => Some(Self::SCALE),
            "time" => Some(Self::TIME),
            _ => None,
        }
    }
}

impl BitOr for CriteriaMask {
    type Output = CriteriaMask;

    fn bitor(self, rhs: CriteriaMask) -> CriteriaMask {
        CriteriaMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for CriteriaMask {
    fn bitor_assign(&mut self, rhs: CriteriaMask) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for CriteriaMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let mut first = true;
        for (flag, name) in [
            (Self::CLICK, "click"),
            (Self::NOTE, "note"),
            (Self::SCALE, "scale"),
            (Self::TIME, "time"),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
