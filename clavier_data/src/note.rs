// Musical identifiers.
//
// `Note` and `Scale` are opaque identities: the rest of the workspace only
// ever compares them for equality and renders their names. Pitch frequencies,
// tile coordinates, and sound assets are lookup concerns owned by the
// presentation layer, not part of these types.
//
// Display names double as the wire names used in session scripts and CSV
// export, so they must stay stable: lowercase note letters ("c".."b") and
// lowercase scale names ("major"/"minor").

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven natural pitches the trainer prompts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Note {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Note {
    /// All notes in ascending pitch order.
    pub const ALL: [Note; 7] = [
        Note::C,
        Note::D,
        Note::E,
        Note::F,
        Note::G,
        Note::A,
        Note::B,
    ];

    /// Stable lowercase name, as used in scripts and exported rows.
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "c",
            Note::D => "d",
            Note::E => "e",
            Note::F => "f",
            Note::G => "g",
            Note::A => "a",
            Note::B => "b",
        }
    }

    /// Parse a note from its stable name. Case-insensitive.
    pub fn from_name(s: &str) -> Option<Note> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Some(Note::C),
            "d" => Some(Note::D),
            "e" => Some(Note::E),
            "f" => Some(Note::F),
            "g" => Some(Note::G),
            "a" => Some(Note::A),
            "b" => Some(Note::B),
            _ => None,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The scale context a prompt is presented in.
///
/// Opaque to the evaluation core — only equality matters there. The
/// presentation layer resolves a `Scale` to a renderable signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Major,
    Minor,
}

impl Scale {
    /// All scales, in declaration order.
    pub const ALL: [Scale; 2] = [Scale::Major, Scale::Minor];

    /// Stable lowercase name, as used in scripts and exported rows.
    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
        }
    }

    /// Parse a scale from its stable name. Case-insensitive.
    pub fn from_name(s: &str) -> Option<Scale> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Some(Scale::Major),
            "minor" => Some(Scale::Minor),
            _ => None,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
