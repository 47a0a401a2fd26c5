// Keyboard resolution table.
//
// Raw key characters are resolved to `(Note, Scale)` pairs before they reach
// the evaluation core. The core never sees a character it cannot interpret:
// unrecognized keys resolve to `None` and are dropped by the input layer
// (user noise, not a fault).
//
// Default layout: the home row plays the major scale, the row above it plays
// the minor scale, one key per natural note in ascending pitch order:
//
//   a s d f g h j   ->  c d e f g a b  (major)
//   q w e r t y u   ->  c d e f g a b  (minor)

use crate::note::{Note, Scale};
use rustc_hash::FxHashMap;

/// Resolves raw key characters to `(Note, Scale)` pairs.
#[derive(Clone, Debug)]
pub struct KeyMap {
    table: FxHashMap<char, (Note, Scale)>,
}

/// Home-row characters for the major scale, in `Note::ALL` order.
const MAJOR_ROW: [char; 7] = ['a', 's', 'd', 'f', 'g', 'h', 'j'];

/// Upper-row characters for the minor scale, in `Note::ALL` order.
const MINOR_ROW: [char; 7] = ['q', 'w', 'e', 'r', 't', 'y', 'u'];

impl KeyMap {
    /// The default two-row layout described in the module header.
    pub fn default_layout() -> Self {
        let mut table = FxHashMap::default();
        for (i, note) in Note::ALL.into_iter().enumerate() {
            table.insert(MAJOR_ROW[i], (note, Scale::Major));
            table.insert(MINOR_ROW[i], (note, Scale::Minor));
        }
        Self { table }
    }

    /// Build a key map from explicit bindings. Later duplicates win.
    pub fn from_bindings(bindings: impl IntoIterator<Item = (char, Note, Scale)>) -> Self {
        let mut table = FxHashMap::default();
        for (key, note, scale) in bindings {
            table.insert(key, (note, scale));
        }
        Self { table }
    }

    /// Resolve a key character, or `None` if it is not bound.
    pub fn resolve(&self, key: char) -> Option<(Note, Scale)> {
        self.table.get(&key).copied()
    }

    /// Whether the character is part of the playable alphabet.
    pub fn is_bound(&self, key: char) -> bool {
        self.table.contains_key(&key)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::default_layout()
    }
}
