// Shared musical identity types for Clavier.
//
// Provides the note/scale alphabet and the keyboard resolution table used by
// both `clavier_core` (prompt identity and evaluation) and `clavier_session`
// (script parsing and result export). No game state, no I/O.
//
// Architecture:
// - `note.rs`:   `Note` and `Scale` — opaque musical identifiers with
//                equality, ordering, serde, and stable display names.
// - `keymap.rs`: `KeyMap` — raw key character to `(Note, Scale)` resolution.
// - `lib.rs` (this file): re-exports.
//
// Determinism constraint: this crate is used by `clavier_core` and must not
// introduce any non-deterministic behavior. The key map is a fixed table;
// iteration order is never observable through its API.

pub mod keymap;
pub mod note;

pub use keymap::KeyMap;
pub use note::{Note, Scale};
