// clavier_session — session lifecycle around the evaluation core.
//
// Everything `clavier_core` treats as an external collaborator lives here:
// the scripted prompt source, the scripted input feed, the result export,
// and the output-file handling. The `clavier` binary (`main.rs`) ties them
// together into a headless runner.
//
// Architecture:
// - `script.rs`:  `SessionScript` (JSON) — prompts, criteria, info screens,
//                 and optional tick-stamped key presses; `ScriptedSource`
//                 (implements `PromptSource`) and `ScriptedInput`
//                 (implements `InputProvider`) built from it.
// - `export.rs`:  CSV rendering of finalized records and collision-avoiding
//                 output file naming.
// - `session.rs`: `Session` — owns the `ResultAccumulator` for one run and
//                 writes the export on `finish()`.
//
// The session script follows the same pattern as the rest of the workspace's
// data-driven inputs: JSON string in, typed struct out, with a
// `default_script()` convenience embedding a demo session at compile time.

pub mod export;
pub mod script;
pub mod session;

pub use script::{ScriptError, ScriptedInput, ScriptedSource, SessionScript, default_script};
pub use session::Session;
