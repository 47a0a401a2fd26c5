// Session scripts — the JSON declaration of one play session.
//
// A script declares the prompt sequence, the criteria flags an attempt must
// fully satisfy, the informational screens shown before play, and (for
// headless runs and tests) tick-stamped key presses. Example:
//
//   {
//     "criteria": ["note", "time"],
//     "info_screens": ["Welcome to Clavier.", "Press keys on the beat."],
//     "prompts": [
//       { "note": "c", "scale": "major" },
//       { "note": "d", "scale": "minor" }
//     ],
//     "keys": [ { "tick": 4, "key": "a" } ]
//   }
//
// `ScriptedSource` turns the prompt list into a `PromptSource`;
// `ScriptedInput` turns the key list into a per-tick `InputProvider`,
// resolving characters through `clavier_data::KeyMap` and silently dropping
// anything unbound (user noise, not a fault).
//
// See also: `session.rs` for the result side, `main.rs` for the runner that
// loads scripts from disk.

use clavier_core::{CriteriaMask, InputEvent, InputProvider, PromptSource};
use clavier_data::{KeyMap, Note, Scale};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scripted prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPrompt {
    pub note: Note,
    pub scale: Scale,
}

/// One scripted key press, applied on the given 1-based tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptKey {
    pub tick: u64,
    pub key: char,
}

/// The parsed session script.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionScript {
    /// Criteria flag names: any of "click", "note", "scale", "time".
    pub criteria: Vec<String>,
    /// Informational screens shown before play. Opaque strings.
    #[serde(default)]
    pub info_screens: Vec<String>,
    /// The prompt sequence, consumed four at a time.
    pub prompts: Vec<ScriptPrompt>,
    /// Scripted key presses for headless runs. Empty for interactive use.
    #[serde(default)]
    pub keys: Vec<ScriptKey>,
    /// Optional scripted cancellation: the run exits on this tick, and the
    /// window in progress is discarded.
    #[serde(default)]
    pub exit_tick: Option<u64>,
}

/// Errors surfaced while loading a script. Setup-time only — nothing here
/// reaches the core.
#[derive(Debug)]
pub enum ScriptError {
    Json(serde_json::Error),
    UnknownCriterion(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Json(e) => write!(f, "malformed session script: {e}"),
            ScriptError::UnknownCriterion(name) => {
                write!(f, "unknown criterion '{name}' (expected click/note/scale/time)")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        ScriptError::Json(e)
    }
}

impl SessionScript {
    /// Parse a script from a JSON string and validate its criteria names.
    pub fn from_json(json: &str) -> Result<SessionScript, ScriptError> {
        let script: SessionScript = serde_json::from_str(json)?;
        script.criteria_mask()?;
        Ok(script)
    }

    /// The combined criteria mask declared by the script.
    pub fn criteria_mask(&self) -> Result<CriteriaMask, ScriptError> {
        let mut mask = CriteriaMask::EMPTY;
        for name in &self.criteria {
            match CriteriaMask::from_name(name) {
                Some(flag) => mask |= flag,
                None => return Err(ScriptError::UnknownCriterion(name.clone())),
            }
        }
        Ok(mask)
    }
}

/// The embedded demo session, compiled in so the runner works out of the
/// box with no arguments.
pub fn default_script() -> SessionScript {
    SessionScript::from_json(include_str!("../data/demo_session.json"))
        .expect("embedded demo session must parse")
}

/// A `PromptSource` over a script's prompt list, in order.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    prompts: Vec<ScriptPrompt>,
    next: usize,
    criteria: CriteriaMask,
    info_screens: Vec<String>,
}

impl ScriptedSource {
    pub fn new(script: &SessionScript) -> Result<ScriptedSource, ScriptError> {
        Ok(ScriptedSource {
            prompts: script.prompts.clone(),
            next: 0,
            criteria: script.criteria_mask()?,
            info_screens: script.info_screens.clone(),
        })
    }

    /// Prompts not yet pulled.
    pub fn remaining(&self) -> usize {
        self.prompts.len() - self.next
    }
}

impl PromptSource for ScriptedSource {
    fn next_pair(&mut self) -> Option<(Note, Scale)> {
        let prompt = self.prompts.get(self.next)?;
        self.next += 1;
        Some((prompt.note, prompt.scale))
    }

    fn criteria(&self) -> CriteriaMask {
        self.criteria
    }

    fn info_screens(&self) -> &[String] {
        &self.info_screens
    }
}

/// A per-tick input feed from scripted key presses. Each `poll_events` call
/// advances one tick and returns that tick's events in script order.
#[derive(Clone, Debug)]
pub struct ScriptedInput {
    /// Resolved `(tick, event)` pairs, in script order.
    events: Vec<(u64, InputEvent)>,
    current_tick: u64,
}

impl ScriptedInput {
    /// Resolve the script's key presses through `key_map`. Unbound
    /// characters are dropped.
    pub fn new(script: &SessionScript, key_map: &KeyMap) -> ScriptedInput {
        let mut events: Vec<(u64, InputEvent)> = script
            .keys
            .iter()
            .filter_map(|k| {
                let (note, scale) = key_map.resolve(k.key)?;
                Some((k.tick, InputEvent::Key { note, scale }))
            })
            .collect();
        if let Some(tick) = script.exit_tick {
            events.push((tick, InputEvent::Exit));
        }
        ScriptedInput {
            events,
            current_tick: 0,
        }
    }
}

impl InputProvider for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.current_tick += 1;
        self.events
            .iter()
            .filter(|(t, _)| *t == self.current_tick)
            .map(|(_, e)| *e)
            .collect()
    }
}
