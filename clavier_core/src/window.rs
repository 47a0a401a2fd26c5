// The rolling window of active prompts.
//
// A `PromptWindow` holds up to `WINDOW_SIZE` prompts pulled from the
// session's `PromptSource`, one per column in pull order. Refilling is the
// only way a window is built; it never mutates after that. A refill that
// yields fewer than `WINDOW_SIZE` prompts marks the source exhausted — the
// short window is still played and scored, and the caller stops issuing
// refills after it completes.
//
// See also: `prompt.rs` for `Prompt`/`PromptSource`, `essay.rs` for the
// score record created alongside each window, `game.rs` for the lifecycle.

use crate::prompt::{Prompt, PromptSource, WINDOW_SIZE};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The active prompts, in column order. At most `WINDOW_SIZE` entries.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromptWindow {
    prompts: SmallVec<[Prompt; WINDOW_SIZE]>,
    exhausted: bool,
}

impl PromptWindow {
    /// Pull up to `WINDOW_SIZE` pairs from the source and assign them
    /// columns `0..k` in pull order. The only side effect is advancing the
    /// source.
    pub fn refill(source: &mut dyn PromptSource) -> PromptWindow {
        let mut prompts = SmallVec::new();
        while prompts.len() < WINDOW_SIZE {
            let Some((note, scale)) = source.next_pair() else {
                break;
            };
            prompts.push(Prompt {
                column: prompts.len() as u8,
                note,
                scale,
            });
        }
        let exhausted = prompts.len() < WINDOW_SIZE;
        PromptWindow { prompts, exhausted }
    }

    /// Whether the last refill came up short — the source has nothing more
    /// after this window.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The prompt at `column`, if the window extends that far.
    pub fn get(&self, column: usize) -> Option<&Prompt> {
        self.prompts.get(column)
    }

    /// All prompts, in column order.
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// An empty window signals end-of-session to the caller.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
