// The per-window score ledger and the session accumulator it flushes into.
//
// An `EssayRecord` is the scored outcome of one prompt window: one
// `(note, scale, result)` entry per column, in column order, created empty
// alongside a new window and mutated in place as attempts land. Its length
// always equals the window's length — asserted at construction, so a drift
// between the two surfaces as a contract violation rather than an
// out-of-bounds access.
//
// Results are write-once: a column whose result already carries `CLICK`
// ignores further writes (key repeat and bounce are expected under real
// input hardware — a duplicate is a no-op, never a crash). A record is
// consumed exactly once, at the tick where the marker passes the final
// column, by appending it to the `ResultAccumulator`.
//
// The accumulator is an explicitly owned object passed by `&mut` — there is
// no ambient session singleton.
//
// See also: `window.rs` for the window the record mirrors, `game.rs` for
// the finalize-on-completion rule, `clavier_session` for CSV export.

use crate::criteria::CriteriaMask;
use crate::prompt::WINDOW_SIZE;
use crate::window::PromptWindow;
use clavier_data::{Note, Scale};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One column's scored outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayEntry {
    pub note: Note,
    pub scale: Scale,
    /// Empty until an attempt is evaluated for this column.
    pub result: CriteriaMask,
}

/// The ordered per-column record for one prompt window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EssayRecord {
    entries: SmallVec<[EssayEntry; WINDOW_SIZE]>,
}

impl EssayRecord {
    /// Build a record pre-populated with `(note, scale, empty)` for each
    /// prompt in the window, preserving column order.
    pub fn new(window: &PromptWindow) -> EssayRecord {
        let entries: SmallVec<[EssayEntry; WINDOW_SIZE]> = window
            .prompts()
            .iter()
            .map(|p| EssayEntry {
                note: p.note,
                scale: p.scale,
                result: CriteriaMask::EMPTY,
            })
            .collect();
        assert_eq!(
            entries.len(),
            window.len(),
            "essay record length must match window length"
        );
        EssayRecord { entries }
    }

    /// Whether an attempt was already recorded for `column`. Backs the
    /// write-once rule: the first attempt wins.
    pub fn is_attempted(&self, column: usize) -> bool {
        self.entries
            .get(column)
            .is_some_and(|e| e.result.contains(CriteriaMask::CLICK))
    }

    /// Record a result for `column`. Returns false (and leaves the stored
    /// result untouched) if the column was already attempted or does not
    /// exist.
    pub fn write(&mut self, column: usize, result: CriteriaMask) -> bool {
        if self.is_attempted(column) {
            return false;
        }
        match self.entries.get_mut(column) {
            Some(entry) => {
                entry.result = result;
                true
            }
            None => false,
        }
    }

    /// The entries in column order.
    pub fn entries(&self) -> &[EssayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The session's running result store. Finalized records are appended in
/// window-completion order; nothing is ever removed or reordered.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResultAccumulator {
    records: Vec<EssayRecord>,
}

impl ResultAccumulator {
    pub fn new() -> ResultAccumulator {
        ResultAccumulator::default()
    }

    /// Append a finalized record.
    pub fn append(&mut self, record: EssayRecord) {
        self.records.push(record);
    }

    /// All finalized records, in completion order.
    pub fn records(&self) -> &[EssayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptSource;

    struct ListSource(Vec<(Note, Scale)>);

    impl PromptSource for ListSource {
        fn next_pair(&mut self) -> Option<(Note, Scale)> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }

        fn criteria(&self) -> CriteriaMask {
            CriteriaMask::ALL
        }
    }

    fn four_prompt_window() -> PromptWindow {
        let mut source = ListSource(vec![
            (Note::C, Scale::Major),
            (Note::D, Scale::Major),
            (Note::E, Scale::Minor),
            (Note::F, Scale::Minor),
        ]);
        PromptWindow::refill(&mut source)
    }

    #[test]
    fn new_record_mirrors_the_window() {
        let window = four_prompt_window();
        let record = EssayRecord::new(&window);
        assert_eq!(record.len(), window.len());
        for (entry, prompt) in record.entries().iter().zip(window.prompts()) {
            assert_eq!(entry.note, prompt.note);
            assert_eq!(entry.scale, prompt.scale);
            assert!(entry.result.is_empty());
        }
    }

    #[test]
    fn write_once_ignores_later_attempts() {
        let window = four_prompt_window();
        let mut record = EssayRecord::new(&window);

        let first = CriteriaMask::ALL;
        let second = CriteriaMask::CLICK | CriteriaMask::TIME;

        assert!(record.write(1, first));
        assert!(record.is_attempted(1));
        // A second evaluation for the same column must not change the
        // stored result.
        assert!(!record.write(1, second));
        assert_eq!(record.entries()[1].result, first);
    }

    #[test]
    fn write_out_of_range_is_a_no_op() {
        let window = four_prompt_window();
        let mut record = EssayRecord::new(&window);
        assert!(!record.write(7, CriteriaMask::ALL));
    }

    #[test]
    fn short_window_scores_what_exists() {
        let mut source = ListSource(vec![(Note::G, Scale::Major), (Note::A, Scale::Minor)]);
        let window = PromptWindow::refill(&mut source);
        let mut record = EssayRecord::new(&window);
        assert_eq!(record.len(), 2);
        assert!(record.write(0, CriteriaMask::ALL));
        assert!(!record.write(2, CriteriaMask::ALL));
    }

    #[test]
    fn accumulator_preserves_completion_order() {
        let window = four_prompt_window();
        let mut acc = ResultAccumulator::new();
        assert!(acc.is_empty());

        let mut first = EssayRecord::new(&window);
        first.write(0, CriteriaMask::ALL);
        let second = EssayRecord::new(&window);

        acc.append(first);
        acc.append(second);
        assert_eq!(acc.len(), 2);
        assert_eq!(acc.records()[0].entries()[0].result, CriteriaMask::ALL);
        assert!(acc.records()[1].entries()[0].result.is_empty());
    }
}
