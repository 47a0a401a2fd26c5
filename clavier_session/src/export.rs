// Result export.
//
// Finalized records are rendered to CSV, one row per column in
// window-completion order: `note,scale,result` where `result` is the raw
// flag bits of the attempt (0 = no attempt). The row shape is the stable
// export contract; everything upstream of it (file naming, directories) is
// free to change.
//
// Output files are named `clavier-results-NNN.csv` with the first free
// three-digit index in the output directory, so repeated runs never
// overwrite earlier results.

use clavier_core::ResultAccumulator;
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

/// Header line of every export.
pub const CSV_HEADER: &str = "note,scale,result";

/// Render the accumulated records as CSV, header included.
pub fn csv_export(results: &ResultAccumulator) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in results.records() {
        for entry in record.entries() {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{},{},{}", entry.note, entry.scale, entry.result.bits());
        }
    }
    out
}

/// Pick the first free `clavier-results-NNN.csv` path in `dir`.
pub fn output_file_name(dir: &Path) -> io::Result<PathBuf> {
    for index in 0..1000 {
        let candidate = dir.join(format!("clavier-results-{index:03}.csv"));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        "no free result file name (clavier-results-000..999 all taken)",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clavier_core::{CriteriaMask, EssayRecord, PromptSource, PromptWindow};
    use clavier_data::{Note, Scale};

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

    #[test]
    fn csv_rows_are_stable() {
        let mut source = ListSource(vec![
            (Note::C, Scale::Major),
            (Note::D, Scale::Minor),
        ]);
        let window = PromptWindow::refill(&mut source);
        let mut record = EssayRecord::new(&window);
        record.write(0, CriteriaMask::ALL);

        let mut results = ResultAccumulator::new();
        results.append(record);

        let csv = csv_export(&results);
        assert_eq!(csv, "note,scale,result\nc,major,15\nd,minor,0\n");
    }

    #[test]
    fn empty_accumulator_exports_header_only() {
        let results = ResultAccumulator::new();
        assert_eq!(csv_export(&results), "note,scale,result\n");
    }

    #[test]
    fn output_name_skips_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = output_file_name(dir.path()).unwrap();
        assert!(first.ends_with("clavier-results-000.csv"));

        std::fs::write(&first, "taken").unwrap();
        let second = output_file_name(dir.path()).unwrap();
        assert!(second.ends_with("clavier-results-001.csv"));
    }
}
