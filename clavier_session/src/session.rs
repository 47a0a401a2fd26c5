// One play session's result lifecycle.
//
// `Session` owns the `ResultAccumulator` the game loop appends into, and
// writes the CSV export exactly once on `finish()`. There is no ambient
// session state: the accumulator is borrowed mutably by whoever drives the
// loop and the session is consumed when it ends.
//
// A cancelled run still finishes normally — only fully completed windows
// were ever appended, so the export contains exactly what was scored.

use crate::export::{csv_export, output_file_name};
use clavier_core::ResultAccumulator;
use std::io;
use std::path::{Path, PathBuf};

/// Accumulated results plus the output directory they will be written to.
#[derive(Debug)]
pub struct Session {
    results: ResultAccumulator,
    out_dir: PathBuf,
}

impl Session {
    /// Start a session writing into `out_dir` (created if missing on
    /// `finish()`).
    pub fn new(out_dir: impl Into<PathBuf>) -> Session {
        Session {
            results: ResultAccumulator::new(),
            out_dir: out_dir.into(),
        }
    }

    /// The accumulator the game loop appends finalized records into.
    pub fn results_mut(&mut self) -> &mut ResultAccumulator {
        &mut self.results
    }

    pub fn results(&self) -> &ResultAccumulator {
        &self.results
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write the export and return its path. Consumes the session — the
    /// serialized form is produced exactly once.
    pub fn finish(self) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = output_file_name(&self.out_dir)?;
        std::fs::write(&path, csv_export(&self.results))?;
        Ok(path)
    }
}
