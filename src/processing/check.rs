//! This module deals with providing data to evaluate raw ATF files before parsing.
//!
//! Each `.atf` file of a folder gets a status (see [AtfStatus]), and counts of texts and translated lines.
//! The report is written as a csv file.
use std::path::Path;

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::atf::{Extractor, ExtractorOptions};
use crate::error::Error;
use crate::filtering::record::is_translated;
use crate::filtering::{AtfStatus, Filter, GoodAtf};
use crate::pipelines::list_atf;

/// A serializable report entry for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    file: String,
    status: AtfStatus,
    translated: bool,
    texts: usize,
    lines: usize,
}

impl FileReport {
    /// Build a report from a file name and its content.
    pub fn new(file: String, atf: &str, extractor: &Extractor) -> Self {
        let texts = extractor.extract_str(atf);
        let lines = texts.iter().map(|text| text.lines().len()).sum();
        Self {
            file,
            status: AtfStatus::of(atf),
            translated: is_translated(atf),
            texts: texts.len(),
            lines,
        }
    }

    /// Get a reference to the file name.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Get the file status.
    pub fn status(&self) -> AtfStatus {
        self.status
    }

    pub fn translated(&self) -> bool {
        self.translated
    }

    pub fn texts(&self) -> usize {
        self.texts
    }

    /// Get the number of translated lines.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

/// Check every `.atf` file of `src`, outputting a report in a csv located at `dst`.
pub fn check(src: &Path, dst: &Path) -> Result<Vec<FileReport>, Error> {
    let filenames = list_atf(src)?;
    let extractor = Extractor::new(ExtractorOptions::default());
    let filter = GoodAtf::default();

    let checked: Vec<(FileReport, bool)> = filenames
        .into_par_iter()
        .map(|file| -> Result<(FileReport, bool), Error> {
            let atf = std::fs::read_to_string(src.join(&file))?;
            let good = filter.detect(atf.as_str());
            Ok((FileReport::new(file, &atf, &extractor), good))
        })
        .collect::<Result<_, _>>()?;

    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    for (report, _) in &checked {
        out.serialize(report)?;
    }
    out.flush()?;

    let nb_good = checked.iter().filter(|(_, good)| *good).count();
    let nb_translated = checked.iter().filter(|(r, _)| r.translated()).count();
    info!(
        "{} files checked: {} good, {} translated",
        checked.len(),
        nb_good,
        nb_translated
    );

    Ok(checked.into_iter().map(|(report, _)| report).collect())
}
