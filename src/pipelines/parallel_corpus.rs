//! ATF to parallel corpus pipeline.
//!
//! # Processing
//! 1. Source files are listed (or globbed as `<src>/*.atf` when none are given).
//! 1. Each file is read and goes through its own [Extractor], files being processed in parallel.
//! 1. Texts are concatenated in file order.
//! 1. Aligned lines are written by a [CorpusWriter].
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::atf::{Extractor, ExtractorOptions, TextRecord};
use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::writing::CorpusWriter;

/// Extension of raw ATF files.
pub const ATF_EXTENSION: &str = "atf";

/// What a [ParallelCorpus] run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub texts: usize,
    /// lines with a translation
    pub lines: usize,
    /// lines written to the corpus
    pub aligned: usize,
}

/// List `*.atf` file names in `src`, sorted.
pub fn list_atf(src: &Path) -> Result<Vec<String>, Error> {
    let pattern = src.join(format!("*.{}", ATF_EXTENSION));
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid source path: {:?}", src)))?;

    let mut filenames = Vec::new();
    for path in glob::glob(pattern)? {
        let path = path?;
        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => filenames.push(name.to_string()),
            None => debug!("skipping non-unicode file name {:?}", path),
        }
    }
    filenames.sort();
    Ok(filenames)
}

/// Parse `filenames` (relative to `src`) into texts.
///
/// Files are processed in parallel, each one with its own extractor.
/// Texts are returned in file order.
pub fn parse_files(
    src: &Path,
    filenames: &[String],
    options: &ExtractorOptions,
) -> Result<Vec<TextRecord>, Error> {
    let texts: Vec<Vec<TextRecord>> = filenames
        .par_iter()
        .map(|filename| -> Result<Vec<TextRecord>, Error> {
            let path = src.join(filename);
            debug!("parsing {:?}", path);
            let content = std::fs::read_to_string(&path)?;
            let extractor = Extractor::new(options.clone());
            Ok(extractor.extract_str(&content))
        })
        .collect::<Result<_, _>>()?;

    Ok(texts.into_iter().flatten().collect())
}

pub struct ParallelCorpus {
    src: PathBuf,
    dst: PathBuf,
    prefix: String,
    filenames: Vec<String>,
    options: ExtractorOptions,
}

impl ParallelCorpus {
    /// An empty `filenames` means every `.atf` file of `src`.
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        prefix: String,
        filenames: Vec<String>,
        options: ExtractorOptions,
    ) -> Self {
        Self {
            src,
            dst,
            prefix,
            filenames,
            options,
        }
    }

    /// Get a reference to the corpus prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn filenames(&self) -> Result<Vec<String>, Error> {
        if self.filenames.is_empty() {
            list_atf(&self.src)
        } else {
            Ok(self.filenames.clone())
        }
    }
}

impl Pipeline<Summary> for ParallelCorpus {
    fn run(&self) -> Result<Summary, Error> {
        let filenames = self.filenames()?;
        info!(
            "[{}] parsing {} files from {:?}",
            self.prefix,
            filenames.len(),
            self.src
        );

        let texts = parse_files(&self.src, &filenames, &self.options)?;
        let lines = texts
            .iter()
            .flat_map(|text| text.lines())
            .filter(|line| line.translation().is_some())
            .count();

        let aligned = CorpusWriter::new(&self.dst, &self.prefix).write(&texts)?;

        let summary = Summary {
            files: filenames.len(),
            texts: texts.len(),
            lines,
            aligned,
        };
        info!("[{}] done: {:?}", self.prefix, summary);
        Ok(summary)
    }
}
