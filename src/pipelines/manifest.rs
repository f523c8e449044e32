//! Batch runs from a JSON manifest.
//!
//! ```json
//! {
//!   "options": { "keep_untranslated": false, "transliteration": { "defect_policy": "line" } },
//!   "jobs": [
//!     { "src": "raw", "filenames": ["P100001.atf"], "dst": "corpus", "prefix": "train" },
//!     { "src": "raw", "dst": "corpus", "prefix": "all" }
//!   ]
//! }
//! ```
//!
//! A job without `filenames` takes every `.atf` file of its `src`.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{error, info};
use rayon::prelude::*;
use serde::Deserialize;

use crate::atf::ExtractorOptions;
use crate::error::Error;
use crate::pipelines::{ParallelCorpus, Pipeline, Summary};

/// A set of files to turn into one corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub src: PathBuf,
    #[serde(default)]
    pub filenames: Vec<String>,
    pub dst: PathBuf,
    pub prefix: String,
}

impl Job {
    fn pipeline(&self, options: &ExtractorOptions) -> ParallelCorpus {
        ParallelCorpus::new(
            self.src.clone(),
            self.dst.clone(),
            self.prefix.clone(),
            self.filenames.clone(),
            options.clone(),
        )
    }
}

/// Jobs sharing the same extraction options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    options: ExtractorOptions,
    jobs: Vec<Job>,
}

impl Manifest {
    pub fn new(jobs: Vec<Job>, options: ExtractorOptions) -> Self {
        Self { options, jobs }
    }

    /// Read a manifest from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Get a reference to the manifest's jobs.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Get a reference to the shared options.
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }
}

impl std::str::FromStr for Manifest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Jobs run in parallel. Every job is run, and the error of the first
/// failing one (in manifest order) is returned.
impl Pipeline<Vec<Summary>> for Manifest {
    fn run(&self) -> Result<Vec<Summary>, Error> {
        info!("running {} jobs", self.jobs.len());
        let results: Vec<Result<Summary, Error>> = self
            .jobs
            .par_iter()
            .map(|job| {
                let res = job.pipeline(&self.options).run();
                if let Err(e) = &res {
                    error!("[{}] job failed: {:?}", job.prefix, e);
                }
                res
            })
            .collect();

        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::transliteration::DefectPolicy;

    #[test]
    fn deserialize() {
        let manifest: Manifest = r#"{
            "options": { "keep_untranslated": true, "transliteration": { "defect_policy": "line" } },
            "jobs": [
                { "src": "raw", "filenames": ["P1.atf"], "dst": "out", "prefix": "train" },
                { "src": "raw", "dst": "out", "prefix": "all" }
            ]
        }"#
        .parse()
        .unwrap();

        assert_eq!(manifest.jobs().len(), 2);
        assert_eq!(manifest.jobs()[0].filenames, vec!["P1.atf"]);
        assert!(manifest.jobs()[1].filenames.is_empty());
        assert!(manifest.options().keep_untranslated);
        assert_eq!(manifest.options().translation_marker, "#tr.en");
        assert_eq!(
            manifest.options().transliteration.defect_policy,
            DefectPolicy::Line
        );
        assert!(manifest.options().transliteration.numeral_placeholders);
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            "{\"jobs\": 3}".parse::<Manifest>(),
            Err(Error::Serde(_))
        ));
    }

    #[test]
    fn run() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::write(
            src.path().join("P1.atf"),
            "&P1 = A\n1. lugal-e\n#tr.en: the king\n",
        )
        .unwrap();
        fs::write(src.path().join("P2.atf"), "&P2 = B\n1. an-na\n#tr.en: heaven\n").unwrap();

        let job = |filenames: Vec<&str>, prefix: &str| Job {
            src: src.path().to_path_buf(),
            filenames: filenames.into_iter().map(String::from).collect(),
            dst: dst.path().to_path_buf(),
            prefix: prefix.to_string(),
        };
        let manifest = Manifest::new(
            vec![job(vec!["P1.atf"], "train"), job(vec!["P2.atf"], "test")],
            ExtractorOptions::default(),
        );

        let summaries = manifest.run().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].aligned, 1);
        let test = fs::read_to_string(dst.path().join("sumerian_test")).unwrap();
        assert_eq!(test, "ana\n");
    }

    #[test]
    fn failing_job() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let manifest = Manifest::new(
            vec![Job {
                src: src.path().to_path_buf(),
                filenames: vec!["missing.atf".to_string()],
                dst: dst.path().to_path_buf(),
                prefix: "train".to_string(),
            }],
            ExtractorOptions::default(),
        );
        assert!(matches!(manifest.run(), Err(Error::Io(_))));
    }
}
