//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use atfcorpus::atf::ExtractorOptions;
use atfcorpus::transliteration::{DefectPolicy, TransliterationOptions};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "atfcorpus", about = "ATF to parallel corpus tool.")]
/// Holds every command that is callable by the `atfcorpus` command.
pub enum Atfcorpus {
    #[structopt(about = "Parse ATF files into a parallel corpus")]
    Parse(Parse),
    #[structopt(about = "Run the jobs of a JSON manifest")]
    Batch(Batch),
    #[structopt(about = "Write a status report of ATF files")]
    Check(Check),
    #[structopt(about = "Normalize a single transliteration or translation line")]
    Normalize(Normalize),
    #[structopt(about = "Decode index-encoded signs")]
    Decode(Decode),
}

#[derive(Debug, StructOpt)]
/// Parse command and parameters.
///
/// ```sh
/// atfcorpus parse raw/ corpus/ train P100001.atf P100002.atf
/// ```
pub struct Parse {
    #[structopt(parse(from_os_str), help = "source folder (contains .atf files)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "corpus destination")]
    pub dst: PathBuf,
    #[structopt(help = "prefix of corpus files")]
    pub prefix: String,
    #[structopt(help = "files to parse. Default is every .atf file in src.")]
    pub files: Vec<String>,
    #[structopt(
        long = "marker",
        help = "translation marker",
        default_value = "#tr.en"
    )]
    pub translation_marker: String,
    #[structopt(long = "keep-untranslated", help = "keep lines without translation")]
    pub keep_untranslated: bool,
    #[structopt(long = "no-numerals", help = "keep numeral signs")]
    pub no_numerals: bool,
    #[structopt(long = "keep-comments", help = "keep ($ … $) comments")]
    pub keep_comments: bool,
    #[structopt(
        long = "reject-mixed-case",
        help = "words with upper-case letters are defective"
    )]
    pub reject_mixed_case: bool,
    #[structopt(
        long = "defect-policy",
        help = "replace defective words (word) or lines (line)",
        default_value = "word"
    )]
    pub defect_policy: DefectPolicy,
}

impl Parse {
    /// Build extraction options from command line flags.
    pub fn options(&self) -> ExtractorOptions {
        ExtractorOptions {
            translation_marker: self.translation_marker.clone(),
            keep_untranslated: self.keep_untranslated,
            transliteration: TransliterationOptions {
                numeral_placeholders: !self.no_numerals,
                strip_comments: !self.keep_comments,
                reject_mixed_case: self.reject_mixed_case,
                defect_policy: self.defect_policy,
            },
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Batch {
    #[structopt(parse(from_os_str), help = "path to manifest.json")]
    pub manifest: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Check {
    #[structopt(parse(from_os_str), help = "source folder (contains .atf files)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "report destination (csv)")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Normalize {
    #[structopt(short = "t", long = "translation", help = "text is a translation")]
    pub translation: bool,
    #[structopt(help = "text to normalize")]
    pub text: String,
}

#[derive(Debug, StructOpt)]
pub struct Decode {
    #[structopt(help = "encoded normalization")]
    pub text: String,
}
