//! # atfcorpus
//!
//! Builds Sumerian/English parallel corpora from ATF transliterations.
//!
//! ```sh
//! atfcorpus 0.1.0
//! ATF to parallel corpus tool.
//!
//! USAGE:
//!     atfcorpus <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     batch        Run the jobs of a JSON manifest
//!     check        Write a status report of ATF files
//!     decode       Decode index-encoded signs
//!     help         Prints this message or the help of the given subcommand(s)
//!     normalize    Normalize a single transliteration or translation line
//!     parse        Parse ATF files into a parallel corpus
//! ```
use atfcorpus::error::Error;
use atfcorpus::pipelines::{Manifest, ParallelCorpus, Pipeline};
use atfcorpus::sign::encoding;
use atfcorpus::transformers::TranslationNormalizer;
use atfcorpus::transliteration::Transliteration;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Atfcorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Atfcorpus::Parse(p) => {
            let options = p.options();
            let p = ParallelCorpus::new(p.src, p.dst, p.prefix, p.files, options);
            let summary = p.run()?;
            info!(
                "{} files, {} texts, {} aligned lines",
                summary.files, summary.texts, summary.aligned
            );
        }

        cli::Atfcorpus::Batch(b) => {
            let manifest = Manifest::from_path(&b.manifest)?;
            let summaries = manifest.run()?;
            for (job, summary) in manifest.jobs().iter().zip(summaries) {
                info!("[{}] {} aligned lines", job.prefix, summary.aligned);
            }
        }

        cli::Atfcorpus::Check(c) => {
            atfcorpus::processing::check(&c.src, &c.dst)?;
        }

        cli::Atfcorpus::Normalize(n) => {
            if n.translation {
                println!("{}", TranslationNormalizer::default().normalize(&n.text));
            } else {
                match Transliteration::default().normalize_line(&n.text) {
                    Some(normalization) => {
                        println!("{}", normalization.plain);
                        println!("{}", normalization.encoded);
                    }
                    None => warn!("nothing to normalize in {:?}", n.text),
                }
            }
        }

        cli::Atfcorpus::Decode(d) => {
            println!("{}", encoding::decode_line(&d.text));
        }
    };
    Ok(())
}
