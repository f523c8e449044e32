//! Parallel corpus writer.
//!
//! Writes the aligned lines of a set of [TextRecord] into three files,
//! all sharing a common prefix:
//!
//! - `sum_eng_<prefix>.csv`: `<normalization>$<translation>` per line,
//! - `sumerian_<prefix>`: normalizations, one per line,
//! - `english_<prefix>`: cleaned translations, one per line.
//!
//! Line `i` of the two plain files comes from the same [LineRecord](crate::atf::LineRecord).
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, info};

use crate::atf::TextRecord;
use crate::error::Error;

/// Field delimiter of the csv file.
pub const DELIMITER: u8 = b'$';

pub struct CorpusWriter {
    dst: PathBuf,
    prefix: String,
}

impl CorpusWriter {
    /// Create a new [CorpusWriter].
    /// Nothing is created until [CorpusWriter::write] is called.
    pub fn new(dst: &Path, prefix: &str) -> Self {
        Self {
            dst: dst.to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    /// Get the path of the csv file.
    pub fn csv_path(&self) -> PathBuf {
        self.dst.join(format!("sum_eng_{}.csv", self.prefix))
    }

    /// Get the path of the transliteration side.
    pub fn source_path(&self) -> PathBuf {
        self.dst.join(format!("sumerian_{}", self.prefix))
    }

    /// Get the path of the translation side.
    pub fn target_path(&self) -> PathBuf {
        self.dst.join(format!("english_{}", self.prefix))
    }

    /// Write aligned lines of `texts`, returning how many were written.
    ///
    /// Lines lacking either a normalization or a translation are skipped.
    /// Existing files are truncated.
    pub fn write(&self, texts: &[TextRecord]) -> Result<usize, Error> {
        std::fs::create_dir_all(&self.dst)?;

        info!("writing corpus {:?} into {:?}", self.prefix, self.dst);
        let mut csv = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_path(self.csv_path())?;
        let mut source = BufWriter::new(File::create(self.source_path())?);
        let mut target = BufWriter::new(File::create(self.target_path())?);

        let mut nb_lines = 0;
        for (normalization, translation) in texts
            .iter()
            .flat_map(|text| text.lines())
            .filter_map(|line| line.aligned())
        {
            csv.write_record([normalization, translation])?;
            writeln!(source, "{}", normalization)?;
            writeln!(target, "{}", translation)?;
            nb_lines += 1;
        }

        csv.flush()?;
        source.flush()?;
        target.flush()?;

        debug!("{} aligned lines written for {:?}", nb_lines, self.prefix);
        Ok(nb_lines)
    }
}

/// Write `texts` into `dst` using `prefix`. See [CorpusWriter].
pub fn export(texts: &[TextRecord], dst: &Path, prefix: &str) -> Result<usize, Error> {
    CorpusWriter::new(dst, prefix).write(texts)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::atf::Extractor;

    const ATF: &str = "&P1 = A
1. lugal-e
#tr.en: the king
2. 1(disz) udu
#tr.en: 1 sheep, (for) the temple
3. e2-a
&P2 = B
1. an-na
#tr.en: in heaven
";

    #[test]
    fn write() {
        let texts = Extractor::default().extract_str(ATF);
        let dst = tempfile::tempdir().unwrap();
        let nb = export(&texts, dst.path(), "train").unwrap();
        assert_eq!(nb, 3);

        let csv = fs::read_to_string(dst.path().join("sum_eng_train.csv")).unwrap();
        assert_eq!(
            csv,
            "lugale$the king\nNUMB udu$NUMB sheep , the temple\nana$in heaven\n"
        );

        let source = fs::read_to_string(dst.path().join("sumerian_train")).unwrap();
        let target = fs::read_to_string(dst.path().join("english_train")).unwrap();
        assert_eq!(source.lines().count(), target.lines().count());
        assert_eq!(source, "lugale\nNUMB udu\nana\n");
        assert_eq!(target, "the king\nNUMB sheep , the temple\nin heaven\n");
    }

    #[test]
    fn creates_destination() {
        let dst = tempfile::tempdir().unwrap();
        let nested = dst.path().join("corpus").join("dev");
        let w = CorpusWriter::new(&nested, "dev");
        assert_eq!(w.write(&[]).unwrap(), 0);
        assert!(w.csv_path().exists());
        assert_eq!(fs::read_to_string(w.source_path()).unwrap(), "");
        assert_eq!(fs::read_to_string(w.target_path()).unwrap(), "");
    }

    #[test]
    fn truncates() {
        let texts = Extractor::default().extract_str(ATF);
        let dst = tempfile::tempdir().unwrap();
        export(&texts, dst.path(), "t").unwrap();
        export(&texts[1..], dst.path(), "t").unwrap();
        let source = fs::read_to_string(dst.path().join("sumerian_t")).unwrap();
        assert_eq!(source, "ana\n");
    }
}
