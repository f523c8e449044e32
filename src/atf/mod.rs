/*! ATF record extraction

ATF files are line oriented. Only three kinds of lines are of interest here:

```text
&P100001 = CDLI Pub 1            <- text header: identifier = publication
1. lugal-e                       <- numbered transliteration line
#tr.en: the king                 <- translation of the line above
```

Everything else (structure markers, comments, other languages) is ignored.
[Extractor] turns these lines into [TextRecord]s holding one [LineRecord] per
translated line, with both sides normalized for alignment.
!*/
mod extractor;
mod record;

pub use extractor::{Extractor, ExtractorOptions, ExtractorState, RawLine};
pub use record::{LineRecord, TextRecord};
