use std::fs;
use std::path::Path;

use atfcorpus::atf::ExtractorOptions;
use atfcorpus::pipelines::{parse_files, Job, Manifest, ParallelCorpus, Pipeline};
use atfcorpus::sign::encoding;
use atfcorpus::transliteration::{DefectPolicy, TransliterationOptions};
use atfcorpus::writing;

const P100001: &str = "&P100001 = CDLI Pub 1
#atf: lang sux
@tablet
@obverse
1. 5(disz) sila3 i3-gesz
#tr.en: 5 sila of sesame oil
2. ki lugal-la-ta
#tr.en: from the king,
3. [...] x x
#tr.en: (broken) oil
@reverse
$ blank space
4. mu an-na-ke4
#tr.en: year: “Heaven”
";

const P100002: &str = "&P100002 = CDLI Pub 2
1. e2 {d}en-lil2-la2
2. szu ba-ti
#tr.en: received in the temple of Enlil
";

fn raw_folder(dir: &Path) {
    fs::write(dir.join("P100001.atf"), P100001).unwrap();
    fs::write(dir.join("P100002.atf"), P100002).unwrap();
}

#[test]
fn parse_and_export() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    raw_folder(src.path());

    let filenames = vec!["P100001.atf".to_string(), "P100002.atf".to_string()];
    let texts = parse_files(src.path(), &filenames, &ExtractorOptions::default()).unwrap();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].id(), "P100001");
    assert_eq!(texts[0].lines().len(), 4);
    assert_eq!(texts[1].lines().len(), 1);
    assert_eq!(texts[1].lines()[0].line_number(), "2");

    let nb = writing::export(&texts, dst.path(), "train").unwrap();
    assert_eq!(nb, 5);

    let csv = fs::read_to_string(dst.path().join("sum_eng_train.csv")).unwrap();
    let source = fs::read_to_string(dst.path().join("sumerian_train")).unwrap();
    let target = fs::read_to_string(dst.path().join("english_train")).unwrap();

    assert_eq!(csv.lines().count(), 5);
    assert_eq!(source.lines().count(), 5);
    assert_eq!(target.lines().count(), 5);

    for ((row, s), t) in csv.lines().zip(source.lines()).zip(target.lines()) {
        assert_eq!(row, format!("{}${}", s, t));
    }

    let first: Vec<&str> = target.lines().collect();
    assert_eq!(first[0], "NUMB sila of sesame oil");
    assert_eq!(first[1], "from the king ,");
    assert_eq!(first[3], "year : “ Heaven ”");
    assert!(source.lines().nth(1).unwrap().contains("lugala"));
    assert!(source.lines().nth(2).unwrap().contains('X'));
}

#[test]
fn encoded_normalization_decodes() {
    let src = tempfile::tempdir().unwrap();
    raw_folder(src.path());

    let filenames = vec!["P100001.atf".to_string()];
    let texts = parse_files(src.path(), &filenames, &ExtractorOptions::default()).unwrap();
    for line in texts[0].lines() {
        let plain = line.normalization().unwrap();
        let encoded = line.normalization_encoded().unwrap();
        assert_eq!(plain.split(' ').count(), encoded.split(' ').count());
        // decoding restores indices, which are absent from the plain side
        let decoded = encoding::decode_line(encoded);
        assert!(decoded.len() >= plain.len());
    }
}

#[test]
fn line_policy() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    raw_folder(src.path());

    let options = ExtractorOptions {
        transliteration: TransliterationOptions {
            defect_policy: DefectPolicy::Line,
            ..Default::default()
        },
        ..Default::default()
    };
    let p = ParallelCorpus::new(
        src.path().to_path_buf(),
        dst.path().to_path_buf(),
        "line".to_string(),
        Vec::new(),
        options,
    );
    let summary = p.run().unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.aligned, 5);

    let source = fs::read_to_string(dst.path().join("sumerian_line")).unwrap();
    assert_eq!(source.lines().nth(2), Some("X"));
}

#[test]
fn manifest_file() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    raw_folder(src.path());

    let json = format!(
        r#"{{"jobs": [
            {{"src": {src:?}, "filenames": ["P100001.atf"], "dst": {dst:?}, "prefix": "train"}},
            {{"src": {src:?}, "filenames": ["P100002.atf"], "dst": {dst:?}, "prefix": "test"}}
        ]}}"#,
        src = src.path().to_str().unwrap(),
        dst = dst.path().to_str().unwrap(),
    );
    let manifest_path = dst.path().join("manifest.json");
    fs::write(&manifest_path, json).unwrap();

    let manifest = Manifest::from_path(&manifest_path).unwrap();
    let jobs: Vec<&Job> = manifest.jobs().iter().collect();
    assert_eq!(jobs[1].prefix, "test");

    let summaries = manifest.run().unwrap();
    assert_eq!(summaries[0].aligned, 4);
    assert_eq!(summaries[1].aligned, 1);
    assert!(dst.path().join("english_test").exists());
}
