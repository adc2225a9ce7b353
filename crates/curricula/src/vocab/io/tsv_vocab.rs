//! # TSV Frequency Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{CResult, CurriculaError},
    types::FrequencyType,
    vocab::FrequencyVocab,
};

/// The header line written by [`write_vocab_tsv`].
pub const VOCAB_TSV_HEADER: &str = "word\tfrequency";

/// Load a [`FrequencyVocab`] from a TSV vocab file.
///
/// The first line is a header and is skipped; the remaining lines are:
/// ```terminaloutput
/// {WORD}\t{FREQUENCY}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_tsv_path<P: AsRef<Path>>(path: P) -> CResult<FrequencyVocab> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let vocab = read_vocab_tsv(reader)?;
    log::info!("Loaded {} vocabulary entries from {}", vocab.len(), path.display());
    Ok(vocab)
}

/// Read a [`FrequencyVocab`] from a TSV vocab line reader.
///
/// Blank lines are ignored. A word listed twice keeps its last frequency.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocab_tsv<R: BufRead>(reader: R) -> CResult<FrequencyVocab> {
    let mut vocab = FrequencyVocab::default();

    let mut lines = reader.lines().enumerate();
    if let Some((_, header)) = lines.next() {
        header?;
    }

    for (idx, line) in lines {
        let line = line?;
        let s = line.trim_end_matches(['\r', '\n']);
        if s.trim().is_empty() {
            continue;
        }

        let (word, freq) = parse_vocab_line(idx + 1, s)?;
        if let Some(prev) = vocab.insert(word, freq) {
            log::warn!("vocabulary line {}: {word:?} repeated, replacing {prev} with {freq}", idx + 1);
        }
    }

    Ok(vocab)
}

fn parse_vocab_line(
    line: usize,
    s: &str,
) -> CResult<(&str, FrequencyType)> {
    let Some((word, freq)) = s.split_once('\t') else {
        return Err(CurriculaError::VocabFormat {
            line,
            message: format!("expected `word<TAB>frequency`, found {s:?}"),
        });
    };

    let freq = freq
        .trim()
        .parse::<FrequencyType>()
        .map_err(|e| CurriculaError::VocabFormat {
            line,
            message: format!("bad frequency {freq:?}: {e}"),
        })?;

    Ok((word, freq))
}

/// Save a [`FrequencyVocab`] to a TSV vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_tsv_path<P: AsRef<Path>>(
    vocab: &FrequencyVocab,
    path: P,
) -> CResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_tsv(vocab, &mut writer)
}

/// Write a [`FrequencyVocab`] to a [`Write`] writer.
///
/// Entries are written by descending frequency, ties broken by word,
/// after the [`VOCAB_TSV_HEADER`] line.
pub fn write_vocab_tsv<W: Write>(
    vocab: &FrequencyVocab,
    writer: &mut W,
) -> CResult<()> {
    writeln!(writer, "{VOCAB_TSV_HEADER}")?;
    for (word, freq) in vocab.sorted_entries() {
        writeln!(writer, "{word}\t{freq}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_vocab_tsv() {
        let data = "word\tcount\nthe\t100\ncat\t50\r\n\nsat\t7\n";
        let vocab = read_vocab_tsv(Cursor::new(data)).unwrap();

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get("the"), Some(100));
        assert_eq!(vocab.get("cat"), Some(50));
        assert_eq!(vocab.get("sat"), Some(7));
        assert_eq!(vocab.get("word"), None);
    }

    #[test]
    fn test_header_only() {
        let vocab = read_vocab_tsv(Cursor::new("word\tfrequency\n")).unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_unreadable_header() {
        let err = read_vocab_tsv(Cursor::new(&b"\xff\xfe header\nthe\t5\n"[..])).unwrap_err();
        assert!(matches!(err, CurriculaError::Io(_)), "{err}");
    }

    #[test]
    fn test_repeated_word_keeps_last() {
        let vocab = read_vocab_tsv(Cursor::new("h\nx\t1\nx\t9\n")).unwrap();
        assert_eq!(vocab.get("x"), Some(9));
    }

    #[test]
    fn test_malformed_lines() {
        let err = read_vocab_tsv(Cursor::new("h\nthe\t100\ncat 50\n")).unwrap_err();
        match err {
            CurriculaError::VocabFormat { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }

        let err = read_vocab_tsv(Cursor::new("h\nthe\tmany\n")).unwrap_err();
        match err {
            CurriculaError::VocabFormat { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("many"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_save_load_vocab_tsv() {
        let vocab: FrequencyVocab = [("apple", 300), ("banana", 30), ("pear", 3)]
            .into_iter()
            .collect();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.tsv");

                save_vocab_tsv_path(&vocab, &path).expect("Failed to save vocab");

                let loaded_vocab = load_vocab_tsv_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded_vocab, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_write_order() {
        let vocab: FrequencyVocab = [("b", 2), ("a", 2), ("c", 10)].into_iter().collect();
        let mut buf: Vec<u8> = Vec::new();
        write_vocab_tsv(&vocab, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "word\tfrequency\nc\t10\na\t2\nb\t2\n"
        );
    }
}
