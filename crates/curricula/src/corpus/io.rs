//! # Corpus IO
//!
//! Corpus files are plain text, one sentence per line, tokens separated
//! by arbitrary whitespace.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    corpus::{ParallelCorpus, Sentence, tokenize},
    errors::CResult,
};

/// Load a [`ParallelCorpus`] from a source and a target text file.
///
/// # Arguments
/// * `source_path` - the source language file.
/// * `target_path` - the target language file; must have the same line count.
pub fn load_parallel_corpus_paths<P, Q>(
    source_path: P,
    target_path: Q,
) -> CResult<ParallelCorpus>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = load_sentences_path(source_path.as_ref())?;
    let target = load_sentences_path(target_path.as_ref())?;

    let corpus = ParallelCorpus::try_zip(source, target)?;
    log::info!("Loaded {} sentence pairs", corpus.len());
    Ok(corpus)
}

/// Read a [`ParallelCorpus`] from a pair of line readers.
pub fn read_parallel_corpus<R, S>(
    source: R,
    target: S,
) -> CResult<ParallelCorpus>
where
    R: BufRead,
    S: BufRead,
{
    ParallelCorpus::try_zip(read_sentences(source)?, read_sentences(target)?)
}

/// Load the tokenized sentences of one text file.
pub fn load_sentences_path<P: AsRef<Path>>(path: P) -> CResult<Vec<Sentence>> {
    let reader = BufReader::new(File::open(path)?);
    read_sentences(reader)
}

/// Read tokenized sentences, one per line.
pub fn read_sentences<R: BufRead>(reader: R) -> CResult<Vec<Sentence>> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        sentences.push(tokenize(&line?));
    }
    Ok(sentences)
}

/// Write sentences one per line, tokens joined by a single space.
pub fn write_sentences<'a, W, I>(
    sentences: I,
    writer: &mut W,
) -> CResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a [String]>,
{
    for sentence in sentences {
        writeln!(writer, "{}", sentence.join(" "))?;
    }
    Ok(())
}

/// Save sentences to a text file, one per line.
pub fn save_sentences_path<'a, P, I>(
    sentences: I,
    path: P,
) -> CResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a [String]>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_sentences(sentences, &mut writer)?;
    writer.flush()?;
    Ok(())
}
