//! Non-interactive statistics report.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use ltbr_core::Corpus;
use ltbr_core::clock::{Clock, SystemClock};
use ltbr_core::config::{Config, paths};
use ltbr_core::progress::{JsonProgressStore, ProgressEntry, ProgressStore, document_key};
use ltbr_core::reading::ReadingAccounting;
use ltbr_core::stats::Statistics;

pub fn run(path: &Path, top: Option<usize>, config: &Config) -> Result<()> {
    let corpus = Corpus::load(path)?;
    let store = JsonProgressStore::new(paths::progress_path()?);
    let saved = store.load(&document_key(path)?)?;

    let stats = Statistics::compute(&corpus, top.unwrap_or(config.top_words));
    let mut out = io::stdout().lock();
    write_report(&mut out, &super::file_name(path), &stats, saved.as_ref(), config)?;
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    file_name: &str,
    stats: &Statistics,
    saved: Option<&ProgressEntry>,
    config: &Config,
) -> io::Result<()> {
    writeln!(out, "File: {file_name}")?;
    writeln!(out, "Total lines: {}", stats.total_lines)?;
    writeln!(out, "Total words: {}", stats.total_words)?;
    writeln!(
        out,
        "Longest line ({} chars): {}",
        stats.longest_line_len, stats.longest_line
    )?;
    writeln!(out, "Longest word: {}", stats.longest_word)?;

    writeln!(out)?;
    writeln!(out, "Most frequent words:")?;
    for (i, wc) in stats.top_words.iter().enumerate() {
        writeln!(out, "{}. {}: {}", i + 1, wc.word, wc.count)?;
    }

    writeln!(out)?;
    match saved {
        Some(entry) => {
            let accounting = ReadingAccounting::new(
                entry.reading_seconds,
                entry.read_words,
                SystemClock.now(),
                config.idle_threshold_secs,
            );
            writeln!(
                out,
                "Saved progress: line {}/{}",
                entry.line + 1,
                stats.total_lines
            )?;
            writeln!(out, "Vocabulary: {} words", entry.vocabulary.len())?;
            writeln!(out, "Notes: {}", entry.notes.len())?;
            writeln!(
                out,
                "Reading speed: {:.0} wpm",
                accounting.wpm(config.default_wpm)
            )?;
        }
        None => writeln!(out, "Saved progress: none")?,
    }
    Ok(())
}
