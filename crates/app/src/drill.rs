//! Interactive drill on a terminal.
//!
//! Reads one answer per line from any `BufRead` and writes prompts and hints
//! to any `Write`, so the loop runs the same against stdin and in tests.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;
use thiserror::Error;

use drill_core::Clock;
use drill_core::model::{BankMetadata, WordBank, WordPair};
use drill_core::wordlist::{render_bank, render_word_list};
use services::{DrillSession, SessionError, SessionProgress};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrillError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// What happened during one terminal drill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillReport {
    pub progress: SessionProgress,
    pub missed: Vec<WordPair>,
    /// Input ended before every prompt was answered.
    pub interrupted: bool,
}

/// Drill every pair of `bank`, reading answers from `input`.
///
/// # Errors
///
/// Returns `DrillError::Io` when reading or writing fails.
pub fn run_drill<R, W>(
    bank: Arc<WordBank>,
    clock: &Clock,
    mut input: R,
    out: &mut W,
) -> Result<DrillReport, DrillError>
where
    R: BufRead,
    W: Write,
{
    let mut session = DrillSession::new(bank, clock.now());
    let mut interrupted = false;
    let mut line = String::new();

    while let Ok(pair) = session.current_prompt() {
        writeln!(out, "> {}", pair.prompt().bold())?;
        write!(out, "? ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            interrupted = true;
            break;
        }

        let answer = line.trim_end_matches(['\n', '\r']);
        let result = session.submit_answer(answer, clock.now())?;
        if result.correct {
            writeln!(out, "{}", result.hint.green())?;
        } else {
            writeln!(out, "! {}", result.hint.red().bold())?;
        }
        writeln!(out)?;
    }

    Ok(DrillReport {
        progress: session.progress(),
        missed: session.missed_pairs().into_iter().cloned().collect(),
        interrupted,
    })
}

/// Closing lines: correct answers, accuracy and the lists drilled.
///
/// # Errors
///
/// Propagates write failures.
pub fn print_report<W: Write>(
    report: &DrillReport,
    files: &[PathBuf],
    out: &mut W,
) -> io::Result<()> {
    let names: Vec<String> = files
        .iter()
        .map(|file| {
            file.file_name()
                .unwrap_or(file.as_os_str())
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    if report.interrupted {
        writeln!(
            out,
            "stopped after {} of {} words",
            report.progress.answered, report.progress.total
        )?;
    }
    writeln!(out, "words answered correctly = {}", report.progress.correct)?;
    writeln!(out, "accuracy = {:.1}%", report.progress.accuracy())?;
    writeln!(out, "words = {}", names.join(", "))?;
    Ok(())
}

/// Append missed pairs to `path` in word-list format. Does nothing when
/// nothing was missed.
///
/// A new (or empty) file starts with the `#input`/`#output` languages of the
/// drilled bank so it can be drilled on its own later.
///
/// # Errors
///
/// Propagates failures to open or write the file.
pub fn save_missed(path: &Path, missed: &[WordPair], drilled: &BankMetadata) -> io::Result<()> {
    if missed.is_empty() {
        return Ok(());
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_new = file.metadata()?.len() == 0;

    let text = match WordBank::new(missed.to_vec()) {
        Ok(bank) if is_new => render_bank(&bank.with_metadata(BankMetadata {
            name: None,
            ..drilled.clone()
        })),
        _ => render_word_list(missed),
    };
    file.write_all(text.as_bytes())
}

/// One line per word list: file, bank name, word count and languages.
///
/// # Errors
///
/// Propagates write failures.
pub fn print_lists<W: Write>(lists: &[(PathBuf, WordBank)], out: &mut W) -> io::Result<()> {
    for (file, bank) in lists {
        let name = bank.name().unwrap_or("unnamed");
        write!(out, "{}: {} ({} words", file.display(), name.bold(), bank.len())?;
        let metadata = bank.metadata();
        if let (Some(input), Some(output)) = (metadata.input_language, metadata.output_language) {
            write!(out, ", {input} -> {output}")?;
        }
        writeln!(out, ")")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::Language;
    use drill_core::time::fixed_clock;
    use drill_core::wordlist::parse_word_list;
    use std::io::Cursor;

    fn body_bank() -> Arc<WordBank> {
        Arc::new(
            WordBank::new(vec![
                WordPair::new("skin", "die Haut"),
                WordPair::new("hand", "die Hand"),
            ])
            .unwrap(),
        )
    }

    fn drill(input: &str) -> (DrillReport, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let report =
            run_drill(body_bank(), &fixed_clock(), Cursor::new(input.to_owned()), &mut out)
                .unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn full_drill_prints_prompts_and_hints() {
        let (report, out) = drill("die Haut\ndie hand\n");

        assert!(out.contains("> skin"));
        assert!(out.contains("> hand"));
        assert!(out.contains("Great :)"));
        assert!(out.contains("! die Hand"));
        assert!(!report.interrupted);
        assert_eq!(report.progress.correct, 1);
        assert!(report.progress.is_complete);
        assert_eq!(report.missed, [WordPair::new("hand", "die Hand")]);
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let (report, _) = drill("die Haut\r\ndie Hand\r\n");
        assert_eq!(report.progress.correct, 2);
        assert!(report.missed.is_empty());
    }

    #[test]
    fn end_of_input_stops_early() {
        let (report, out) = drill("die Haut\n");

        assert!(report.interrupted);
        assert_eq!(report.progress.answered, 1);
        assert!(!report.progress.is_complete);
        assert!(report.missed.is_empty());
        assert!(out.contains("> hand"));
    }

    #[test]
    fn report_lists_counts_and_files() {
        let (report, _) = drill("die Haut\nwrong\n");
        let mut out = Vec::new();
        print_report(&report, &[PathBuf::from("lists/body.txt")], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("words answered correctly = 1"));
        assert!(out.contains("accuracy = 50.0%"));
        assert!(out.contains("words = body.txt"));
        assert!(!out.contains("stopped"));
    }

    #[test]
    fn missed_pairs_are_appended_as_a_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missed.txt");
        let drilled = BankMetadata {
            name: Some("body".into()),
            input_language: Some(Language::English),
            output_language: Some(Language::German),
        };

        save_missed(&path, &[WordPair::new("hand", "die Hand")], &drilled).unwrap();
        save_missed(&path, &[WordPair::new("skin", "die Haut")], &drilled).unwrap();
        save_missed(&path, &[], &drilled).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "#input en\n#output de\ndie Hand;hand\ndie Haut;skin\n");

        let reloaded = parse_word_list(&saved).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.name(), None);
        assert_eq!(reloaded.metadata().output_language, Some(Language::German));
    }

    #[test]
    fn lists_show_name_size_and_languages() {
        colored::control::set_override(false);
        let body = parse_word_list("#input en\n#output de\n#name der Körper;body\ndie Haut;skin\n")
            .unwrap();
        let plain = WordBank::new(vec![WordPair::new("door", "die Tür")]).unwrap();

        let mut out = Vec::new();
        print_lists(
            &[
                (PathBuf::from("body.txt"), body),
                (PathBuf::from("misc.txt"), plain),
            ],
            &mut out,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "body.txt: body (2 words, English -> German)\nmisc.txt: unnamed (1 words)\n"
        );
    }
}
