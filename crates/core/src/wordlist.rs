//! Plain-text word list format.
//!
//! One pair per line written as `answer;prompt`. Blank lines are skipped.
//! Lines starting with `#` are directives:
//!
//! - `#input <code>`: language of the prompts
//! - `#output <code>`: language of the answers
//! - `#name answer;prompt`: a regular pair whose prompt also names the list
//!
//! ```text
//! #input en
//! #output de
//! #name der Körper;body
//! die Haut;skin
//! die Hand;hand
//! ```

use thiserror::Error;

use crate::model::{BankMetadata, Language, WordBank, WordBankError, WordPair, WordPairError};

const DIRECTIVE_INPUT: &str = "#input";
const DIRECTIVE_OUTPUT: &str = "#output";
const DIRECTIVE_NAME: &str = "#name";

/// Errors raised while reading a word list. Line numbers start at 1.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordListError {
    #[error("line {line}: expected `answer;prompt`, got {content:?}")]
    InvalidLine { line: usize, content: String },

    #[error("line {line}: {reason}")]
    InvalidPair {
        line: usize,
        #[source]
        reason: WordPairError,
    },

    #[error("line {line}: unknown directive {directive}")]
    UnknownDirective { line: usize, directive: String },

    #[error("line {line}: directive {directive} needs a value")]
    MissingValue { line: usize, directive: String },

    #[error("line {line}: unknown language code {code:?}")]
    UnknownLanguage { line: usize, code: String },

    #[error(transparent)]
    Bank(#[from] WordBankError),
}

/// Parse a word list into a bank, keeping file order.
///
/// # Errors
///
/// Returns `WordListError` for malformed lines, unknown directives or
/// languages, and `WordListError::Bank` when the list holds no pairs.
pub fn parse_word_list(source: &str) -> Result<WordBank, WordListError> {
    let mut pairs = Vec::new();
    let mut metadata = BankMetadata::default();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        let Some((directive, rest)) = split_directive(text) else {
            pairs.push(parse_pair(line, text)?);
            continue;
        };

        match directive {
            DIRECTIVE_INPUT => metadata.input_language = Some(parse_language(line, directive, rest)?),
            DIRECTIVE_OUTPUT => {
                metadata.output_language = Some(parse_language(line, directive, rest)?);
            }
            DIRECTIVE_NAME => {
                let rest = require_value(line, directive, rest)?;
                let pair = parse_pair(line, rest)?;
                metadata.name = Some(pair.prompt().to_owned());
                pairs.push(pair);
            }
            other => {
                return Err(WordListError::UnknownDirective {
                    line,
                    directive: other.to_owned(),
                });
            }
        }
    }

    Ok(WordBank::new(pairs)?.with_metadata(metadata))
}

/// Write pairs back in `answer;prompt` form, one per line.
#[must_use]
pub fn render_word_list<'a>(pairs: impl IntoIterator<Item = &'a WordPair>) -> String {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(pair.answer());
        out.push(';');
        out.push_str(pair.prompt());
        out.push('\n');
    }
    out
}

/// Write a whole bank back out, directives included.
///
/// Languages become `#input`/`#output` lines and the first pair whose prompt
/// equals the bank name is written as a `#name` line, so parsing the result
/// gives back the same bank.
#[must_use]
pub fn render_bank(bank: &WordBank) -> String {
    let metadata = bank.metadata();
    let mut out = String::new();
    if let Some(language) = metadata.input_language {
        out.push_str(&format!("{DIRECTIVE_INPUT} {}\n", language.code()));
    }
    if let Some(language) = metadata.output_language {
        out.push_str(&format!("{DIRECTIVE_OUTPUT} {}\n", language.code()));
    }

    let mut name = metadata.name.as_deref();
    for pair in bank {
        if name == Some(pair.prompt()) {
            out.push_str(DIRECTIVE_NAME);
            out.push(' ');
            name = None;
        }
        out.push_str(&render_word_list([pair]));
    }
    out
}

fn split_directive(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with('#') {
        return None;
    }
    Some(match text.split_once(char::is_whitespace) {
        Some((directive, rest)) => (directive, rest.trim()),
        None => (text, ""),
    })
}

fn require_value<'a>(line: usize, directive: &str, rest: &'a str) -> Result<&'a str, WordListError> {
    if rest.is_empty() {
        return Err(WordListError::MissingValue {
            line,
            directive: directive.to_owned(),
        });
    }
    Ok(rest)
}

fn parse_language(line: usize, directive: &str, rest: &str) -> Result<Language, WordListError> {
    let code = require_value(line, directive, rest)?;
    Language::from_code(code).ok_or_else(|| WordListError::UnknownLanguage {
        line,
        code: code.to_owned(),
    })
}

fn parse_pair(line: usize, text: &str) -> Result<WordPair, WordListError> {
    let mut fields = text.split(';');
    let (Some(answer), Some(prompt), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(WordListError::InvalidLine {
            line,
            content: text.to_owned(),
        });
    };

    let pair = WordPair::new(prompt.trim(), answer.trim());
    pair.validate()
        .map_err(|reason| WordListError::InvalidPair { line, reason })?;
    Ok(pair)
}
