//! Line parsing: canonical verbs and the dotted-call rewrite.
//!
//! The dotted form `Class.method(a, b, c)` is rewritten textually into the
//! canonical argument string `Class a b c`. The rewrite is best-effort: it
//! does not understand nested parentheses, escaped quotes or commas inside
//! quoted arguments, and it drops every quote character, apostrophes
//! included. Malformed input yields a possibly wrong argument list rather
//! than an error.

use hbnb_types::ClassName;
use regex::Regex;
use std::sync::LazyLock;

use crate::Command;

static CLASS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("class token pattern is valid"));

static METHOD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\w+)\(").expect("method token pattern is valid"));

// At least one character, shortest run up to the first `)`.
static ARG_BLOB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.+?)\)").expect("argument pattern is valid"));

static ARG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^"\s]+|".*?""#).expect("argument token pattern is valid"));

/// Outcome of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank input; nothing to do.
    Empty,
    /// A command with its canonical argument string.
    Invocation { command: Command, args: String },
    /// Neither a native verb nor a valid dotted call. Carries the trimmed line.
    Unknown(String),
}

/// Parses one line of input.
///
/// The line is trimmed, then its leading run of `[A-Za-z0-9_]` is taken as
/// the verb and the trimmed remainder as the argument string. A leading `?`
/// is shorthand for `help`. Lines whose verb is not native go through
/// [`rewrite_dotted`].
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::Empty;
    }

    let (verb, rest) = match line.strip_prefix('?') {
        Some(rest) => (Command::Help.verb(), rest),
        None => {
            let end = line
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(line.len());
            line.split_at(end)
        }
    };

    if let Some(command) = Command::from_verb(verb) {
        return ParsedLine::Invocation {
            command,
            args: rest.trim().to_string(),
        };
    }

    match rewrite_dotted(line) {
        Some((command, args)) => ParsedLine::Invocation { command, args },
        None => ParsedLine::Unknown(line.to_string()),
    }
}

/// Rewrites `Class.method(args)` into a command and canonical argument string.
///
/// The class is the first word of the line and the method the first word
/// sitting between a `.` and a `(`. Returns `None` when either is missing,
/// the class is not known, or the method is not in
/// [`DOTTED_COMMANDS`](crate::DOTTED_COMMANDS).
pub fn rewrite_dotted(line: &str) -> Option<(Command, String)> {
    let class = CLASS_TOKEN.find(line)?.as_str();
    let method = METHOD_TOKEN.captures(line)?.get(1)?.as_str();
    let class = ClassName::lookup(class)?;
    let command = Command::from_dotted(method)?;

    let blob = ARG_BLOB
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str());
    let args = normalize_dotted_args(blob).join(" ");

    Some((command, format!("{class} {args}").trim_end().to_string()))
}

/// Splits a dotted-call argument blob into arguments.
///
/// Removes every `"` and `'`, turns `", "` into `","`, then splits on `,`.
/// Empty pieces are kept, so `""` yields one empty argument.
pub fn normalize_dotted_args(blob: &str) -> Vec<String> {
    blob.replace(['"', '\''], "")
        .replace(", ", ",")
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Splits a canonical argument string into tokens.
///
/// A token is either a run of characters that are neither whitespace nor
/// `"`, or a double-quoted span (which may contain spaces). Quotes are
/// stripped from quoted tokens only.
pub fn tokenize(args: &str) -> Vec<String> {
    ARG_TOKEN
        .find_iter(args)
        .map(|m| {
            let token = m.as_str();
            if token.starts_with('"') {
                token.trim_matches('"').to_string()
            } else {
                token.to_string()
            }
        })
        .collect()
}
