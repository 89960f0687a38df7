use hbnb_model::construct;
use hbnb_storage::Storage;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::parser::{ParsedLine, parse_line};
use crate::validate::{Request, validate};
use crate::{Command, ConsoleResult, Rejection};

/// Prompt shown before each line is read.
pub const PROMPT: &str = "(hbnb) ";

const DOC_HEADER: &str = "Documented commands (type help <topic>):";

/// Whether the read loop should keep going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command dispatcher bound to a record store and an output sink.
///
/// Each call to [`Console::execute`] is independent: nothing but the store
/// carries state from one line to the next.
pub struct Console<S, W> {
    storage: S,
    out: W,
}

impl<S: Storage, W: Write> Console<S, W> {
    pub fn new(storage: S, out: W) -> Self {
        Self { storage, out }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (S, W) {
        (self.storage, self.out)
    }

    /// Reads lines until `quit` or end of input, prompting before each one.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// ending the session.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> ConsoleResult<()> {
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            buf.clear();
            let flow = if input.read_until(b'\n', &mut buf)? == 0 {
                self.dispatch(Command::Eof, "")?
            } else {
                self.execute(&String::from_utf8_lossy(&buf))?
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parses and runs one line of input.
    ///
    /// Errors only come from flushing the store or writing output; every
    /// input mistake is reported as a line of output instead.
    pub fn execute(&mut self, line: &str) -> ConsoleResult<Flow> {
        match parse_line(line) {
            ParsedLine::Empty => Ok(Flow::Continue),
            ParsedLine::Unknown(line) => {
                debug!(line = %line, "Unrecognized input");
                writeln!(self.out, "*** Unknown syntax: {line}")?;
                Ok(Flow::Continue)
            }
            ParsedLine::Invocation { command, args } => self.dispatch(command, &args),
        }
    }

    /// Runs a command with its canonical argument string.
    pub fn dispatch(&mut self, command: Command, args: &str) -> ConsoleResult<Flow> {
        debug!(command = %command, args, "Dispatching");
        match validate(&self.storage, command, args) {
            Some(Ok(request)) => self.perform(request)?,
            Some(Err(rejection)) => self.reject(rejection)?,
            None => match command {
                Command::Quit => return Ok(Flow::Exit),
                Command::Eof => {
                    writeln!(self.out)?;
                    return Ok(Flow::Exit);
                }
                _ => self.help(args)?,
            },
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    fn perform(&mut self, request: Request) -> ConsoleResult<()> {
        match request {
            Request::Create(class) => {
                let record = construct(class);
                let key = record.key();
                self.storage.insert(record);
                self.storage.save_record(&key)?;
                debug!(key = %key, "Created record");
                writeln!(self.out, "{}", key.id())?;
            }
            Request::Count(class) => {
                let prefix = class.key_prefix();
                let count = self
                    .storage
                    .all()
                    .keys()
                    .filter(|key| key.to_string().starts_with(&prefix))
                    .count();
                writeln!(self.out, "{count}")?;
            }
            Request::Show(key) => {
                if let Some(record) = self.storage.get(&key) {
                    writeln!(self.out, "{record}")?;
                }
            }
            Request::Destroy(key) => {
                self.storage.delete(&key);
                self.storage.save()?;
                debug!(key = %key, "Destroyed record");
            }
            Request::All(class) => {
                let prefix = class.map(|class| class.key_prefix());
                let listed: Vec<String> = self
                    .storage
                    .all()
                    .iter()
                    .filter(|(key, _)| {
                        prefix
                            .as_deref()
                            .is_none_or(|prefix| key.to_string().starts_with(prefix))
                    })
                    .map(|(_, record)| quoted(&record.to_string()))
                    .collect();
                writeln!(self.out, "[{}]", listed.join(", "))?;
            }
            Request::Update { key, attr, value } => {
                self.storage.update(&key, &attr, &value)?;
                self.storage.save_record(&key)?;
                debug!(key = %key, attr = %attr, "Updated record");
            }
        }
        Ok(())
    }

    fn reject(&mut self, rejection: Rejection) -> ConsoleResult<()> {
        debug!(?rejection, "Rejected command");
        writeln!(self.out, "{rejection}")?;
        Ok(())
    }

    fn help(&mut self, topic: &str) -> ConsoleResult<()> {
        if topic.is_empty() {
            let verbs: Vec<&str> = Command::ALL.iter().map(Command::verb).collect();
            writeln!(self.out)?;
            writeln!(self.out, "{DOC_HEADER}")?;
            writeln!(self.out, "{}", "=".repeat(DOC_HEADER.len()))?;
            writeln!(self.out, "{}", verbs.join("  "))?;
            writeln!(self.out)?;
            return Ok(());
        }

        match Command::from_verb(topic) {
            Some(Command::Help) => writeln!(self.out, "{}", Command::Help.help())?,
            Some(command) => writeln!(self.out, "{}\n", command.help())?,
            None => writeln!(self.out, "*** No help on {topic}")?,
        }
        Ok(())
    }
}

/// Renders one `all` entry as a single-quoted string literal, escaping
/// backslashes and single quotes.
fn quoted(item: &str) -> String {
    format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))
}
