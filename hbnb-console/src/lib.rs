//! Command interpreter for HBnB records.
//!
//! Turns one line of user input into at most one operation on the record
//! registry:
//! - [`parse_line`] recognizes the canonical `verb Class [id [attr value]]`
//!   form and rewrites the dotted `Class.verb(args)` form into it
//! - [`Console`] validates the arguments stage by stage and runs the
//!   operation, writing exactly one line of output (or none)
//!
//! Validation failures are ordinary output, never errors: the only errors a
//! [`Console`] returns come from the storage flush or the output sink.

mod command;
mod console;
mod error;
mod parser;
mod validate;

pub use command::{Command, DOTTED_COMMANDS};
pub use console::{Console, Flow, PROMPT};
pub use error::{ConsoleError, ConsoleResult};
pub use parser::{ParsedLine, normalize_dotted_args, parse_line, rewrite_dotted, tokenize};
pub use validate::Rejection;
