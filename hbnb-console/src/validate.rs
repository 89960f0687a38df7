//! Staged argument validation.
//!
//! Each command checks its arguments in a fixed order and stops at the first
//! failing stage. The class check always runs first, and every check runs
//! before the registry is touched.

use hbnb_storage::Storage;
use hbnb_types::{ClassName, RecordKey};
use thiserror::Error;

use crate::{Command, tokenize};

/// A rejected request. `Display` is the exact line shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("** class name missing **")]
    ClassNameMissing,

    #[error("** class doesn't exist **")]
    ClassUnknown,

    #[error("** instance id missing **")]
    InstanceIdMissing,

    #[error("** no instance found **")]
    InstanceNotFound,

    #[error("** attribute name missing **")]
    AttributeNameMissing,

    #[error("** value missing **")]
    ValueMissing,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Request {
    Create(ClassName),
    Count(ClassName),
    Show(RecordKey),
    Destroy(RecordKey),
    All(Option<ClassName>),
    Update {
        key: RecordKey,
        attr: String,
        value: String,
    },
}

/// Validates the arguments of a registry command.
///
/// Returns `None` for commands that do not address the registry
/// (`help`, `quit`, `EOF`).
pub(crate) fn validate<S: Storage>(
    storage: &S,
    command: Command,
    args: &str,
) -> Option<Result<Request, Rejection>> {
    let request = match command {
        Command::Create => check_class(args).map(Request::Create),
        Command::Count => check_class(args).map(Request::Count),
        Command::Show => check_class(args)
            .and_then(|class| check_id(storage, class, args))
            .map(Request::Show),
        Command::Destroy => check_class(args)
            .and_then(|class| check_id(storage, class, args))
            .map(Request::Destroy),
        Command::All => check_optional_class(args).map(Request::All),
        Command::Update => check_class(args)
            .and_then(|class| check_id(storage, class, args))
            .and_then(|key| check_attribute_and_value(args).map(|()| key))
            .map(|key| {
                let (attr, value) = attribute_and_value(args);
                Request::Update { key, attr, value }
            }),
        Command::Help | Command::Quit | Command::Eof => return None,
    };
    Some(request)
}

fn check_class(args: &str) -> Result<ClassName, Rejection> {
    let name = args
        .split_whitespace()
        .next()
        .ok_or(Rejection::ClassNameMissing)?;
    ClassName::lookup(name).ok_or(Rejection::ClassUnknown)
}

/// `all` accepts no class at all, meaning every class.
fn check_optional_class(args: &str) -> Result<Option<ClassName>, Rejection> {
    match args.split_whitespace().next() {
        None => Ok(None),
        Some(name) => ClassName::lookup(name)
            .map(Some)
            .ok_or(Rejection::ClassUnknown),
    }
}

fn check_id<S: Storage>(storage: &S, class: ClassName, args: &str) -> Result<RecordKey, Rejection> {
    let id = args
        .split_whitespace()
        .nth(1)
        .ok_or(Rejection::InstanceIdMissing)?;
    let key = RecordKey::new(class, id);
    if storage.contains(&key) {
        Ok(key)
    } else {
        Err(Rejection::InstanceNotFound)
    }
}

fn check_attribute_and_value(args: &str) -> Result<(), Rejection> {
    let mut words = args.split_whitespace().skip(2);
    words.next().ok_or(Rejection::AttributeNameMissing)?;
    words.next().ok_or(Rejection::ValueMissing)?;
    Ok(())
}

/// Picks attribute and value out of validated `update` arguments.
///
/// Prefers the quote-aware tokens so `name "Bob Smith"` keeps its space. An
/// unbalanced quote can leave fewer tokens than the whitespace split found;
/// the plain word (quotes trimmed) fills in then.
fn attribute_and_value(args: &str) -> (String, String) {
    let tokens = tokenize(args);
    let words: Vec<&str> = args.split_whitespace().collect();
    let pick = |idx: usize| {
        tokens
            .get(idx)
            .cloned()
            .or_else(|| words.get(idx).map(|word| word.trim_matches('"').to_string()))
            .unwrap_or_default()
    };
    (pick(2), pick(3))
}
