//! Shell verbs and the dotted-call command table.

use std::fmt;

/// A verb the shell understands natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Create,
    Show,
    All,
    Destroy,
    Update,
    Count,
    Help,
    Quit,
    /// End of input. Also reachable by typing `EOF`.
    Eof,
}

/// Method names accepted by `Class.method(...)` and the command each runs.
///
/// `create`, `help`, `quit` and `EOF` have no dotted form.
pub const DOTTED_COMMANDS: [(&str, Command); 5] = [
    ("all", Command::All),
    ("count", Command::Count),
    ("show", Command::Show),
    ("destroy", Command::Destroy),
    ("update", Command::Update),
];

impl Command {
    /// Every native verb, sorted by name as `help` lists them.
    pub const ALL: [Command; 9] = [
        Self::Eof,
        Self::All,
        Self::Count,
        Self::Create,
        Self::Destroy,
        Self::Help,
        Self::Quit,
        Self::Show,
        Self::Update,
    ];

    /// The word typed at the prompt.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Show => "show",
            Self::All => "all",
            Self::Destroy => "destroy",
            Self::Update => "update",
            Self::Count => "count",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Eof => "EOF",
        }
    }

    /// Looks up a native verb. Case-sensitive.
    #[must_use]
    pub fn from_verb(verb: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.verb() == verb)
    }

    /// Looks up a method name in the dotted-call table.
    #[must_use]
    pub fn from_dotted(method: &str) -> Option<Self> {
        DOTTED_COMMANDS
            .iter()
            .find_map(|(name, command)| (*name == method).then_some(*command))
    }

    /// One-line description printed by `help <verb>`.
    #[must_use]
    pub const fn help(&self) -> &'static str {
        match self {
            Self::Create => "Creates a new instance of a given class",
            Self::Show => {
                "Prints the string representation of an instance based on the class name and id"
            }
            Self::All => {
                "Prints all string representation of all instances based or not on the class name"
            }
            Self::Destroy => "Deletes an instance based on the class name and id",
            Self::Update => {
                "Updates an instance based on the class name and id by adding or updating attribute"
            }
            Self::Count => "Retrieve the number of instances of a class",
            Self::Help => "List available commands with \"help\" or detailed help with \"help cmd\".",
            Self::Quit => "Quit command to exit the program",
            Self::Eof => "EOF command to exit the program",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
