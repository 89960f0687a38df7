//! Shared helpers for console tests.

#![allow(dead_code)]

use hbnb_console::Console;
use hbnb_storage::FileStorage;
use hbnb_types::ClassName;

pub type TestConsole = Console<FileStorage, Vec<u8>>;

/// A console over an in-memory store, writing into a buffer.
pub fn console() -> TestConsole {
    Console::new(FileStorage::in_memory(), Vec::new())
}

/// Runs one line and returns what it printed.
pub fn exec(console: &mut TestConsole, line: &str) -> String {
    let start = console.output().len();
    console.execute(line).expect("console line failed");
    String::from_utf8(console.output()[start..].to_vec()).expect("output is UTF-8")
}

/// Creates a record through the shell and returns its id.
pub fn create(console: &mut TestConsole, class: ClassName) -> String {
    exec(console, &format!("create {class}")).trim_end().to_string()
}
