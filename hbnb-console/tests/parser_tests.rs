use hbnb_console::{Command, ParsedLine, normalize_dotted_args, parse_line, rewrite_dotted, tokenize};
use pretty_assertions::assert_eq;

fn invocation(command: Command, args: &str) -> ParsedLine {
    ParsedLine::Invocation {
        command,
        args: args.to_string(),
    }
}

// ── Canonical syntax ─────────────────────────────────────────────

#[test]
fn blank_lines_are_empty() {
    assert_eq!(parse_line(""), ParsedLine::Empty);
    assert_eq!(parse_line("   \t\n"), ParsedLine::Empty);
}

#[test]
fn verb_and_trimmed_arguments() {
    assert_eq!(parse_line("create User"), invocation(Command::Create, "User"));
    assert_eq!(
        parse_line("  show   User  1234  \n"),
        invocation(Command::Show, "User  1234")
    );
}

#[test]
fn verb_without_arguments() {
    assert_eq!(parse_line("all"), invocation(Command::All, ""));
    assert_eq!(parse_line("quit"), invocation(Command::Quit, ""));
    assert_eq!(parse_line("EOF"), invocation(Command::Eof, ""));
}

#[test]
fn question_mark_is_help() {
    assert_eq!(parse_line("?"), invocation(Command::Help, ""));
    assert_eq!(parse_line("? update"), invocation(Command::Help, "update"));
    assert_eq!(parse_line("help count"), invocation(Command::Help, "count"));
}

#[test]
fn verbs_are_case_sensitive() {
    assert_eq!(
        parse_line("Create User"),
        ParsedLine::Unknown("Create User".into())
    );
    assert_eq!(parse_line("eof"), ParsedLine::Unknown("eof".into()));
}

#[test]
fn update_keeps_quoted_value_intact() {
    assert_eq!(
        parse_line(r#"update User 1234 name "Bob""#),
        invocation(Command::Update, r#"User 1234 name "Bob""#)
    );
}

// ── Dotted syntax ────────────────────────────────────────────────

#[test]
fn dotted_count_matches_canonical_count() {
    assert_eq!(parse_line("User.count()"), invocation(Command::Count, "User"));
    assert_eq!(parse_line("User.count()"), parse_line("count User"));
}

#[test]
fn dotted_show_strips_quotes() {
    assert_eq!(
        parse_line(r#"User.show("1234")"#),
        invocation(Command::Show, "User 1234")
    );
    assert_eq!(
        parse_line("Place.destroy('abc')"),
        invocation(Command::Destroy, "Place abc")
    );
}

#[test]
fn dotted_update_joins_arguments_with_spaces() {
    assert_eq!(
        parse_line(r#"User.update("1234", "first_name", "John")"#),
        invocation(Command::Update, "User 1234 first_name John")
    );
}

#[test]
fn dotted_apostrophes_are_lost() {
    assert_eq!(
        parse_line(r#"User.update("1", "last_name", "O'Brien")"#),
        invocation(Command::Update, "User 1 last_name OBrien")
    );
}

#[test]
fn dotted_without_closing_paren_has_no_arguments() {
    assert_eq!(parse_line("User.all("), invocation(Command::All, "User"));
}

#[test]
fn dotted_unknown_class_and_method() {
    assert_eq!(
        parse_line("asdfsdf.foo()"),
        ParsedLine::Unknown("asdfsdf.foo()".into())
    );
}

#[test]
fn dotted_unknown_method_on_known_class() {
    assert_eq!(
        parse_line("User.create()"),
        ParsedLine::Unknown("User.create()".into())
    );
    assert_eq!(parse_line("User.count"), ParsedLine::Unknown("User.count".into()));
}

#[test]
fn dotted_known_method_on_unknown_class() {
    assert_eq!(
        parse_line("Ghost.all()"),
        ParsedLine::Unknown("Ghost.all()".into())
    );
}

#[test]
fn unknown_line_is_reported_trimmed() {
    assert_eq!(
        parse_line("  hello world  "),
        ParsedLine::Unknown("hello world".into())
    );
}

#[test]
fn rewrite_uses_first_word_as_class() {
    assert_eq!(
        rewrite_dotted("City.show(42)"),
        Some((Command::Show, "City 42".to_string()))
    );
    assert_eq!(rewrite_dotted("x City.show(42)"), None);
}

// ── Argument helpers ─────────────────────────────────────────────

#[test]
fn normalize_keeps_empty_pieces() {
    assert_eq!(normalize_dotted_args(""), vec![""]);
    assert_eq!(normalize_dotted_args("a,,b"), vec!["a", "", "b"]);
}

#[test]
fn normalize_collapses_comma_space() {
    assert_eq!(normalize_dotted_args(r#""a", 'b',c"#), vec!["a", "b", "c"]);
}

#[test]
fn normalize_splits_commas_inside_quotes() {
    assert_eq!(normalize_dotted_args(r#""a, b""#), vec!["a", "b"]);
}

#[test]
fn tokenize_keeps_quoted_spans() {
    assert_eq!(
        tokenize(r#"User 1234 name "Bob Smith""#),
        vec!["User", "1234", "name", "Bob Smith"]
    );
}

#[test]
fn tokenize_strips_quotes_from_quoted_tokens_only() {
    assert_eq!(tokenize(r#""" plain"#), vec!["", "plain"]);
    assert_eq!(tokenize("it's"), vec!["it's"]);
}
