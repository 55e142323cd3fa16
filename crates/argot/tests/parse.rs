use argot::{Accepts, ParseContext, ParseError, ParseOutcome, Parser, Value, cmd, opt, pos};

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn expect_success(outcome: ParseOutcome) -> ParseContext {
    match outcome {
        ParseOutcome::Success(ctx) => ctx,
        other => panic!("expected success, got: {other:?}"),
    }
}

fn expect_failure(outcome: ParseOutcome) -> ParseError {
    match outcome {
        ParseOutcome::Failure(err) => err,
        other => panic!("expected failure, got: {other:?}"),
    }
}

fn expect_exit(outcome: ParseOutcome) -> (i32, String) {
    match outcome {
        ParseOutcome::Exit { code, output } => (code, output),
        other => panic!("expected exit, got: {other:?}"),
    }
}

#[test]
fn missing_required_args_report_their_display_name() {
    let parser = Parser::new("tool")
        .arg(opt("-n, --name").required(true))
        .arg(pos("file").required(true));

    let err = expect_failure(parser.safe_parse(&argv(&[])));
    assert_eq!(err.to_string(), "option '--name' is required");

    let err = expect_failure(parser.safe_parse(&argv(&["-n", "x"])));
    assert_eq!(err.to_string(), "argument 'file' is required");
}

#[test]
fn omitted_optionals_take_their_declared_defaults() {
    let parser = Parser::new("tool")
        .arg(opt("-n, --name").default("World"))
        .arg(opt("-c, --count").accepts(Accepts::Number).default(2))
        .arg(pos("file"));

    let ctx = expect_success(parser.safe_parse(&argv(&[])));
    assert_eq!(ctx.get("name"), Some(&Value::Str("World".to_string())));
    assert_eq!(ctx.get("count"), Some(&Value::Int(2)));
    // No declared default means null, not absent.
    assert_eq!(ctx.get("file"), Some(&Value::Null));
}

#[test]
fn defaults_fill_options_then_positionals_in_registration_order() {
    let parser = Parser::new("tool")
        .arg(opt("-a").default(1))
        .arg(opt("-b").accepts(Accepts::Number).default(2))
        .arg(pos("c").default(3));

    let ctx = expect_success(parser.safe_parse(&argv(&["-b", "9"])));
    let keys: Vec<&str> = ctx.values().keys().map(String::as_str).collect();
    assert_eq!(keys, ["b", "a", "c"]);
    assert_eq!(ctx.get("b"), Some(&Value::Int(9)));
}

#[test]
fn multiple_option_accumulates_values_in_order() {
    let parser = Parser::new("tool").arg(opt("-i, --include").multiple(true));
    let ctx = expect_success(parser.safe_parse(&argv(&[
        "-i", "a", "--include", "b", "-i", "c",
    ])));
    assert_eq!(
        ctx.get("include"),
        Some(&Value::List(vec![
            Value::Str("a".to_string()),
            Value::Str("b".to_string()),
            Value::Str("c".to_string()),
        ]))
    );
}

#[test]
fn multiple_positional_absorbs_interleaved_tokens() {
    let parser = Parser::new("tool")
        .arg(opt("-v").accepts(Accepts::Bool).default(false))
        .arg(pos("files").required(true).multiple(true));

    let ctx = expect_success(parser.safe_parse(&argv(&["x", "-v", "y", "z"])));
    assert_eq!(ctx.get("v"), Some(&Value::Bool(true)));
    assert_eq!(
        ctx.get("files"),
        Some(&Value::List(vec![
            Value::Str("x".to_string()),
            Value::Str("y".to_string()),
            Value::Str("z".to_string()),
        ]))
    );
}

#[test]
fn verbose_name_scenario() {
    let parser = Parser::new("greet")
        .arg(pos("name").required(true))
        .arg(opt("-v, --verbose").accepts(Accepts::Bool).default(false));

    let ctx = expect_success(parser.safe_parse(&argv(&["--verbose", "Alice"])));
    assert_eq!(ctx.get("verbose"), Some(&Value::Bool(true)));
    assert_eq!(ctx.get("name"), Some(&Value::Str("Alice".to_string())));

    let ctx = expect_success(parser.safe_parse(&argv(&["Alice"])));
    assert_eq!(ctx.get("verbose"), Some(&Value::Bool(false)));
    assert_eq!(ctx.get("name"), Some(&Value::Str("Alice".to_string())));

    let err = expect_failure(parser.safe_parse(&argv(&[])));
    assert_eq!(err.to_string(), "argument 'name' is required");
}

#[test]
fn boolean_options_never_consume_a_value_token() {
    // The flag itself always means true; an explicit trailing "false" binds
    // to the next positional instead.
    let parser = Parser::new("tool")
        .arg(opt("-v, --verbose").accepts(Accepts::Bool).default(false))
        .arg(pos("word"));

    let ctx = expect_success(parser.safe_parse(&argv(&["--verbose", "false"])));
    assert_eq!(ctx.get("verbose"), Some(&Value::Bool(true)));
    assert_eq!(ctx.get("word"), Some(&Value::Str("false".to_string())));
}

#[test]
fn value_options_consume_the_next_token_even_if_dashed() {
    let parser = Parser::new("tool").arg(opt("-n, --name"));
    let ctx = expect_success(parser.safe_parse(&argv(&["--name", "--bob"])));
    assert_eq!(ctx.get("name"), Some(&Value::Str("--bob".to_string())));
}

#[test]
fn trailing_value_option_expects_a_value() {
    let parser = Parser::new("tool").arg(opt("-n, --name"));
    let err = expect_failure(parser.safe_parse(&argv(&["-n"])));
    assert_eq!(err.to_string(), "option '-n' expects a value");
}

#[test]
fn option_aliases_beat_positional_slots() {
    let parser = Parser::new("tool")
        .arg(opt("-x").accepts(Accepts::Bool).default(false))
        .arg(pos("word"));

    let ctx = expect_success(parser.safe_parse(&argv(&["-x"])));
    assert_eq!(ctx.get("x"), Some(&Value::Bool(true)));
    assert_eq!(ctx.get("word"), Some(&Value::Null));
}

#[test]
fn leftover_tokens_split_by_dash_prefix() {
    let parser = Parser::new("tool").arg(pos("only"));

    let err = expect_failure(parser.safe_parse(&argv(&["a", "-b"])));
    assert_eq!(err.to_string(), "unrecognized option '-b'");

    let err = expect_failure(parser.safe_parse(&argv(&["a", "b"])));
    assert_eq!(err.to_string(), "unexpected argument 'b'");
}

#[test]
fn the_first_error_wins() {
    let parser = Parser::new("tool").arg(opt("-n, --name").required(true));
    // The unknown token is reported; the missing required option never is.
    let err = expect_failure(parser.safe_parse(&argv(&["--bogus", "-n"])));
    assert_eq!(err.to_string(), "unrecognized option '--bogus'");
}

#[test]
fn coercion_errors_name_the_alias_the_user_typed() {
    let parser = Parser::new("tool").arg(opt("-p, --port").accepts(Accepts::Number));

    let err = expect_failure(parser.safe_parse(&argv(&["-p", "abc"])));
    assert_eq!(err.to_string(), "option '-p' expected a number");

    let err = expect_failure(parser.safe_parse(&argv(&["--port", "007"])));
    assert_eq!(err.to_string(), "option '--port' expected a number");

    let parser = Parser::new("tool").arg(pos("port").accepts(Accepts::Number));
    let err = expect_failure(parser.safe_parse(&argv(&["-5"])));
    assert_eq!(err.to_string(), "argument 'port' expected a number");
}

#[test]
fn enum_errors_list_the_allowed_members() {
    let parser = Parser::new("tool").arg(opt("-t, --template").accepts(Accepts::one_of(["a", "b"])));
    let err = expect_failure(parser.safe_parse(&argv(&["-t", "c"])));
    assert_eq!(err.to_string(), "option '-t' expected one of 'a', 'b'");
}

#[test]
fn subcommand_routes_and_stamps_the_command() {
    let parser = Parser::new("server")
        .command(cmd("serve").handler(|scope| {
            scope.arg(pos("port").accepts(Accepts::Number).default(3000))
        }))
        .arg(opt("-v, --verbose").accepts(Accepts::Bool).default(false));

    let ctx = expect_success(parser.safe_parse(&argv(&["serve", "8080"])));
    assert_eq!(ctx.command(), Some("serve"));
    assert_eq!(ctx.get("port"), Some(&Value::Int(8080)));
    // The sub-scope's grammar replaces the root's entirely.
    assert_eq!(ctx.get("verbose"), None);

    let ctx = expect_success(parser.safe_parse(&argv(&["serve"])));
    assert_eq!(ctx.get("port"), Some(&Value::Int(3000)));
}

#[test]
fn sub_scope_failures_propagate_verbatim() {
    let parser = Parser::new("server").command(
        cmd("serve").handler(|scope| scope.arg(pos("port").accepts(Accepts::Number))),
    );
    let err = expect_failure(parser.safe_parse(&argv(&["serve", "abc"])));
    assert_eq!(err.to_string(), "argument 'port' expected a number");
}

#[test]
fn exits_propagate_through_nested_dispatch() {
    // A sub-scope may declare its own help command; the exit it produces
    // surfaces through the enclosing dispatch untouched.
    let parser = Parser::new("outer").command(cmd("sub").handler(|scope| {
        scope.command(
            cmd("help")
                .describe("Shows a help menu.")
                .handler(|scope| scope.arg(pos("command"))),
        )
    }));

    let (code, output) = expect_exit(parser.safe_parse(&argv(&["sub", "help"])));
    assert_eq!(code, 0);
    assert_eq!(output, "sub\n\nCommands\n  help  Shows a help menu.\n\n");
}

#[test]
fn marker_commands_short_circuit() {
    let parser = Parser::new("tool").command(cmd("version").describe("Print the version."));
    let ctx = expect_success(parser.safe_parse(&argv(&["version", "trailing", "--junk"])));
    assert_eq!(ctx.command(), Some("version"));
    assert!(ctx.values().is_empty());
    // The marker carries the outer scope's help.
    assert!(ctx.help().render(None).contains("tool"));
}

#[test]
fn command_required_rejects_inputs_without_one() {
    let parser = Parser::new("tool")
        .command_required(true)
        .command(cmd("run").handler(|scope| scope));

    let err = expect_failure(parser.safe_parse(&argv(&[])));
    assert_eq!(err.to_string(), "a command is required");

    let err = expect_failure(parser.safe_parse(&argv(&["nope"])));
    assert_eq!(err.to_string(), "a command is required");
}

#[test]
fn nested_subcommands_dispatch_recursively() {
    let parser = Parser::new("git").command(cmd("remote").handler(|scope| {
        scope.command(cmd("add").handler(|scope| scope.arg(pos("name").required(true))))
    }));

    let ctx = expect_success(parser.safe_parse(&argv(&["remote", "add", "origin"])));
    // Each level stamps its own name on the way out; the outermost wins.
    assert_eq!(ctx.command(), Some("remote"));
    assert_eq!(ctx.get("name"), Some(&Value::Str("origin".to_string())));
}

#[test]
fn commands_beat_positionals_for_the_first_token() {
    let parser = Parser::new("tool").arg(pos("word"));
    let (code, _) = expect_exit(parser.safe_parse(&argv(&["help"])));
    assert_eq!(code, 0);
}

#[test]
fn help_with_no_target_renders_own_help() {
    let parser = Parser::new("tool")
        .describe("A tool.")
        .command(cmd("serve").handler(|scope| scope));

    let (code, output) = expect_exit(parser.safe_parse(&argv(&["help"])));
    assert_eq!(code, 0);
    assert_eq!(output, parser.render_help(None));
    assert!(output.contains("help [command]"));
}

#[test]
fn help_with_unknown_target_exits_nonzero() {
    let parser = Parser::new("tool");
    let (code, output) = expect_exit(parser.safe_parse(&argv(&["help", "nope"])));
    assert_eq!(code, 1);
    assert_eq!(
        output,
        parser.render_help(Some("couldn't find command 'nope'"))
    );
}

#[test]
fn help_with_marker_target_cannot_help() {
    let parser = Parser::new("tool").command(cmd("docs").describe("Open the docs."));
    let (code, output) = expect_exit(parser.safe_parse(&argv(&["help", "docs"])));
    assert_eq!(code, 1);
    assert_eq!(output, parser.render_help(Some("can't help with 'docs'")));
}

#[test]
fn help_with_handler_target_renders_the_sub_help() {
    let parser = Parser::new("server").command(
        cmd("serve")
            .help_label("serve [port]")
            .describe("Start a server.")
            .handler(|scope| scope.arg(pos("port").describe("The port to listen on."))),
    );

    let (code, output) = expect_exit(parser.safe_parse(&argv(&["help", "serve"])));
    assert_eq!(code, 0);
    assert_eq!(output, "serve\n\nOptions\n  port  The port to listen on.\n");
}

#[test]
fn help_parse_failures_propagate_as_failures() {
    let parser = Parser::new("tool");
    let err = expect_failure(parser.safe_parse(&argv(&["help", "a", "b"])));
    assert_eq!(err.to_string(), "unexpected argument 'b'");
}

#[test]
fn success_carries_a_help_renderer() {
    let parser = Parser::new("tool").describe("A tool.").arg(opt("-n, --name"));
    let ctx = expect_success(parser.safe_parse(&argv(&["-n", "x"])));

    let text = ctx.help().render(Some("boom"));
    assert!(text.starts_with("Error: boom\n\n"));
    assert!(text.contains("tool [...commands] [...arguments]"));
    assert!(text.contains("-n, --name"));
}

#[test]
fn repeated_parses_of_one_grammar_are_independent() {
    let parser = Parser::new("tool").command(
        cmd("add").handler(|scope| scope.arg(pos("files").required(true).multiple(true))),
    );

    let ctx = expect_success(parser.safe_parse(&argv(&["add", "a", "b"])));
    assert_eq!(
        ctx.get("files"),
        Some(&Value::List(vec![
            Value::Str("a".to_string()),
            Value::Str("b".to_string()),
        ]))
    );

    // Nothing accumulates across calls: handlers get a fresh scope each time.
    let ctx = expect_success(parser.safe_parse(&argv(&["add", "c"])));
    assert_eq!(
        ctx.get("files"),
        Some(&Value::List(vec![Value::Str("c".to_string())]))
    );
}
