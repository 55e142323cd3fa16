use std::process;

use indexmap::IndexMap;

use crate::defs::{ArgBuilder, ArgDef, ArgKind, CommandBuilder, CommandDef, cmd, pos};
use crate::error::{GrammarError, ParseError};
use crate::help::{Colors, HelpRenderer};
use crate::outcome::{ParseContext, ParseOutcome};
use crate::value::{Accepts, Value, coerce};

const DEFAULT_SUFFIX: &str = " [...commands] [...arguments]";

/// One parser scope: the root program or one subcommand's grammar.
///
/// A scope is configured fluently, then parsed with [`Parser::safe_parse`]
/// (pure, always returns) or [`Parser::parse`] (renders help and terminates
/// the process on anything but success).
#[derive(Debug)]
pub struct Parser {
    name: String,
    suffix: String,
    describe: String,
    colors: Colors,
    command_required: bool,
    commands: Vec<CommandDef>,
    options: Vec<ArgDef>,
    positionals: Vec<ArgDef>,
    is_sub: bool,
    seen_optional_positional: bool,
    seen_multiple_positional: bool,
}

impl Parser {
    /// Create a root scope. Root scopes own an implicit `help` command from
    /// the start, so it lists first in help output and wins name matching.
    pub fn new(name: impl Into<String>) -> Self {
        let mut parser = Self::scope(name.into(), DEFAULT_SUFFIX.to_string(), Colors::new(), false);
        parser.commands.push(builtin_help());
        parser
    }

    /// Create the child scope handed to a command handler.
    pub(crate) fn child(name: &str, colors: Colors) -> Self {
        Self::scope(name.to_string(), String::new(), colors, true)
    }

    fn scope(name: String, suffix: String, colors: Colors, is_sub: bool) -> Self {
        Self {
            name,
            suffix,
            describe: String::new(),
            colors,
            command_required: false,
            commands: Vec::new(),
            options: Vec::new(),
            positionals: Vec::new(),
            is_sub,
            seen_optional_positional: false,
            seen_multiple_positional: false,
        }
    }

    /// Replace the usage suffix shown after the program name.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Free-text description shown under the usage line.
    pub fn describe(mut self, describe: impl Into<String>) -> Self {
        self.describe = describe.into();
        self
    }

    /// Coloring hooks for help output.
    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Require the input to select a command whenever any are declared.
    /// Off by default.
    pub fn command_required(mut self, required: bool) -> Self {
        self.command_required = required;
        self
    }

    /// Whether this scope belongs to a subcommand.
    pub fn is_sub_scope(&self) -> bool {
        self.is_sub
    }

    /// Register an option or positional.
    ///
    /// # Panics
    ///
    /// Panics with a [`GrammarError`] message when a positional declaration
    /// violates ordering: a required positional after an optional one, or
    /// any positional after a multi-valued one.
    pub fn arg(mut self, arg: ArgBuilder) -> Self {
        let def = arg.build();
        match def.kind() {
            ArgKind::Option => self.options.push(def),
            ArgKind::Positional => {
                if let Err(err) = self.positional_ordering(&def) {
                    panic!("{err}");
                }
                self.seen_optional_positional |= !def.required();
                self.seen_multiple_positional |= def.multiple();
                self.positionals.push(def);
            }
        }
        self
    }

    fn positional_ordering(&self, def: &ArgDef) -> Result<(), GrammarError> {
        if self.seen_multiple_positional {
            return Err(GrammarError::PositionalAfterMultiple(
                def.canonical().to_string(),
            ));
        }
        if def.required() && self.seen_optional_positional {
            return Err(GrammarError::RequiredAfterOptional(
                def.canonical().to_string(),
            ));
        }
        Ok(())
    }

    /// Register a subcommand.
    ///
    /// Command names are not checked for uniqueness; the first registered
    /// match wins at parse time.
    pub fn command(mut self, command: CommandBuilder) -> Self {
        self.commands.push(command.build());
        self
    }

    /// Parse without side effects.
    ///
    /// The first token is checked against the command list before anything
    /// else; a match hands the remaining tokens to that command's child
    /// scope. Otherwise the whole token list is matched against this scope's
    /// options and positionals.
    pub fn safe_parse(&self, argv: &[String]) -> ParseOutcome {
        if let Some(first) = argv.first() {
            if let Some(command) = self.commands.iter().find(|c| c.name == *first) {
                return self.dispatch(command, &argv[1..]);
            }
        }
        if !self.commands.is_empty() && self.command_required {
            return ParseOutcome::Failure(ParseError::CommandRequired);
        }
        match self.collect(argv) {
            Ok(values) => ParseOutcome::Success(ParseContext {
                command: None,
                values,
                help: self.help_renderer(),
            }),
            Err(err) => ParseOutcome::Failure(err),
        }
    }

    /// Parse, printing help and terminating the process on anything but
    /// success.
    ///
    /// Failures render as help annotated with `Error: <message>` on stderr,
    /// then exit 1. Help-command exits print their output (stdout when
    /// exiting 0, stderr otherwise) and exit with their code.
    pub fn parse(&self, argv: &[String]) -> ParseContext {
        match self.safe_parse(argv) {
            ParseOutcome::Success(ctx) => ctx,
            ParseOutcome::Failure(err) => {
                eprint!("{}", self.render_help(Some(&err.to_string())));
                process::exit(1);
            }
            ParseOutcome::Exit { code, output } => {
                if code == 0 {
                    print!("{output}");
                } else {
                    eprint!("{output}");
                }
                process::exit(code);
            }
        }
    }

    /// Snapshot this scope's help screen.
    pub fn help_renderer(&self) -> HelpRenderer {
        let command_rows = self
            .commands
            .iter()
            .map(|c| (c.help_label().to_string(), c.describe().to_string()))
            .collect();
        let argument_rows = self
            .options
            .iter()
            .chain(self.positionals.iter())
            .map(|def| (def.names().join(", "), def.describe().to_string()))
            .collect();
        HelpRenderer::new(
            format!("{}{}", self.name, self.suffix),
            self.describe.clone(),
            self.colors,
            command_rows,
            argument_rows,
        )
    }

    /// Render this scope's help, optionally annotated with an error.
    pub fn render_help(&self, error: Option<&str>) -> String {
        self.help_renderer().render(error)
    }

    fn dispatch(&self, command: &CommandDef, rest: &[String]) -> ParseOutcome {
        tracing::debug!("dispatching command '{}'", command.name);
        let Some(handler) = &command.handler else {
            // Marker command: no grammar of its own, trailing tokens ignored.
            return ParseOutcome::Success(ParseContext {
                command: Some(command.name.clone()),
                values: IndexMap::new(),
                help: self.help_renderer(),
            });
        };

        let sub = handler(Parser::child(&command.name, self.colors));
        let outcome = sub.safe_parse(rest);

        if command.name == "help" {
            if let ParseOutcome::Success(ctx) = &outcome {
                return self.help_lookup(ctx);
            }
        }

        match outcome {
            ParseOutcome::Success(mut ctx) => {
                ctx.command = Some(command.name.clone());
                ParseOutcome::Success(ctx)
            }
            other => other,
        }
    }

    /// Resolve the built-in help command against this scope's command list.
    fn help_lookup(&self, ctx: &ParseContext) -> ParseOutcome {
        let target = match ctx.get("command") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.to_string()),
        };
        let Some(name) = target else {
            return ParseOutcome::Exit {
                code: 0,
                output: self.render_help(None),
            };
        };

        tracing::debug!("rendering help for '{name}'");
        let Some(found) = self.commands.iter().find(|c| c.name == name) else {
            let message = format!("couldn't find command '{name}'");
            return ParseOutcome::Exit {
                code: 1,
                output: self.render_help(Some(&message)),
            };
        };
        let Some(handler) = &found.handler else {
            let message = format!("can't help with '{name}'");
            return ParseOutcome::Exit {
                code: 1,
                output: self.render_help(Some(&message)),
            };
        };

        // A throwaway child scope, built only to render its help.
        let sub = handler(Parser::child(&found.name, self.colors));
        ParseOutcome::Exit {
            code: 0,
            output: sub.render_help(None),
        }
    }

    fn collect(&self, argv: &[String]) -> Result<IndexMap<String, Value>, ParseError> {
        let mut values: IndexMap<String, Value> = IndexMap::new();
        let mut pos_index = 0usize;
        let mut i = 0usize;

        while i < argv.len() {
            let token = argv[i].as_str();

            // Options match by exact alias; positionals purely by position.
            let (def, display) = match self.options.iter().find(|o| o.matches(token)) {
                Some(option) => (option, token),
                None => {
                    let Some(positional) = self.positionals.get(pos_index) else {
                        return Err(if token.starts_with('-') {
                            ParseError::UnrecognizedOption(token.to_string())
                        } else {
                            ParseError::UnexpectedArgument(token.to_string())
                        });
                    };
                    // A multiple positional keeps its slot and absorbs later
                    // tokens too.
                    if !positional.multiple() {
                        pos_index += 1;
                    }
                    (positional, positional.canonical())
                }
            };

            let raw = match def.kind() {
                // Boolean options are switches: presence means true, and they
                // never consume a following token.
                ArgKind::Option if matches!(def.accepts(), Accepts::Bool) => "true",
                ArgKind::Option => {
                    i += 1;
                    match argv.get(i) {
                        Some(value) => value.as_str(),
                        None => return Err(ParseError::MissingValue(display.to_string())),
                    }
                }
                ArgKind::Positional => token,
            };

            let value = coerce(raw, def.accepts(), def.kind(), display)?;
            store(&mut values, def, value);
            i += 1;
        }

        // Fill declared-but-unseen args: options first, then positionals.
        for def in self.options.iter().chain(self.positionals.iter()) {
            if values.contains_key(def.canonical()) {
                continue;
            }
            if def.required() {
                return Err(ParseError::MissingRequired {
                    kind: def.kind(),
                    name: def.display_name().to_string(),
                });
            }
            values.insert(def.canonical().to_string(), def.default().clone());
        }

        Ok(values)
    }
}

fn store(values: &mut IndexMap<String, Value>, def: &ArgDef, value: Value) {
    let canonical = def.canonical().to_string();
    if def.multiple() {
        match values.entry(canonical).or_insert_with(|| Value::List(Vec::new())) {
            Value::List(items) => items.push(value),
            slot => *slot = Value::List(vec![value]),
        }
    } else {
        values.insert(canonical, value);
    }
}

fn builtin_help() -> CommandDef {
    cmd("help")
        .help_label("help [command]")
        .describe("Shows a help menu.")
        .handler(|scope| scope.arg(pos("command").describe("The command to help with.")))
        .build()
}
