//! Declarative command-line parsing with subcommands, typed values, and
//! generated help.
//!
//! A grammar is registered fluently on a [`Parser`] scope: named options
//! ([`opt`]), positional arguments ([`pos`]), and subcommands ([`cmd`])
//! whose handlers configure fresh child scopes at parse time.
//! [`Parser::safe_parse`] walks the token list in a single pass and returns
//! a [`ParseOutcome`] without side effects; [`Parser::parse`] additionally
//! renders help and terminates the process on failure, so small programs
//! can call it and use the result directly.
//!
//! # Example
//!
//! ```
//! use argot::{Accepts, ParseOutcome, Parser, Value, cmd, opt, pos};
//!
//! let parser = Parser::new("server")
//!     .describe("A server cli.")
//!     .command(
//!         cmd("serve")
//!             .help_label("serve [port]")
//!             .describe("Start a server on the specified port.")
//!             .handler(|scope| {
//!                 scope.arg(
//!                     pos("port")
//!                         .describe("The port to listen on.")
//!                         .accepts(Accepts::Number)
//!                         .default(3000),
//!                 )
//!             }),
//!     )
//!     .arg(
//!         opt("-v, --verbose")
//!             .describe("Use verbose logging.")
//!             .accepts(Accepts::Bool)
//!             .default(false),
//!     );
//!
//! let argv = vec!["serve".to_string(), "8080".to_string()];
//! let ParseOutcome::Success(ctx) = parser.safe_parse(&argv) else {
//!     panic!("parse failed");
//! };
//! assert_eq!(ctx.command(), Some("serve"));
//! assert_eq!(ctx.get("port"), Some(&Value::Int(8080)));
//! ```
//!
//! Boolean options are switches: the flag alone means `true`, and an
//! explicit value token after it is never consumed. `--verbose false`
//! binds `false` to the next positional (or errors), not to `--verbose`.

mod defs;
mod error;
mod help;
mod outcome;
mod parser;
mod value;

pub use defs::{ArgBuilder, ArgDef, ArgKind, CommandBuilder, CommandDef, cmd, opt, pos};
pub use error::{GrammarError, ParseError};
pub use help::{ColorFn, Colors, HelpRenderer};
pub use outcome::{ParseContext, ParseOutcome};
pub use parser::Parser;
pub use value::{Accepts, Value};
