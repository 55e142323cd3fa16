use indexmap::IndexMap;

use crate::error::ParseError;
use crate::help::HelpRenderer;
use crate::value::Value;

/// What a parse produced.
///
/// `Exit` carries fully rendered output from the built-in `help` command;
/// nothing below [`Parser::parse`](crate::Parser::parse) prints or
/// terminates the process.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Success(ParseContext),
    Failure(ParseError),
    Exit { code: i32, output: String },
}

/// A successful parse.
#[derive(Debug, Clone)]
pub struct ParseContext {
    pub(crate) command: Option<String>,
    pub(crate) values: IndexMap<String, Value>,
    pub(crate) help: HelpRenderer,
}

impl ParseContext {
    /// Name of the matched subcommand, if the input selected one.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// All parsed values, keyed by canonical name.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// Value bound under a canonical name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Help for the scope that produced this result.
    pub fn help(&self) -> &HelpRenderer {
        &self.help
    }
}
