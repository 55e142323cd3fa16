use std::fmt;

use crate::parser::Parser;
use crate::value::{Accepts, Value};

/// Whether a definition is matched by one of its names or by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Option,
    Positional,
}

impl fmt::Display for ArgKind {
    // The words used in user-facing messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option => f.write_str("option"),
            Self::Positional => f.write_str("argument"),
        }
    }
}

/// One declared option or positional.
#[derive(Debug, Clone)]
pub struct ArgDef {
    names: Vec<String>,
    kind: ArgKind,
    required: bool,
    multiple: bool,
    accepts: Accepts,
    default: Value,
    describe: String,
}

impl ArgDef {
    /// All names this definition answers to, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn accepts(&self) -> &Accepts {
        &self.accepts
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn describe(&self) -> &str {
        &self.describe
    }

    /// Key in the parsed values map: the last declared name, de-dashed.
    pub fn canonical(&self) -> &str {
        self.names
            .last()
            .map(|name| name.trim_start_matches('-'))
            .unwrap_or("")
    }

    /// Name shown in "is required" messages: the last declared name as written.
    pub(crate) fn display_name(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or("")
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        self.names.iter().any(|name| name == token)
    }
}

/// Declare an option by its comma-separated aliases, e.g. `opt("-n, --name")`.
pub fn opt(names: impl Into<String>) -> ArgBuilder {
    ArgBuilder::new(names, ArgKind::Option)
}

/// Declare a positional argument by its name, e.g. `pos("file")`.
pub fn pos(name: impl Into<String>) -> ArgBuilder {
    ArgBuilder::new(name, ArgKind::Positional)
}

/// Builder for [`ArgDef`], registered with [`Parser::arg`].
pub struct ArgBuilder {
    names: String,
    kind: ArgKind,
    required: bool,
    multiple: bool,
    accepts: Accepts,
    default: Value,
    describe: String,
}

impl ArgBuilder {
    fn new(names: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            names: names.into(),
            kind,
            required: false,
            multiple: false,
            accepts: Accepts::Str,
            default: Value::Null,
            describe: String::new(),
        }
    }

    pub fn describe(mut self, describe: impl Into<String>) -> Self {
        self.describe = describe.into();
        self
    }

    /// Fail the parse when the argument is never supplied. Off by default,
    /// for positionals too.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Accumulate every bound value into a list under the canonical name.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn accepts(mut self, accepts: Accepts) -> Self {
        self.accepts = accepts;
        self
    }

    /// Value filled in when the argument is never supplied. Stored as given;
    /// defaults do not pass through coercion.
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    pub(crate) fn build(self) -> ArgDef {
        let names = match self.kind {
            // "-n, --name" declares two aliases for one option.
            ArgKind::Option => {
                let cleaned: String = self.names.split_whitespace().collect();
                cleaned.split(',').map(str::to_string).collect()
            }
            ArgKind::Positional => vec![self.names],
        };
        ArgDef {
            names,
            kind: self.kind,
            required: self.required,
            multiple: self.multiple,
            accepts: self.accepts,
            default: self.default,
            describe: self.describe,
        }
    }
}

pub(crate) type Handler = Box<dyn Fn(Parser) -> Parser + Send + Sync>;

/// One declared subcommand.
pub struct CommandDef {
    pub(crate) name: String,
    pub(crate) describe: String,
    pub(crate) help_label: Option<String>,
    pub(crate) handler: Option<Handler>,
}

impl CommandDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe(&self) -> &str {
        &self.describe
    }

    /// Display string in the help listing; falls back to the name.
    pub fn help_label(&self) -> &str {
        self.help_label.as_deref().unwrap_or(&self.name)
    }

    /// Commands without a handler are bare markers with no grammar.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for CommandDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDef")
            .field("name", &self.name)
            .field("describe", &self.describe)
            .field("help_label", &self.help_label)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Declare a subcommand, e.g. `cmd("serve").handler(|scope| ...)`.
pub fn cmd(name: impl Into<String>) -> CommandBuilder {
    CommandBuilder::new(name)
}

/// Builder for [`CommandDef`], registered with [`Parser::command`].
pub struct CommandBuilder {
    name: String,
    describe: String,
    help_label: Option<String>,
    handler: Option<Handler>,
}

impl CommandBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            describe: String::new(),
            help_label: None,
            handler: None,
        }
    }

    pub fn describe(mut self, describe: impl Into<String>) -> Self {
        self.describe = describe.into();
        self
    }

    /// Override the label shown in the help listing (e.g. `"serve [port]"`).
    pub fn help_label(mut self, label: impl Into<String>) -> Self {
        self.help_label = Some(label.into());
        self
    }

    /// Attach the function that registers this command's grammar.
    ///
    /// The handler runs once per parse, always on a fresh child scope.
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Parser) -> Parser + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub(crate) fn build(self) -> CommandDef {
        CommandDef {
            name: self.name,
            describe: self.describe,
            help_label: self.help_label,
            handler: self.handler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opt_splits_comma_separated_aliases() {
        let def = opt("-n, --name").build();
        assert_eq!(def.names(), ["-n", "--name"]);
        assert_eq!(def.kind(), ArgKind::Option);
        assert_eq!(def.canonical(), "name");
        assert_eq!(def.display_name(), "--name");
    }

    #[test]
    fn alias_splitting_survives_loose_spacing() {
        let def = opt(" -o ,  --out ").build();
        assert_eq!(def.names(), ["-o", "--out"]);
    }

    #[test]
    fn positional_keeps_a_single_name() {
        let def = pos("file").build();
        assert_eq!(def.names(), ["file"]);
        assert_eq!(def.kind(), ArgKind::Positional);
        assert_eq!(def.canonical(), "file");
    }

    #[test]
    fn builder_defaults_to_optional_string_null() {
        let def = pos("file").build();
        assert!(!def.required());
        assert!(!def.multiple());
        assert_eq!(def.accepts(), &Accepts::Str);
        assert_eq!(def.default(), &Value::Null);
        assert_eq!(def.describe(), "");
    }

    #[test]
    fn command_label_falls_back_to_name() {
        let def = cmd("serve").build();
        assert_eq!(def.help_label(), "serve");
        assert!(!def.has_handler());

        let def = cmd("serve").help_label("serve [port]").build();
        assert_eq!(def.help_label(), "serve [port]");
    }
}
