use thiserror::Error;

use crate::defs::ArgKind;

/// A user-input parse failure.
///
/// Every variant renders as the single message shown to the user;
/// [`Parser::parse`](crate::Parser::parse) prefixes it with `Error: ` above
/// the help text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The scope declares commands, requires one, and the input named none.
    #[error("a command is required")]
    CommandRequired,

    /// A dash-prefixed token matched no declared option alias.
    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// A bare token arrived with no positional slot left to fill.
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// A value failed the number grammar.
    #[error("{kind} '{name}' expected a number")]
    InvalidNumber { kind: ArgKind, name: String },

    /// A value matched neither the truthy nor the falsy set.
    #[error("{kind} '{name}' expected 'true' or 'false'")]
    InvalidBoolean { kind: ArgKind, name: String },

    /// A value was not a member of the declared enumeration.
    #[error("{kind} '{name}' expected one of {}", quote_join(.allowed))]
    InvalidEnumValue {
        kind: ArgKind,
        name: String,
        allowed: Vec<String>,
    },

    /// A value-taking option was the final token.
    #[error("option '{0}' expects a value")]
    MissingValue(String),

    /// A required argument was never supplied.
    #[error("{kind} '{name}' is required")]
    MissingRequired { kind: ArgKind, name: String },
}

fn quote_join(members: &[String]) -> String {
    members
        .iter()
        .map(|member| format!("'{member}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A grammar definition mistake caught at registration time.
///
/// These are programmer errors, not user input: registration panics with the
/// rendered message the moment the violating declaration is made, so they
/// surface during program construction rather than at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("required positional '{0}' cannot follow an optional positional")]
    RequiredAfterOptional(String),

    #[error("positional '{0}' cannot follow a multi-valued positional")]
    PositionalAfterMultiple(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_message_quotes_and_joins_members() {
        let err = ParseError::InvalidEnumValue {
            kind: ArgKind::Option,
            name: "-t".to_string(),
            allowed: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "option '-t' expected one of 'a', 'b'");
    }

    #[test]
    fn kind_picks_the_user_facing_word() {
        let err = ParseError::MissingRequired {
            kind: ArgKind::Positional,
            name: "name".to_string(),
        };
        assert_eq!(err.to_string(), "argument 'name' is required");
    }
}
