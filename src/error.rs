use crate::token::Token;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CompilerError {
    IO(std::io::Error),
    Lexical(LexicalError),
    Parsing(ParsingError),
    Semantic(SemanticError),
    UnusedIdentifier(UnusedIdentifierError),
    Toolchain(ToolchainError),
}

impl Error for CompilerError {}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompilerError::IO(err) => write!(f, "IO error: {}", err),
            CompilerError::Lexical(err) => write!(f, "{}", err),
            CompilerError::Parsing(err) => write!(f, "{}", err),
            CompilerError::Semantic(err) => write!(f, "{}", err),
            CompilerError::UnusedIdentifier(err) => write!(f, "{}", err),
            CompilerError::Toolchain(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IO(err)
    }
}

impl From<LexicalError> for CompilerError {
    fn from(err: LexicalError) -> Self {
        CompilerError::Lexical(err)
    }
}

impl From<ParsingError> for CompilerError {
    fn from(err: ParsingError) -> Self {
        CompilerError::Parsing(err)
    }
}

impl From<SemanticError> for CompilerError {
    fn from(err: SemanticError) -> Self {
        CompilerError::Semantic(err)
    }
}

impl From<UnusedIdentifierError> for CompilerError {
    fn from(err: UnusedIdentifierError) -> Self {
        CompilerError::UnusedIdentifier(err)
    }
}

impl From<ToolchainError> for CompilerError {
    fn from(err: ToolchainError) -> Self {
        CompilerError::Toolchain(err)
    }
}

/// An unrecognized character sequence in the source text.
#[derive(Debug)]
pub struct LexicalError {
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Error for LexicalError {}

impl LexicalError {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Lexical error! Unrecognized token at line {} column {}.",
            self.line, self.column
        )
    }
}

/// The token stream did not match a grammar production.
///
/// Carries the offending token and what was expected in its place, either
/// a token kind name or a production name such as "Command".
#[derive(Debug)]
pub struct ParsingError {
    pub(crate) token: Token,
    pub(crate) expected: &'static str,
}

impl Error for ParsingError {}

impl ParsingError {
    pub fn new(token: &Token, expected: &'static str) -> Self {
        Self {
            token: token.clone(),
            expected,
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Parsing error! Line {} column {}. Expected {}, got {}.",
            self.token.line,
            self.token.column,
            self.expected,
            self.token.kind.name()
        )
    }
}

/// A token violates a naming or use rule.
#[derive(Debug)]
pub struct SemanticError {
    pub(crate) token: Token,
    pub(crate) reason: &'static str,
}

impl Error for SemanticError {}

impl SemanticError {
    pub fn new(token: &Token, reason: &'static str) -> Self {
        Self {
            token: token.clone(),
            reason,
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Semantic error! Line {} column {}. {}",
            self.token.line, self.token.column, self.reason
        )
    }
}

/// A declared identifier that is never read.
#[derive(Debug)]
pub struct UnusedIdentifierError {
    pub(crate) name: String,
}

impl Error for UnusedIdentifierError {}

impl UnusedIdentifierError {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl fmt::Display for UnusedIdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Semantic error! Unused variable: {}", self.name)
    }
}

/// An external compiler or interpreter invocation failed.
#[derive(Debug)]
pub struct ToolchainError {
    pub(crate) command: String,
    pub(crate) message: String,
}

impl Error for ToolchainError {}

impl ToolchainError {
    pub fn new(command: &str, message: String) -> Self {
        Self {
            command: command.to_string(),
            message,
        }
    }
}

impl fmt::Display for ToolchainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Toolchain error running '{}': {}", self.command, self.message)
    }
}
