#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) kind: Kind,
    pub(crate) text: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    // Literals
    Text,   // "..." including the quotes
    Int,    // 42, 0x2a
    Float,  // 42f, 3;14f (suffix consumed, not stored)
    Double, // 3;14

    // Punctuation
    Comma,      // ,
    ScopeBegin, // {
    ScopeEnd,   // }
    ParenBegin, // (
    ParenEnd,   // )
    CommandEnd, // .

    // Operators
    RelOp,    // < > <= >= = == !=
    Or,       // ou
    And,      // e
    Assign,   // :=
    AddSub,   // + -
    MulDiv,   // * /
    Negation, // !

    // Keywords
    If,
    Else,
    Do,
    While,
    ProgramStart, // programa
    ProgramEnd,   // fimprog
    Print,        // escreva
    Read,         // leia
    Declare,

    Identifier,
    Error, // marker for unrecognized input
}

impl Kind {
    /// Human-readable name, used by diagnostics and the token listing.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Text => "Text",
            Kind::Int => "Integer",
            Kind::Float => "Float",
            Kind::Double => "Double",
            Kind::Comma => "Comma",
            Kind::RelOp => "Relational operator",
            Kind::Or => "Logic Or",
            Kind::And => "Logic And",
            Kind::Assign => "Assignment operator",
            Kind::AddSub => "Add or Sub operator",
            Kind::MulDiv => "Mult or Div operator",
            Kind::Negation => "Negation operator",
            Kind::Identifier => "Identifier",
            Kind::If => "If",
            Kind::Else => "Else",
            Kind::Error => "ERROR!",
            Kind::ScopeBegin => "Begin scope",
            Kind::ScopeEnd => "End scope",
            Kind::ParenBegin => "Parenthesis begin",
            Kind::ParenEnd => "Parenthesis end",
            Kind::CommandEnd => "End command",
            Kind::Do => "Do",
            Kind::While => "While",
            Kind::ProgramStart => "Start program",
            Kind::ProgramEnd => "End program",
            Kind::Print => "Print",
            Kind::Read => "Read input",
            Kind::Declare => "Declare",
        }
    }
}

impl Token {
    pub fn new(kind: Kind, text: String, line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            kind,
            text,
        }
    }

    pub fn is_any(&self, kinds: &[Kind]) -> bool {
        kinds.contains(&self.kind)
    }
}
