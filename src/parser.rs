use crate::error::ParsingError;
use crate::token::{Kind, Token};

/// Grammar validation over the token sequence.
///
/// Every production takes a cursor position and returns either the position
/// one past the construct or a [`ParsingError`]. Cursors are plain values, so
/// a failed alternative never has to restore shared state: the caller simply
/// retries from the position it already holds. A failure is fatal only when
/// the caller has no remaining alternative.
///
/// No tree is built; the parser's only effect is accept or reject plus a
/// diagnostic naming the first unmet expectation.
pub struct Parser<'a> {
    tokens: &'a [Token],
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    pub fn parse(&self) -> Result<(), ParsingError> {
        self.parse_program(0).map(|_| ())
    }

    fn peek(&self, at: usize) -> Option<&Token> {
        self.tokens.get(at)
    }

    fn fail(&self, at: usize, expected: &'static str) -> ParsingError {
        match self.tokens.get(at) {
            Some(token) => ParsingError::new(token, expected),
            // Past the end of the sequence: report at a marker token placed
            // just after the last real one.
            None => {
                let (line, column) = match self.tokens.last() {
                    Some(last) => (last.line, last.column + last.text.chars().count()),
                    None => (1, 1),
                };
                ParsingError::new(&Token::new(Kind::Error, String::new(), line, column), expected)
            }
        }
    }

    fn expect(&self, at: usize, kind: Kind) -> Result<usize, ParsingError> {
        match self.tokens.get(at) {
            Some(token) if token.kind == kind => Ok(at + 1),
            _ => Err(self.fail(at, kind.name())),
        }
    }

    // Program -> programa Declare Cmd* fimprog '.'
    fn parse_program(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::ProgramStart)?;
        at = self.parse_declare(at)?;

        while !matches!(self.peek(at), Some(t) if t.kind == Kind::ProgramEnd) {
            at = self.parse_cmd(at)?;
        }

        self.expect(at + 1, Kind::CommandEnd)
    }

    // Declare -> declare id (',' id)* '.'
    fn parse_declare(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::Declare)?;
        at = self.expect(at, Kind::Identifier)?;

        loop {
            if matches!(self.peek(at), Some(t) if t.kind == Kind::CommandEnd) {
                return Ok(at + 1);
            }
            at = self.expect(at, Kind::Comma)?;
            at = self.expect(at, Kind::Identifier)?;
        }
    }

    // Cmd -> Cmdread | Cmdprint | Cmdexpr | Cmdif | Cmdwhile | Cmddo
    //
    // Alternatives are tried in this fixed order, each from the same saved
    // position; the first one that matches through to its end wins.
    fn parse_cmd(&self, at: usize) -> Result<usize, ParsingError> {
        self.parse_cmd_read(at)
            .or_else(|_| self.parse_cmd_print(at))
            .or_else(|_| self.parse_cmd_expr(at))
            .or_else(|_| self.parse_cmd_if(at))
            .or_else(|_| self.parse_cmd_while(at))
            .or_else(|_| self.parse_cmd_do(at))
            .map_err(|_| self.fail(at, "Command"))
    }

    /// Cmd repetition inside a block: keep attempting commands, and treat the
    /// first failure as the end of the repetition. The block's closing token
    /// is checked by the caller.
    fn parse_cmd_star(&self, at: usize) -> usize {
        let mut at = at;
        while let Ok(next) = self.parse_cmd(at) {
            at = next;
        }
        at
    }

    // Cmdread -> leia '(' id ')' '.'
    fn parse_cmd_read(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::Read)?;
        at = self.expect(at, Kind::ParenBegin)?;
        at = self.expect(at, Kind::Identifier)?;
        at = self.expect(at, Kind::ParenEnd)?;
        self.expect(at, Kind::CommandEnd)
    }

    // Cmdprint -> escreva '(' (id | text) ')' '.'
    fn parse_cmd_print(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::Print)?;
        at = self.expect(at, Kind::ParenBegin)?;

        match self.peek(at) {
            Some(t) if t.is_any(&[Kind::Identifier, Kind::Text]) => at += 1,
            _ => return Err(self.fail(at, "Identifier or Text")),
        }

        at = self.expect(at, Kind::ParenEnd)?;
        self.expect(at, Kind::CommandEnd)
    }

    // Cmdexpr -> id ':=' Expr '.'
    fn parse_cmd_expr(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::Identifier)?;
        at = self.expect(at, Kind::Assign)?;
        at = self.parse_expr(at)?;
        self.expect(at, Kind::CommandEnd)
    }

    // Cmdif -> if '(' Logicexpr ')' '{' Cmd* '}' (else '{' Cmd* '}')?
    fn parse_cmd_if(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::If)?;
        at = self.expect(at, Kind::ParenBegin)?;
        at = self.parse_logicexpr(at)?;
        at = self.expect(at, Kind::ParenEnd)?;
        at = self.expect(at, Kind::ScopeBegin)?;
        at = self.parse_cmd_star(at);
        at = self.expect(at, Kind::ScopeEnd)?;

        if !matches!(self.peek(at), Some(t) if t.kind == Kind::Else) {
            return Ok(at);
        }

        at = self.expect(at + 1, Kind::ScopeBegin)?;
        at = self.parse_cmd_star(at);
        self.expect(at, Kind::ScopeEnd)
    }

    // Cmdwhile -> while '(' Logicexpr ')' '{' Cmd* '}'
    fn parse_cmd_while(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::While)?;
        at = self.expect(at, Kind::ParenBegin)?;
        at = self.parse_logicexpr(at)?;
        at = self.expect(at, Kind::ParenEnd)?;
        at = self.expect(at, Kind::ScopeBegin)?;
        at = self.parse_cmd_star(at);
        self.expect(at, Kind::ScopeEnd)
    }

    // Cmddo -> do '{' Cmd* '}' while '(' Logicexpr ')' '.'
    fn parse_cmd_do(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.expect(at, Kind::Do)?;
        at = self.expect(at, Kind::ScopeBegin)?;
        at = self.parse_cmd_star(at);
        at = self.expect(at, Kind::ScopeEnd)?;
        at = self.expect(at, Kind::While)?;
        at = self.expect(at, Kind::ParenBegin)?;
        at = self.parse_logicexpr(at)?;
        at = self.expect(at, Kind::ParenEnd)?;
        self.expect(at, Kind::CommandEnd)
    }

    // Logicexpr -> Logicterm ((ou | e) Logicterm)*
    fn parse_logicexpr(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.parse_logicterm(at)?;
        while matches!(self.peek(at), Some(t) if t.is_any(&[Kind::Or, Kind::And])) {
            at = self.parse_logicterm(at + 1)?;
        }
        Ok(at)
    }

    // Logicterm -> Expr relational-op Expr
    fn parse_logicterm(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.parse_expr(at)?;
        at = self.expect(at, Kind::RelOp)?;
        self.parse_expr(at)
    }

    // Expr -> Term (('+' | '-') Term)*
    fn parse_expr(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.parse_term(at)?;
        while matches!(self.peek(at), Some(t) if t.kind == Kind::AddSub) {
            at = self.parse_term(at + 1)?;
        }
        Ok(at)
    }

    // Term -> Factor (('*' | '/') Factor)*
    fn parse_term(&self, at: usize) -> Result<usize, ParsingError> {
        let mut at = self.parse_factor(at)?;
        while matches!(self.peek(at), Some(t) if t.kind == Kind::MulDiv) {
            at = self.parse_factor(at + 1)?;
        }
        Ok(at)
    }

    // Factor -> id | int | float | double | '(' Expr ')'
    fn parse_factor(&self, at: usize) -> Result<usize, ParsingError> {
        match self.peek(at).map(|t| t.kind) {
            Some(Kind::Identifier | Kind::Int | Kind::Float | Kind::Double) => Ok(at + 1),
            Some(Kind::ParenBegin) => {
                let at = self.parse_expr(at + 1)?;
                self.expect(at, Kind::ParenEnd)
            }
            _ => Err(self.fail(at, "Factor")),
        }
    }
}
