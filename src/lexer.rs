use crate::error::LexicalError;
use crate::token::{Kind, Token};

/// Character-class scanner producing the token sequence for the whole
/// compilation. Consumes the source once, left to right, and never
/// backtracks past the current character.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    start: usize,
    line: usize,
    line_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
            start: 0,
            line: 1,
            line_start: 0,
        }
    }

    fn at(&self) -> char {
        if self.current >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// 1-based column of the token that begins at `start`.
    fn column(&self) -> usize {
        self.start - self.line_start + 1
    }

    fn text(&self, from: usize, to: usize) -> String {
        self.chars[from..to].iter().collect()
    }

    fn make_token(&self, kind: Kind, end: usize) -> Token {
        Token::new(kind, self.text(self.start, end), self.line, self.column())
    }

    fn error(&self) -> LexicalError {
        LexicalError::new(self.line, self.column())
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();

        while !self.is_eof() {
            self.start = self.current;

            match self.at() {
                '{' => self.single(Kind::ScopeBegin, &mut tokens),
                '}' => self.single(Kind::ScopeEnd, &mut tokens),
                '(' => self.single(Kind::ParenBegin, &mut tokens),
                ')' => self.single(Kind::ParenEnd, &mut tokens),
                '.' => self.single(Kind::CommandEnd, &mut tokens),
                ',' => self.single(Kind::Comma, &mut tokens),
                '+' | '-' => self.single(Kind::AddSub, &mut tokens),
                '*' | '/' => self.single(Kind::MulDiv, &mut tokens),
                '"' => tokens.push(self.string_literal()?),
                '\n' => {
                    self.current += 1;
                    self.line += 1;
                    self.line_start = self.current;
                }
                ' ' | '\t' => self.current += 1,
                ':' => tokens.push(self.assign()?),
                '<' | '>' | '=' => tokens.push(self.relational()),
                '!' => tokens.push(self.exclamation()),
                c if c.is_ascii_digit() => tokens.push(self.number()),
                c if c.is_ascii_lowercase() => tokens.push(self.identifier()),
                _ => return Err(self.error()),
            }
        }

        Ok(tokens)
    }

    fn single(&mut self, kind: Kind, tokens: &mut Vec<Token>) {
        self.current += 1;
        tokens.push(self.make_token(kind, self.current));
    }

    /// String literal, stored including the surrounding quotes. A backslash
    /// consumes the following character without interpreting it.
    fn string_literal(&mut self) -> Result<Token, LexicalError> {
        self.current += 1;
        loop {
            if self.is_eof() {
                return Err(self.error());
            }
            match self.at() {
                '"' => {
                    self.current += 1;
                    return Ok(self.make_token(Kind::Text, self.current));
                }
                '\\' => self.current += 2,
                _ => self.current += 1,
            }
        }
    }

    /// Numeric literal. A leading `0x` is scanned through without giving the
    /// literal a distinct kind; `;` delimits the fractional part; a trailing
    /// `f` marks a float and is consumed but excluded from the stored text.
    fn number(&mut self) -> Token {
        if self.at() == '0' && self.current + 1 < self.chars.len() && self.chars[self.current + 1] == 'x' {
            self.current += 1;
        }
        self.current += 1;
        while self.at().is_ascii_digit() {
            self.current += 1;
        }

        match self.at() {
            'f' => {
                let token = self.make_token(Kind::Float, self.current);
                self.current += 1;
                token
            }
            ';' => {
                self.current += 1;
                while self.at().is_ascii_digit() {
                    self.current += 1;
                }
                if self.at() == 'f' {
                    let token = self.make_token(Kind::Float, self.current);
                    self.current += 1;
                    token
                } else {
                    self.make_token(Kind::Double, self.current)
                }
            }
            _ => self.make_token(Kind::Int, self.current),
        }
    }

    /// Identifier: a lowercase letter followed by letters (either case) or
    /// digits. Reclassified in place if the text is a reserved word.
    fn identifier(&mut self) -> Token {
        self.current += 1;
        while self.at().is_ascii_alphabetic() || self.at().is_ascii_digit() {
            self.current += 1;
        }

        let mut token = self.make_token(Kind::Identifier, self.current);
        if let Some(keyword) = keyword_kind(&token.text) {
            token.kind = keyword;
        }
        token
    }

    /// `:` must form `:=`; anything else is a lexical error.
    fn assign(&mut self) -> Result<Token, LexicalError> {
        self.current += 1;
        if self.at() != '=' {
            return Err(self.error());
        }
        self.current += 1;
        Ok(self.make_token(Kind::Assign, self.current))
    }

    /// `<`, `>` or `=`, optionally followed by `=`.
    fn relational(&mut self) -> Token {
        self.current += 1;
        if self.at() == '=' {
            self.current += 1;
        }
        self.make_token(Kind::RelOp, self.current)
    }

    /// `!=` is a relational operator; a bare `!` is negation.
    fn exclamation(&mut self) -> Token {
        self.current += 1;
        if self.at() == '=' {
            self.current += 1;
            self.make_token(Kind::RelOp, self.current)
        } else {
            self.make_token(Kind::Negation, self.current)
        }
    }
}

fn keyword_kind(ident: &str) -> Option<Kind> {
    match ident {
        "if" => Some(Kind::If),
        "else" => Some(Kind::Else),
        "do" => Some(Kind::Do),
        "while" => Some(Kind::While),
        "programa" => Some(Kind::ProgramStart),
        "fimprog" => Some(Kind::ProgramEnd),
        "escreva" => Some(Kind::Print),
        "leia" => Some(Kind::Read),
        "declare" => Some(Kind::Declare),
        "ou" => Some(Kind::Or),
        "e" => Some(Kind::And),
        _ => None,
    }
}
