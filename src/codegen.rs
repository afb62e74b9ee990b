use crate::token::{Kind, Token};

/// Emits a C program equivalent to the validated token sequence.
///
/// The body is wrapped in a fixed preamble and postamble, declarations all
/// become `int`, and print/read map to `printf`/`scanf` with a format
/// specifier chosen from the argument's token kind. Everything else is
/// copied through in source order, so expression shape and precedence
/// survive untouched. Input is assumed to have passed semantic analysis;
/// no errors are reported here.
pub struct CGenerator {
    out: String,
}

impl CGenerator {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn generate(mut self, tokens: &[Token]) -> String {
        let mut i = 0;
        while i < tokens.len() {
            match tokens[i].kind {
                Kind::ProgramStart => self.out.push_str("#include <stdio.h>\n\nint main()\n{\n"),
                Kind::ProgramEnd => {
                    self.out.push_str("\nreturn 0;\n}");
                    i += 1; // the final '.'
                }
                Kind::Print => {
                    self.out.push_str("printf(");
                    i += 2;
                    let arg = &tokens[i];
                    match arg.kind {
                        Kind::Text => self.out.push_str(&arg.text),
                        Kind::Int | Kind::Identifier => {
                            self.out.push_str("\"%d\\n\",");
                            self.out.push_str(&arg.text);
                        }
                        Kind::Float => {
                            self.out.push_str("\"%f\\n\",");
                            self.out.push_str(&arg.text);
                        }
                        Kind::Double => {
                            self.out.push_str("\"%lf\\n\",");
                            self.out.push_str(&arg.text);
                        }
                        _ => {}
                    }
                }
                Kind::Read => {
                    self.out.push_str("scanf(\"%d\", &");
                    i += 2;
                    self.out.push_str(&tokens[i].text);
                }
                Kind::Declare => self.out.push_str("int "),
                Kind::CommandEnd => self.out.push_str(";\n"),
                Kind::Assign => self.out.push_str(" = "),
                Kind::ScopeBegin => self.out.push_str("\n{\n\t"),
                Kind::ScopeEnd => self.out.push_str("}\n"),
                Kind::AddSub | Kind::MulDiv | Kind::RelOp => {
                    self.out.push(' ');
                    self.out.push_str(&tokens[i].text);
                    self.out.push(' ');
                }
                Kind::Or => self.out.push_str(" || "),
                Kind::And => self.out.push_str(" && "),
                _ => self.out.push_str(&tokens[i].text),
            }
            i += 1;
        }

        self.out
    }
}

impl Default for CGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Emits a Lua script equivalent to the validated token sequence.
///
/// Lua needs no declarations, so the declare clause is dropped entirely.
/// Block structure is the tricky part: Lua closes `if`/`while`/`else` with
/// `end` but closes `repeat` with `until <condition>`, and the `}` token
/// alone does not say which construct is ending. The generator keeps the
/// most recently seen control keyword to decide, and defers closing an `if`
/// block whose `}` is immediately followed by `else`.
pub struct LuaGenerator {
    out: String,
    last_control: Option<Kind>,
}

impl LuaGenerator {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            last_control: None,
        }
    }

    pub fn generate(mut self, tokens: &[Token]) -> String {
        let mut i = 0;
        while i < tokens.len() {
            match tokens[i].kind {
                Kind::ProgramStart | Kind::ProgramEnd => {}
                Kind::Declare => {
                    while i < tokens.len() && tokens[i].kind != Kind::CommandEnd {
                        i += 1;
                    }
                }
                Kind::Print => self.out.push_str("print"),
                Kind::Read => {
                    i += 2;
                    self.out.push_str(&tokens[i].text);
                    self.out.push_str(" = io.read()");
                    i += 1; // the ')'
                }
                Kind::CommandEnd => self.out.push('\n'),
                Kind::Assign => self.out.push_str(" = "),
                Kind::ScopeBegin => match self.last_control {
                    Some(Kind::If) => self.out.push_str("\nthen\n\t"),
                    Some(Kind::While) => self.out.push_str("\ndo\n\t"),
                    // `repeat` and `else` already opened their blocks.
                    _ => {}
                },
                Kind::ScopeEnd => match self.last_control {
                    Some(Kind::If)
                        if matches!(tokens.get(i + 1), Some(t) if t.kind == Kind::Else) =>
                    {
                        // The construct is not finished; `else` closes it.
                    }
                    Some(Kind::If | Kind::While | Kind::Else) => self.out.push_str("end\n"),
                    Some(Kind::Do) => {
                        i += 1; // the `while` keyword
                        self.out.push_str("until ");
                    }
                    _ => {}
                },
                Kind::AddSub | Kind::MulDiv => {
                    self.out.push(' ');
                    self.out.push_str(&tokens[i].text);
                    self.out.push(' ');
                }
                Kind::RelOp => {
                    self.out.push(' ');
                    // Lua spells inequality differently.
                    if tokens[i].text == "!=" {
                        self.out.push_str("~=");
                    } else {
                        self.out.push_str(&tokens[i].text);
                    }
                    self.out.push(' ');
                }
                Kind::Or => self.out.push_str(" or "),
                Kind::And => self.out.push_str(" and "),
                Kind::Negation => self.out.push_str("not "),
                Kind::Else => {
                    self.last_control = Some(Kind::Else);
                    self.out.push_str("else\n\t");
                }
                Kind::While => {
                    self.last_control = Some(Kind::While);
                    self.out.push_str("while ");
                }
                Kind::Do => {
                    self.last_control = Some(Kind::Do);
                    self.out.push_str("repeat\n\t");
                }
                Kind::If => {
                    self.last_control = Some(Kind::If);
                    self.out.push_str(&tokens[i].text);
                }
                _ => self.out.push_str(&tokens[i].text),
            }
            i += 1;
        }

        self.out
    }
}

impl Default for LuaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SemanticAnalyzer;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn tokens_for(input: &str) -> Vec<Token> {
        let tokens = Lexer::new(input).tokenize().expect("lexing failed");
        Parser::new(&tokens).parse().expect("parsing failed");
        SemanticAnalyzer::new()
            .analyze(&tokens)
            .expect("analysis failed");
        tokens
    }

    fn c(input: &str) -> String {
        CGenerator::new().generate(&tokens_for(input))
    }

    fn lua(input: &str) -> String {
        LuaGenerator::new().generate(&tokens_for(input))
    }

    #[test]
    fn c_read_print_program() {
        let out = c("programa declare x. leia(x). escreva(x). fimprog.");
        assert!(out.starts_with("#include <stdio.h>\n\nint main()\n{\n"));
        assert!(out.contains("int x;\n"));
        assert!(out.contains("scanf(\"%d\", &x);\n"));
        assert!(out.contains("printf(\"%d\\n\",x);\n"));
        assert!(out.ends_with("\nreturn 0;\n}"));
    }

    #[test]
    fn c_print_format_follows_argument_kind() {
        let out = c("programa declare x. x := 1. escreva(x). escreva(\"ola\"). fimprog.");
        assert!(out.contains("printf(\"%d\\n\",x);\n"));
        assert!(out.contains("printf(\"ola\");\n"));
    }

    #[test]
    fn c_declaration_list_stays_comma_separated() {
        let out = c("programa declare a, b. a := 1. b := a. escreva(b). fimprog.");
        assert!(out.contains("int a,b;\n"));
    }

    #[test]
    fn c_expression_kept_verbatim_in_source_order() {
        let out = c("programa declare x. x := 1 + 2 * 3. escreva(x). fimprog.");
        assert!(out.contains("x = 1 + 2 * 3;\n"));
    }

    #[test]
    fn c_parenthesized_expression_survives() {
        let out = c("programa declare x. x := (1 + 2) * 3. escreva(x). fimprog.");
        assert!(out.contains("x = (1 + 2) * 3;\n"));
    }

    #[test]
    fn c_logical_operators_are_translated() {
        let out = c(
            "programa declare x. x := 1. \
             if (x > 0 e x < 9 ou x == 5) { escreva(x). } fimprog.",
        );
        assert!(out.contains("x > 0 && x < 9 || x == 5"));
    }

    #[test]
    fn lua_elides_declarations() {
        let out = lua("programa declare x, y. x := 1. y := x. escreva(y). fimprog.");
        assert!(!out.contains("declare"));
        assert!(out.starts_with("x = 1\n"));
    }

    #[test]
    fn lua_read_print_program() {
        // The trailing blank line comes from the program-end terminator.
        let out = lua("programa declare x. leia(x). escreva(x). fimprog.");
        assert_eq!(out, "x = io.read()\nprint(x)\n\n");
    }

    #[test]
    fn lua_while_becomes_do_end() {
        let out = lua(
            "programa declare x. x := 0. \
             while (x < 3) { x := x + 1. } escreva(x). fimprog.",
        );
        assert!(out.contains("while (x < 3)\ndo\n\tx = x + 1\nend\n"));
    }

    #[test]
    fn lua_if_else_shares_one_end() {
        let out = lua(
            "programa declare x. x := 1. \
             if (x > 0) { escreva(x). } else { escreva(\"nada\"). } fimprog.",
        );
        assert!(out.contains("if(x > 0)\nthen\n\tprint(x)\nelse\n\tprint(\"nada\")\nend\n"));
        assert_eq!(out.matches("end").count(), 1);
    }

    #[test]
    fn lua_if_without_else_still_closes() {
        let out = lua(
            "programa declare x. x := 1. \
             if (x > 0) { escreva(x). } fimprog.",
        );
        assert!(out.contains("if(x > 0)\nthen\n\tprint(x)\nend\n"));
    }

    #[test]
    fn lua_do_while_becomes_repeat_until() {
        let out = lua(
            "programa declare x. x := 0. \
             do { x := x + 1. } while (x < 3). escreva(x). fimprog.",
        );
        assert!(out.contains("repeat\n\tx = x + 1\nuntil (x < 3)\n"));
    }

    #[test]
    fn lua_operator_spellings() {
        let out = lua(
            "programa declare x. x := 1. \
             if (x != 2 e x > 0 ou x == 1) { escreva(x). } fimprog.",
        );
        assert!(out.contains("x ~= 2 and x > 0 or x == 1"));
    }

    #[test]
    fn generation_is_deterministic() {
        let source = "programa declare x. leia(x). \
                      if (x > 0) { escreva(x). } else { escreva(\"n\"). } fimprog.";
        let tokens = tokens_for(source);
        assert_eq!(
            CGenerator::new().generate(&tokens),
            CGenerator::new().generate(&tokens)
        );
        assert_eq!(
            LuaGenerator::new().generate(&tokens),
            LuaGenerator::new().generate(&tokens)
        );
    }
}
