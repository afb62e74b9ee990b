use crate::token::Token;

/// Renders the diagnostic token listing, one line per token in stream order.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "'{}'({}): line {} column {}\n",
            token.text,
            token.kind.name(),
            token.line,
            token.column
        ));
    }
    out
}
