use crate::error::{CompilerError, SemanticError, UnusedIdentifierError};
use crate::token::{Kind, Token};

use std::collections::HashSet;

/// Declaration and usage discipline over the validated token sequence.
///
/// A single left-to-right walk enforces declare-before-assign-before-use and
/// tracks which declared identifiers are ever read. The walk assumes the
/// sequence already passed the parser; lookahead offsets are taken on faith.
pub struct SemanticAnalyzer {
    declared: HashSet<String>,
    assigned: HashSet<String>,
    unused: HashSet<String>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            declared: HashSet::new(),
            assigned: HashSet::new(),
            unused: HashSet::new(),
        }
    }

    pub fn analyze(mut self, tokens: &[Token]) -> Result<(), CompilerError> {
        let mut i = 0;
        while i < tokens.len() {
            match tokens[i].kind {
                Kind::Declare => {
                    // Every identifier listed becomes declared, and a
                    // candidate for the unused diagnostic until proven read.
                    i += 1;
                    while i < tokens.len() && tokens[i].kind != Kind::CommandEnd {
                        if tokens[i].kind == Kind::Identifier {
                            self.declared.insert(tokens[i].text.clone());
                            self.unused.insert(tokens[i].text.clone());
                        }
                        i += 1;
                    }
                }
                Kind::Assign => {
                    self.assigned.insert(tokens[i - 1].text.clone());
                }
                Kind::Read => {
                    // leia '(' id ...: the target is written by the read.
                    self.assigned.insert(tokens[i + 2].text.clone());
                }
                Kind::Identifier => {
                    // Assignment targets are handled by the Assign rule; any
                    // other occurrence is a read of the identifier.
                    let next_is_assign =
                        matches!(tokens.get(i + 1), Some(t) if t.kind == Kind::Assign);
                    if !next_is_assign {
                        if !self.declared.contains(&tokens[i].text) {
                            return Err(
                                SemanticError::new(&tokens[i], "Undeclared identifier!").into()
                            );
                        }
                        if !self.assigned.contains(&tokens[i].text) {
                            return Err(
                                SemanticError::new(&tokens[i], "Unassigned identifier!").into()
                            );
                        }
                        self.unused.remove(&tokens[i].text);
                    }
                }
                Kind::Print => {
                    self.unused.remove(&tokens[i + 2].text);
                }
                _ => {}
            }
            i += 1;
        }

        // Only evaluated after a clean walk. The underlying set has no
        // meaningful order; the first remaining entry is reported.
        if let Some(name) = self.unused.iter().next() {
            return Err(UnusedIdentifierError::new(name.clone()).into());
        }

        Ok(())
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
