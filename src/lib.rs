pub mod ast;
pub mod frontend;
pub mod utils;

pub use frontend::lexer::tokenize;
pub use frontend::parser::{parse_condition, parse_expression, parse_program, parse_statement};
pub use utils::errors::{ErrorKind, FrontendError, FrontendResult};

use crate::utils::config::lexer::{FIRST_COLUMN, FIRST_LINE};

pub const VERSION: &str = "0.1.0";

/// Line/column bookkeeping while scanning. Both are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: i32,
    pub column: i32,
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self {
            line: FIRST_LINE,
            column: FIRST_COLUMN,
        }
    }
}

impl SourcePosition {
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = FIRST_COLUMN;
    }

    /// Moves past `lexeme`, counting characters rather than bytes. A lexeme
    /// spanning lines (a string literal) leaves the column just after its
    /// last line break.
    pub fn advance(&mut self, lexeme: &str) {
        match lexeme.rfind('\n') {
            Some(last_break) => {
                self.line += lexeme.matches('\n').count() as i32;
                self.column = FIRST_COLUMN + lexeme[last_break + 1..].chars().count() as i32;
            }
            None => self.column += lexeme.chars().count() as i32,
        }
    }
}

/// Tokenizes and parses `source` in one call.
pub fn parse_source(source: &str) -> FrontendResult<ast::Program> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}
