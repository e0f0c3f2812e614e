use crate::frontend::token::TokenKind;
use thiserror::Error;

/// Which front-end phase raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

#[derive(Debug, Error)]
pub enum FrontendError {
    // Lexical analysis errors
    #[error("Lexical error at line {line}, column {column}: unrecognized character '{character}'")]
    Lexical { character: char, line: i32, column: i32 },

    // Parsing errors
    #[error("{}", format_syntax_error(.expected, .found, .lexeme, .line, .column, .context))]
    Syntax {
        expected: Option<TokenKind>,
        found: TokenKind,
        lexeme: String,
        line: i32,
        column: i32,
        /// Grammar rule that found no production for `found`.
        context: Option<&'static str>,
    },
}

fn format_syntax_error(
    expected: &Option<TokenKind>,
    found: &TokenKind,
    lexeme: &str,
    line: &i32,
    column: &i32,
    context: &Option<&'static str>,
) -> String {
    let location = if *line < 0 {
        "past end of input".to_string()
    } else {
        format!("at line {}, column {}", line, column)
    };
    match (expected, context) {
        (Some(expected), _) => format!(
            "Syntax error {}: expected '{}', found '{}' ('{}')",
            location, expected, found, lexeme
        ),
        (None, Some(context)) => format!(
            "Syntax error {}: unexpected '{}' ('{}') while parsing {}",
            location, found, lexeme, context
        ),
        (None, None) => format!("Syntax error {}: unexpected '{}' ('{}')", location, found, lexeme),
    }
}

impl FrontendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FrontendError::Lexical { .. } => ErrorKind::Lexical,
            FrontendError::Syntax { .. } => ErrorKind::Syntax,
        }
    }

    /// 1-based line, or -1 when the fault lies past the end of input.
    pub fn line(&self) -> i32 {
        match self {
            FrontendError::Lexical { line, .. } | FrontendError::Syntax { line, .. } => *line,
        }
    }

    pub fn column(&self) -> i32 {
        match self {
            FrontendError::Lexical { column, .. } | FrontendError::Syntax { column, .. } => *column,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type FrontendResult<T> = Result<T, FrontendError>;
