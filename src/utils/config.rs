// Lexer constants
pub mod lexer {
    // Lexeme and position of the end-of-input sentinel the parser substitutes
    // once its cursor runs past the last token.
    pub const SENTINEL_LEXEME: &str = "$";
    pub const SENTINEL_LINE: i32 = -1;
    pub const SENTINEL_COLUMN: i32 = -1;

    // Scanning starts here
    pub const FIRST_LINE: i32 = 1;
    pub const FIRST_COLUMN: i32 = 1;

    pub const STRING_DELIMITER: char = '"';
}

// Parser constants
pub mod parser {
    use crate::frontend::token::TokenKind;

    // Kinds that close an (empty) variable list
    pub const VARIABLE_LIST_FOLLOW: &[TokenKind] =
        &[TokenKind::Begin, TokenKind::End, TokenKind::EndOfInput];

    // Kinds that may follow a trailing ';' in a statement body
    pub const BODY_TERMINATORS: &[TokenKind] = &[TokenKind::End, TokenKind::Sino];

    pub const ADDITIVE_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
    pub const MULTIPLICATIVE_OPERATORS: &[TokenKind] = &[TokenKind::Star, TokenKind::Slash];
    pub const EXPONENT_OPERATORS: &[TokenKind] = &[TokenKind::Caret];
}

// Command-line driver constants
pub mod driver {
    pub const SOURCE_EXTENSION: &str = "mtx";
    pub const TOKEN_TABLE_RULE_WIDTH: usize = 60;
}
