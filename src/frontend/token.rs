use crate::utils::config::lexer::{SENTINEL_COLUMN, SENTINEL_LEXEME, SENTINEL_LINE};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    RealLiteral,
    StringLiteral,
    Assign,
    RelOp,
    Identifier,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Semicolon,
    Comma,
    Dot,
    EndOfInput,
    // Reserved words
    Program,
    Var,
    Begin,
    End,
    Real,
    Matrix,
    Of,
    Leer,
    Escribir,
    Si,
    Entonces,
    Sino,
    Mientras,
    Hacer,
    Filas,
    Columnas,
    Transpuesta,
    True,
    False,
    Not,
    And,
    Or,
}

impl TokenKind {
    /// Resolves an identifier lexeme against the reserved-word table.
    /// Matching is case-insensitive.
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        let kind = match lexeme.to_lowercase().as_str() {
            "program" => TokenKind::Program,
            "var" => TokenKind::Var,
            "begin" => TokenKind::Begin,
            "end" => TokenKind::End,
            "real" => TokenKind::Real,
            "matrix" => TokenKind::Matrix,
            "of" => TokenKind::Of,
            "leer" => TokenKind::Leer,
            "escribir" => TokenKind::Escribir,
            "si" => TokenKind::Si,
            "entonces" => TokenKind::Entonces,
            "sino" => TokenKind::Sino,
            "mientras" => TokenKind::Mientras,
            "hacer" => TokenKind::Hacer,
            "filas" => TokenKind::Filas,
            "columnas" => TokenKind::Columnas,
            "transpuesta" => TokenKind::Transpuesta,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "not" => TokenKind::Not,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Program
                | TokenKind::Var
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::Real
                | TokenKind::Matrix
                | TokenKind::Of
                | TokenKind::Leer
                | TokenKind::Escribir
                | TokenKind::Si
                | TokenKind::Entonces
                | TokenKind::Sino
                | TokenKind::Mientras
                | TokenKind::Hacer
                | TokenKind::Filas
                | TokenKind::Columnas
                | TokenKind::Transpuesta
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Not
                | TokenKind::And
                | TokenKind::Or
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::RealLiteral => "real-number-literal",
            TokenKind::StringLiteral => "string-literal",
            TokenKind::Assign => "assign",
            TokenKind::RelOp => "relop",
            TokenKind::Identifier => "identifier",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Caret => "caret",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::Colon => "colon",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::EndOfInput => "end-of-input",
            TokenKind::Program => "program",
            TokenKind::Var => "var",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Real => "real",
            TokenKind::Matrix => "matrix",
            TokenKind::Of => "of",
            TokenKind::Leer => "leer",
            TokenKind::Escribir => "escribir",
            TokenKind::Si => "si",
            TokenKind::Entonces => "entonces",
            TokenKind::Sino => "sino",
            TokenKind::Mientras => "mientras",
            TokenKind::Hacer => "hacer",
            TokenKind::Filas => "filas",
            TokenKind::Columnas => "columnas",
            TokenKind::Transpuesta => "transpuesta",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: i32,
    pub column: i32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: i32, column: i32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// End-of-input token placed at a known position (the lexer's final line/column).
    pub fn end_of_input(line: i32, column: i32) -> Self {
        Self::new(TokenKind::EndOfInput, SENTINEL_LEXEME, line, column)
    }

    /// End-of-input token the parser substitutes once its cursor runs past the last token.
    pub fn sentinel() -> Self {
        Self::end_of_input(SENTINEL_LINE, SENTINEL_COLUMN)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' at {}:{}", self.kind, self.lexeme, self.line, self.column)
    }
}
