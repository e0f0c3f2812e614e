use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::{FrontendError, FrontendResult};
use crate::SourcePosition;
use lazy_static::lazy_static;
use regex::Regex;

/// What the scanner does with a match of one lexical rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexicalAction {
    Emit(TokenKind),
    Newline,
    Skip,
    Reject,
}

// Tried in order at each scan position; the first rule that matches wins,
// even when a later rule would match a longer lexeme.
const LEXICAL_RULES: &[(LexicalAction, &str)] = &[
    (LexicalAction::Emit(TokenKind::RealLiteral), r"[0-9]+\.[0-9]+|[0-9]+"),
    (LexicalAction::Emit(TokenKind::StringLiteral), r#""[^"]*""#),
    (LexicalAction::Emit(TokenKind::Assign), r":="),
    (LexicalAction::Emit(TokenKind::RelOp), r"<=|>=|<>|<|>|="),
    (LexicalAction::Emit(TokenKind::Identifier), r"[A-Za-z][A-Za-z0-9_]*"),
    (LexicalAction::Emit(TokenKind::Plus), r"\+"),
    (LexicalAction::Emit(TokenKind::Minus), r"-"),
    (LexicalAction::Emit(TokenKind::Star), r"\*"),
    (LexicalAction::Emit(TokenKind::Slash), r"/"),
    (LexicalAction::Emit(TokenKind::Caret), r"\^"),
    (LexicalAction::Emit(TokenKind::LParen), r"\("),
    (LexicalAction::Emit(TokenKind::RParen), r"\)"),
    (LexicalAction::Emit(TokenKind::LBracket), r"\["),
    (LexicalAction::Emit(TokenKind::RBracket), r"\]"),
    (LexicalAction::Emit(TokenKind::LBrace), r"\{"),
    (LexicalAction::Emit(TokenKind::RBrace), r"\}"),
    (LexicalAction::Emit(TokenKind::Colon), r":"),
    (LexicalAction::Emit(TokenKind::Semicolon), r";"),
    (LexicalAction::Emit(TokenKind::Comma), r","),
    (LexicalAction::Emit(TokenKind::Dot), r"\."),
    (LexicalAction::Newline, r"\n"),
    (LexicalAction::Skip, r"[ \t]+"),
    (LexicalAction::Reject, r"."),
];

lazy_static! {
    // One capture group per rule, so group `i + 1` belongs to `LEXICAL_RULES[i]`.
    static ref LEXICAL_PATTERN: Regex = {
        let alternation = LEXICAL_RULES
            .iter()
            .map(|(_, pattern)| format!("({})", pattern))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("lexical rule table is a valid regex")
    };
}

pub struct Lexer<'a> {
    source: &'a str,
    position: SourcePosition,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: SourcePosition::default(),
        }
    }

    /// Scans the whole source. The result always ends with a single
    /// end-of-input token at the last line/column reached.
    pub fn scan(mut self) -> FrontendResult<Vec<Token>> {
        let source = self.source;
        let mut tokens = Vec::new();
        for captures in LEXICAL_PATTERN.captures_iter(source) {
            let Some((rule, lexeme)) = (1..captures.len())
                .find_map(|group| captures.get(group).map(|m| (group - 1, m.as_str())))
            else {
                continue;
            };
            if let Some(token) = self.apply(LEXICAL_RULES[rule].0, lexeme)? {
                tokens.push(token);
            }
        }
        tokens.push(Token::end_of_input(self.position.line, self.position.column));
        Ok(tokens)
    }

    fn apply(&mut self, action: LexicalAction, lexeme: &str) -> FrontendResult<Option<Token>> {
        let SourcePosition { line, column } = self.position;
        match action {
            LexicalAction::Newline => {
                self.position.next_line();
                Ok(None)
            }
            LexicalAction::Skip => {
                self.position.advance(lexeme);
                Ok(None)
            }
            LexicalAction::Reject => {
                let character = lexeme.chars().next().unwrap_or_default();
                Err(FrontendError::Lexical { character, line, column })
            }
            LexicalAction::Emit(kind) => {
                let kind = match kind {
                    TokenKind::Identifier => TokenKind::keyword(lexeme).unwrap_or(kind),
                    _ => kind,
                };
                self.position.advance(lexeme);
                Ok(Some(Token::new(kind, lexeme, line, column)))
            }
        }
    }
}

// Convenience function for callers that only need the token sequence
pub fn tokenize(source: &str) -> FrontendResult<Vec<Token>> {
    Lexer::new(source).scan()
}
