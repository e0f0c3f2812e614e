use matrixc::frontend::lexer::{tokenize, Lexer};
use matrixc::frontend::token::{Token, TokenKind};
use matrixc::utils::errors::{ErrorKind, FrontendError, FrontendResult};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_program_header_positions() -> FrontendResult<()> {
    let tokens = tokenize("program P; var n : real;")?;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Program, "program", 1, 1),
            Token::new(TokenKind::Identifier, "P", 1, 9),
            Token::new(TokenKind::Semicolon, ";", 1, 10),
            Token::new(TokenKind::Var, "var", 1, 12),
            Token::new(TokenKind::Identifier, "n", 1, 16),
            Token::new(TokenKind::Colon, ":", 1, 18),
            Token::new(TokenKind::Real, "real", 1, 20),
            Token::new(TokenKind::Semicolon, ";", 1, 24),
            Token::new(TokenKind::EndOfInput, "$", 1, 25),
        ]
    );
    Ok(())
}

#[test]
fn test_end_to_end_token_count() -> FrontendResult<()> {
    let source = r#"program P; var n : real; begin leer("v", n); n := n + 1; end ."#;
    let tokens = tokenize(source)?;
    assert_eq!(tokens.len(), 25);
    assert_eq!(tokens[11], Token::new(TokenKind::StringLiteral, "\"v\"", 1, 37));
    assert_eq!(tokens[17], Token::new(TokenKind::Assign, ":=", 1, 48));
    assert_eq!(tokens.last(), Some(&Token::new(TokenKind::EndOfInput, "$", 1, 63)));
    Ok(())
}

#[test]
fn test_empty_source_is_only_end_of_input() -> FrontendResult<()> {
    assert_eq!(tokenize("")?, vec![Token::new(TokenKind::EndOfInput, "$", 1, 1)]);
    Ok(())
}

#[test]
fn test_exactly_one_end_of_input() -> FrontendResult<()> {
    let tokens = tokenize("si a <> b entonces begin escribir(\"x\") end\nsino begin end")?;
    let ends = tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count();
    assert_eq!(ends, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
    Ok(())
}

#[test]
fn test_number_literals() -> FrontendResult<()> {
    let tokens = tokenize("0 42 3.14 10.5")?;
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["0", "42", "3.14", "10.5", "$"]);
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::RealLiteral));
    Ok(())
}

#[test]
fn test_trailing_dot_is_not_part_of_number() -> FrontendResult<()> {
    let tokens = tokenize("1. 1.5.2")?;
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::RealLiteral,
            TokenKind::Dot,
            TokenKind::RealLiteral,
            TokenKind::Dot,
            TokenKind::RealLiteral,
            TokenKind::EndOfInput,
        ]
    );
    assert_eq!(tokens[2].lexeme, "1.5");
    assert_eq!(tokens[4].lexeme, "2");
    Ok(())
}

#[test]
fn test_number_then_identifier() -> FrontendResult<()> {
    let tokens = tokenize("12abc")?;
    assert_eq!(tokens[0], Token::new(TokenKind::RealLiteral, "12", 1, 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "abc", 1, 3));
    Ok(())
}

#[test]
fn test_string_literal_keeps_quotes() -> FrontendResult<()> {
    let tokens = tokenize("escribir(\"Hola, mundo!\")")?;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Escribir, "escribir", 1, 1),
            Token::new(TokenKind::LParen, "(", 1, 9),
            Token::new(TokenKind::StringLiteral, "\"Hola, mundo!\"", 1, 10),
            Token::new(TokenKind::RParen, ")", 1, 24),
            Token::new(TokenKind::EndOfInput, "$", 1, 25),
        ]
    );
    Ok(())
}

#[test]
fn test_empty_string_literal() -> FrontendResult<()> {
    let tokens = tokenize("\"\"")?;
    assert_eq!(tokens[0], Token::new(TokenKind::StringLiteral, "\"\"", 1, 1));
    Ok(())
}

#[test]
fn test_unterminated_string_is_lexical_error() {
    let result = tokenize("x := \"abc");
    if let Err(FrontendError::Lexical { character, line, column }) = result {
        assert_eq!((character, line, column), ('"', 1, 6));
    } else {
        panic!("Expected a lexical error for an unterminated string, but got: {:?}", result);
    }
}

#[test]
fn test_string_literal_spanning_lines() -> FrontendResult<()> {
    let tokens = tokenize("escribir(\"a\nb\") x")?;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Escribir, "escribir", 1, 1),
            Token::new(TokenKind::LParen, "(", 1, 9),
            Token::new(TokenKind::StringLiteral, "\"a\nb\"", 1, 10),
            Token::new(TokenKind::RParen, ")", 2, 3),
            Token::new(TokenKind::Identifier, "x", 2, 5),
            Token::new(TokenKind::EndOfInput, "$", 2, 6),
        ]
    );
    Ok(())
}

#[test]
fn test_string_literal_with_several_line_breaks() -> FrontendResult<()> {
    let tokens = tokenize("\"uno\n\ndos\ntres\";")?;
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1], Token::new(TokenKind::Semicolon, ";", 4, 6));
    Ok(())
}

#[test]
fn test_assignment_wins_over_colon() -> FrontendResult<()> {
    let tokens = tokenize("x:=y : z")?;
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );
    Ok(())
}

#[test]
fn test_relational_operators_longest_first() -> FrontendResult<()> {
    let tokens = tokenize("<= >= <> < > =")?;
    let relops: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::RelOp)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(relops, vec!["<=", ">=", "<>", "<", ">", "="]);
    assert_eq!(tokens.len(), 7);
    Ok(())
}

#[test]
fn test_relational_without_spaces() -> FrontendResult<()> {
    let tokens = tokenize("a<=b")?;
    assert_eq!(tokens[1], Token::new(TokenKind::RelOp, "<=", 1, 2));
    assert_eq!(tokens[2], Token::new(TokenKind::Identifier, "b", 1, 4));
    Ok(())
}

#[test]
fn test_single_character_operators() -> FrontendResult<()> {
    let tokens = tokenize("+ - * / ^ ( ) [ ] { } : ; , .")?;
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Caret,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::EndOfInput,
        ]
    );
    Ok(())
}

#[test]
fn test_reserved_words_are_case_insensitive() -> FrontendResult<()> {
    let tokens = tokenize("BEGIN Mientras hacer End matrizA")?;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Begin, "BEGIN", 1, 1),
            Token::new(TokenKind::Mientras, "Mientras", 1, 7),
            Token::new(TokenKind::Hacer, "hacer", 1, 16),
            Token::new(TokenKind::End, "End", 1, 22),
            Token::new(TokenKind::Identifier, "matrizA", 1, 26),
            Token::new(TokenKind::EndOfInput, "$", 1, 33),
        ]
    );
    Ok(())
}

#[test]
fn test_all_reserved_words() -> FrontendResult<()> {
    let source = "program var begin end real matrix of leer escribir si entonces sino \
                  mientras hacer filas columnas transpuesta true false not and or";
    let tokens = tokenize(source)?;
    assert_eq!(tokens.len(), 23);
    assert!(tokens[..22].iter().all(|t| t.kind.is_keyword()));
    assert_eq!(tokens[16].kind, TokenKind::Transpuesta);
    Ok(())
}

#[test]
fn test_identifier_with_digits_and_underscore() -> FrontendResult<()> {
    let tokens = tokenize("mi_portfolio2 end_x")?;
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "mi_portfolio2", 1, 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "end_x", 1, 15));
    Ok(())
}

#[test]
fn test_newlines_reset_column() -> FrontendResult<()> {
    let source = "
program P;
  var
\tx : real;";
    let tokens = tokenize(source)?;
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Program, "program", 2, 1),
            Token::new(TokenKind::Identifier, "P", 2, 9),
            Token::new(TokenKind::Semicolon, ";", 2, 10),
            Token::new(TokenKind::Var, "var", 3, 3),
            Token::new(TokenKind::Identifier, "x", 4, 2),
            Token::new(TokenKind::Colon, ":", 4, 4),
            Token::new(TokenKind::Real, "real", 4, 6),
            Token::new(TokenKind::Semicolon, ";", 4, 10),
            Token::new(TokenKind::EndOfInput, "$", 4, 11),
        ]
    );
    Ok(())
}

#[test]
fn test_end_of_input_after_trailing_newline() -> FrontendResult<()> {
    let tokens = tokenize("end .\n")?;
    assert_eq!(tokens.last(), Some(&Token::new(TokenKind::EndOfInput, "$", 2, 1)));
    Ok(())
}

#[test]
fn test_unknown_character() {
    let result = tokenize("x := 1 # 2");
    if let Err(FrontendError::Lexical { character, line, column }) = result {
        assert_eq!(character, '#');
        assert_eq!(line, 1);
        assert_eq!(column, 8);
    } else {
        panic!("Expected a lexical error, but got: {:?}", result);
    }
}

#[test]
fn test_unknown_character_on_later_line() {
    let result = tokenize("a\n\tb @");
    match result {
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::Lexical);
            assert_eq!(err.line(), 2);
            assert_eq!(err.column(), 4);
        }
        Ok(tokens) => panic!("Expected a lexical error, but got: {:?}", tokens),
    }
}

#[test]
fn test_first_fault_wins() {
    let result = tokenize("? !");
    if let Err(FrontendError::Lexical { character, column, .. }) = result {
        assert_eq!(character, '?');
        assert_eq!(column, 1);
    } else {
        panic!("Expected a lexical error, but got: {:?}", result);
    }
}

#[test]
fn test_carriage_return_is_rejected() {
    let result = tokenize("x\r\n");
    assert!(matches!(result, Err(FrontendError::Lexical { character: '\r', line: 1, column: 2 })));
}

#[test]
fn test_non_ascii_letter_is_rejected() {
    let result = tokenize("año");
    if let Err(FrontendError::Lexical { character, line, column }) = result {
        assert_eq!((character, line, column), ('ñ', 1, 2));
    } else {
        panic!("Expected a lexical error, but got: {:?}", result);
    }
}

#[test]
fn test_lexer_struct_matches_convenience_function() -> FrontendResult<()> {
    let source = "m[1, 2] := filas(m) ^ 2";
    assert_eq!(Lexer::new(source).scan()?, tokenize(source)?);
    Ok(())
}
