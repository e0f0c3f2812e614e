use crate::ast::{
    BinaryOperator, Body, Condition, Declaration, Expression, MatrixFunction, Program,
    RelationalOperator, Statement, VarType, VariableDecl, WriteElement,
};
use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::parser::{
    ADDITIVE_OPERATORS, BODY_TERMINATORS, EXPONENT_OPERATORS, MULTIPLICATIVE_OPERATORS,
    VARIABLE_LIST_FOLLOW,
};
use crate::utils::config::lexer::STRING_DELIMITER;
use crate::utils::errors::{FrontendError, FrontendResult};

/// Predictive recursive-descent parser with one token of lookahead.
///
/// Every rule either inspects `current.kind` to pick a production or consumes
/// through [`Parser::advance`]; the first unexpected token aborts the parse.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let current = tokens.first().cloned().unwrap_or_else(Token::sentinel);
        Self {
            tokens,
            position: 0,
            current,
        }
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes and returns the current token. When `expected` is given and
    /// does not match, fails without consuming anything.
    pub fn advance(&mut self, expected: Option<TokenKind>) -> FrontendResult<Token> {
        if let Some(kind) = expected {
            if self.current.kind != kind {
                return Err(self.error(Some(kind), None));
            }
        }
        self.position += 1;
        let next = self
            .tokens
            .get(self.position)
            .cloned()
            .unwrap_or_else(Token::sentinel);
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> FrontendResult<Token> {
        self.advance(Some(kind))
    }

    fn check(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    fn error(&self, expected: Option<TokenKind>, context: Option<&'static str>) -> FrontendError {
        FrontendError::Syntax {
            expected,
            found: self.current.kind,
            lexeme: self.current.lexeme.clone(),
            line: self.current.line,
            column: self.current.column,
            context,
        }
    }

    fn unexpected(&self, context: &'static str) -> FrontendError {
        self.error(None, Some(context))
    }

    /// Fails unless every real token has been consumed.
    pub fn expect_end(&mut self) -> FrontendResult<()> {
        self.expect(TokenKind::EndOfInput).map(|_| ())
    }

    /**
     * program = "program" ident ";" declaration "begin" body "end" "." ;
     */
    pub fn parse(&mut self) -> FrontendResult<Program> {
        self.expect(TokenKind::Program)?;
        let name = self.expect(TokenKind::Identifier)?.lexeme;
        self.expect(TokenKind::Semicolon)?;
        let declarations = self.declaration()?;
        self.expect(TokenKind::Begin)?;
        let body = self.body()?;
        self.expect(TokenKind::End)?;
        self.expect(TokenKind::Dot)?;
        Ok(Program::new(name, declarations, body))
    }

    fn declaration(&mut self) -> FrontendResult<Declaration> {
        self.expect(TokenKind::Var)?;
        Ok(Declaration::new(self.variable_list()?))
    }

    /**
     * variables = { ident ":" type } ;
     *
     * The list is empty only when it is followed by "begin", "end" or the
     * end of input.
     */
    fn variable_list(&mut self) -> FrontendResult<Vec<VariableDecl>> {
        let mut variables = Vec::new();
        loop {
            if self.current.is(TokenKind::Identifier) {
                let name = self.expect(TokenKind::Identifier)?.lexeme;
                self.expect(TokenKind::Colon)?;
                let var_type = self.var_type()?;
                variables.push(VariableDecl::new(name, var_type));
            } else if self.check(VARIABLE_LIST_FOLLOW) {
                return Ok(variables);
            } else {
                return Err(self.unexpected("variable declaration"));
            }
        }
    }

    fn var_type(&mut self) -> FrontendResult<VarType> {
        match self.current.kind {
            TokenKind::Real => {
                self.expect(TokenKind::Real)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(VarType::Real)
            }
            TokenKind::Matrix => {
                self.expect(TokenKind::Matrix)?;
                self.expect(TokenKind::LBracket)?;
                let rows = self.expect(TokenKind::RealLiteral)?.lexeme;
                self.expect(TokenKind::Comma)?;
                let columns = self.expect(TokenKind::RealLiteral)?.lexeme;
                self.expect(TokenKind::RBracket)?;
                self.expect(TokenKind::Of)?;
                self.expect(TokenKind::Real)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(VarType::Matrix { rows, columns })
            }
            _ => Err(self.unexpected("variable type")),
        }
    }

    /**
     * body = [ statement { ";" statement } ] ;
     *
     * A ';' directly before "end" or "sino" closes the body.
     */
    fn body(&mut self) -> FrontendResult<Body> {
        let mut statements = Vec::new();
        if self.current.is(TokenKind::End) {
            return Ok(statements);
        }
        statements.push(self.parse_statement()?);
        while self.current.is(TokenKind::Semicolon) {
            self.expect(TokenKind::Semicolon)?;
            if self.check(BODY_TERMINATORS) {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    pub fn parse_statement(&mut self) -> FrontendResult<Statement> {
        match self.current.kind {
            TokenKind::Identifier => self.assignment(),
            TokenKind::Leer => self.read(),
            TokenKind::Escribir => self.write(),
            TokenKind::Si => self.if_statement(),
            TokenKind::Mientras => self.while_statement(),
            _ => Err(self.unexpected("statement")),
        }
    }

    fn assignment(&mut self) -> FrontendResult<Statement> {
        let variable = self.expect(TokenKind::Identifier)?.lexeme;
        match self.current.kind {
            TokenKind::Assign => {
                self.expect(TokenKind::Assign)?;
                let value = self.parse_expression()?;
                Ok(Statement::Assignment { variable, value })
            }
            TokenKind::LBracket => {
                let (row_index, col_index) = self.matrix_indices()?;
                self.expect(TokenKind::Assign)?;
                let value = self.parse_expression()?;
                Ok(Statement::MatrixAssignment {
                    variable,
                    row_index,
                    col_index,
                    value,
                })
            }
            _ => Err(self.unexpected("assignment")),
        }
    }

    // "[" expression "," expression "]"
    fn matrix_indices(&mut self) -> FrontendResult<(Expression, Expression)> {
        self.expect(TokenKind::LBracket)?;
        let row = self.parse_expression()?;
        self.expect(TokenKind::Comma)?;
        let column = self.parse_expression()?;
        self.expect(TokenKind::RBracket)?;
        Ok((row, column))
    }

    fn read(&mut self) -> FrontendResult<Statement> {
        self.expect(TokenKind::Leer)?;
        self.expect(TokenKind::LParen)?;
        let prompt = self.string_literal()?;
        self.expect(TokenKind::Comma)?;
        let variable = self.expect(TokenKind::Identifier)?.lexeme;
        self.expect(TokenKind::RParen)?;
        Ok(Statement::Read { prompt, variable })
    }

    fn write(&mut self) -> FrontendResult<Statement> {
        self.expect(TokenKind::Escribir)?;
        self.expect(TokenKind::LParen)?;
        let mut elements = vec![self.write_element()?];
        while self.current.is(TokenKind::Comma) {
            self.expect(TokenKind::Comma)?;
            elements.push(self.write_element()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(Statement::Write { elements })
    }

    fn write_element(&mut self) -> FrontendResult<WriteElement> {
        if self.current.is(TokenKind::StringLiteral) {
            Ok(WriteElement::Text(self.string_literal()?))
        } else {
            Ok(WriteElement::Expression(self.parse_expression()?))
        }
    }

    fn string_literal(&mut self) -> FrontendResult<String> {
        let token = self.expect(TokenKind::StringLiteral)?;
        let text = token
            .lexeme
            .strip_prefix(STRING_DELIMITER)
            .and_then(|rest| rest.strip_suffix(STRING_DELIMITER))
            .unwrap_or(token.lexeme.as_str());
        Ok(text.to_string())
    }

    fn if_statement(&mut self) -> FrontendResult<Statement> {
        self.expect(TokenKind::Si)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Entonces)?;
        let then_body = self.block()?;
        let else_body = if self.current.is(TokenKind::Sino) {
            self.expect(TokenKind::Sino)?;
            Some(self.block()?)
        } else {
            None
        };
        Ok(Statement::If {
            condition,
            then_body,
            else_body,
        })
    }

    fn while_statement(&mut self) -> FrontendResult<Statement> {
        self.expect(TokenKind::Mientras)?;
        let condition = self.parse_condition()?;
        self.expect(TokenKind::Hacer)?;
        let body = self.block()?;
        Ok(Statement::While { condition, body })
    }

    // "begin" body "end"
    fn block(&mut self) -> FrontendResult<Body> {
        self.expect(TokenKind::Begin)?;
        let body = self.body()?;
        self.expect(TokenKind::End)?;
        Ok(body)
    }

    /**
     * condition = conjunction { "or" conjunction } ;
     */
    pub fn parse_condition(&mut self) -> FrontendResult<Condition> {
        let mut lhs = self.conjunction()?;
        while self.current.is(TokenKind::Or) {
            self.expect(TokenKind::Or)?;
            let rhs = self.conjunction()?;
            lhs = Condition::or(lhs, rhs);
        }
        Ok(lhs)
    }

    /**
     * conjunction = unary { "and" unary } ;
     */
    fn conjunction(&mut self) -> FrontendResult<Condition> {
        let mut lhs = self.unary_condition()?;
        while self.current.is(TokenKind::And) {
            self.expect(TokenKind::And)?;
            let rhs = self.unary_condition()?;
            lhs = Condition::and(lhs, rhs);
        }
        Ok(lhs)
    }

    /**
     * unary = "not" unary | "{" condition "}" | expression relop expression ;
     */
    fn unary_condition(&mut self) -> FrontendResult<Condition> {
        match self.current.kind {
            TokenKind::Not => {
                self.expect(TokenKind::Not)?;
                Ok(Condition::not(self.unary_condition()?))
            }
            TokenKind::LBrace => {
                self.expect(TokenKind::LBrace)?;
                let inner = self.parse_condition()?;
                self.expect(TokenKind::RBrace)?;
                Ok(inner)
            }
            _ => {
                let left = self.parse_expression()?;
                let relop = self.expect(TokenKind::RelOp)?;
                let operator = RelationalOperator::from_lexeme(&relop.lexeme).ok_or_else(|| {
                    FrontendError::Syntax {
                        expected: Some(TokenKind::RelOp),
                        found: relop.kind,
                        lexeme: relop.lexeme.clone(),
                        line: relop.line,
                        column: relop.column,
                        context: Some("condition"),
                    }
                })?;
                let right = self.parse_expression()?;
                Ok(Condition::relational(left, operator, right))
            }
        }
    }

    /**
     * expression = term { ( "+" | "-" ) term } ;
     */
    pub fn parse_expression(&mut self) -> FrontendResult<Expression> {
        self.binary_tier(ADDITIVE_OPERATORS, Self::term)
    }

    /**
     * term = power { ( "*" | "/" ) power } ;
     */
    fn term(&mut self) -> FrontendResult<Expression> {
        self.binary_tier(MULTIPLICATIVE_OPERATORS, Self::power)
    }

    /**
     * power = atom { "^" atom } ;
     *
     * Folded like the other tiers, so `a ^ b ^ c` groups as `(a ^ b) ^ c`.
     */
    fn power(&mut self) -> FrontendResult<Expression> {
        self.binary_tier(EXPONENT_OPERATORS, Self::atom)
    }

    // Left fold: operand { op operand }, each result becoming the next left child.
    fn binary_tier(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> FrontendResult<Expression>,
    ) -> FrontendResult<Expression> {
        let mut lhs = operand(self)?;
        while let Some(operator) = self.operator_in(operators) {
            self.advance(None)?;
            let rhs = operand(self)?;
            lhs = Expression::binary(operator, lhs, rhs);
        }
        Ok(lhs)
    }

    fn operator_in(&self, operators: &[TokenKind]) -> Option<BinaryOperator> {
        if self.check(operators) {
            BinaryOperator::from_kind(self.current.kind)
        } else {
            None
        }
    }

    /**
     * atom = "(" expression ")"
     *      | ident [ "[" expression "," expression "]" ]
     *      | number
     *      | ( "filas" | "columnas" | "transpuesta" ) "(" expression ")" ;
     */
    fn atom(&mut self) -> FrontendResult<Expression> {
        match self.current.kind {
            TokenKind::LParen => {
                self.expect(TokenKind::LParen)?;
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Identifier => {
                let name = self.expect(TokenKind::Identifier)?.lexeme;
                if self.current.is(TokenKind::LBracket) {
                    let (row_index, col_index) = self.matrix_indices()?;
                    Ok(Expression::matrix_access(name, row_index, col_index))
                } else {
                    Ok(Expression::Variable(name))
                }
            }
            TokenKind::RealLiteral => {
                let lexeme = self.expect(TokenKind::RealLiteral)?.lexeme;
                Ok(Expression::Constant(lexeme))
            }
            kind => match MatrixFunction::from_kind(kind) {
                Some(function) => {
                    self.expect(kind)?;
                    self.expect(TokenKind::LParen)?;
                    let argument = self.parse_expression()?;
                    self.expect(TokenKind::RParen)?;
                    Ok(Expression::matrix_function(function, argument))
                }
                None => Err(self.unexpected("factor")),
            },
        }
    }
}

/// Parses a whole program from a token sequence.
pub fn parse_program(tokens: &[Token]) -> FrontendResult<Program> {
    Parser::new(tokens).parse()
}

/// Parses a token sequence holding exactly one arithmetic expression.
pub fn parse_expression(tokens: &[Token]) -> FrontendResult<Expression> {
    let mut parser = Parser::new(tokens);
    let expression = parser.parse_expression()?;
    parser.expect_end()?;
    Ok(expression)
}

/// Parses a token sequence holding exactly one condition.
pub fn parse_condition(tokens: &[Token]) -> FrontendResult<Condition> {
    let mut parser = Parser::new(tokens);
    let condition = parser.parse_condition()?;
    parser.expect_end()?;
    Ok(condition)
}

/// Parses a token sequence holding exactly one statement.
pub fn parse_statement(tokens: &[Token]) -> FrontendResult<Statement> {
    let mut parser = Parser::new(tokens);
    let statement = parser.parse_statement()?;
    parser.expect_end()?;
    Ok(statement)
}
