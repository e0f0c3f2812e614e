use crate::frontend::token::TokenKind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Caret => Some(BinaryOperator::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Built-in matrix functions, named as they are spelled in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatrixFunction {
    Rows,
    Columns,
    Transpose,
}

impl MatrixFunction {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Filas => Some(MatrixFunction::Rows),
            TokenKind::Columnas => Some(MatrixFunction::Columns),
            TokenKind::Transpuesta => Some(MatrixFunction::Transpose),
            _ => None,
        }
    }

    pub fn keyword(&self) -> TokenKind {
        match self {
            MatrixFunction::Rows => TokenKind::Filas,
            MatrixFunction::Columns => TokenKind::Columnas,
            MatrixFunction::Transpose => TokenKind::Transpuesta,
        }
    }
}

impl fmt::Display for MatrixFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Variable(String),
    /// Numeric literal kept as its source lexeme.
    Constant(String),
    MatrixAccess {
        variable: String,
        row_index: Box<Expression>,
        col_index: Box<Expression>,
    },
    MatrixFunction {
        function: MatrixFunction,
        argument: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn constant(lexeme: impl Into<String>) -> Self {
        Expression::Constant(lexeme.into())
    }

    pub fn matrix_access(variable: impl Into<String>, row_index: Expression, col_index: Expression) -> Self {
        Expression::MatrixAccess {
            variable: variable.into(),
            row_index: Box::new(row_index),
            col_index: Box::new(col_index),
        }
    }

    pub fn matrix_function(function: MatrixFunction, argument: Expression) -> Self {
        Expression::MatrixFunction {
            function,
            argument: Box::new(argument),
        }
    }
}
