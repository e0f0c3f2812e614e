use crate::ast::{Condition, Expression};
use serde::Serialize;

/// Statements of a `begin ... end` block, in source order. May be empty.
pub type Body = Vec<Statement>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Assignment {
        variable: String,
        value: Expression,
    },
    MatrixAssignment {
        variable: String,
        row_index: Expression,
        col_index: Expression,
        value: Expression,
    },
    Read {
        /// Prompt text without the surrounding quotes.
        prompt: String,
        variable: String,
    },
    Write {
        elements: Vec<WriteElement>,
    },
    If {
        condition: Condition,
        then_body: Body,
        else_body: Option<Body>,
    },
    While {
        condition: Condition,
        body: Body,
    },
}

impl Statement {
    pub fn assignment(variable: impl Into<String>, value: Expression) -> Self {
        Statement::Assignment {
            variable: variable.into(),
            value,
        }
    }

    pub fn matrix_assignment(
        variable: impl Into<String>,
        row_index: Expression,
        col_index: Expression,
        value: Expression,
    ) -> Self {
        Statement::MatrixAssignment {
            variable: variable.into(),
            row_index,
            col_index,
            value,
        }
    }

    pub fn read(prompt: impl Into<String>, variable: impl Into<String>) -> Self {
        Statement::Read {
            prompt: prompt.into(),
            variable: variable.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WriteElement {
    /// String literal contents without the surrounding quotes.
    Text(String),
    Expression(Expression),
}
