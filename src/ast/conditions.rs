use crate::ast::Expression;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelationalOperator {
    LessEqual,
    GreaterEqual,
    NotEqual,
    Less,
    Greater,
    Equal,
}

impl RelationalOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "<=" => Some(RelationalOperator::LessEqual),
            ">=" => Some(RelationalOperator::GreaterEqual),
            "<>" => Some(RelationalOperator::NotEqual),
            "<" => Some(RelationalOperator::Less),
            ">" => Some(RelationalOperator::Greater),
            "=" => Some(RelationalOperator::Equal),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RelationalOperator::LessEqual => "<=",
            RelationalOperator::GreaterEqual => ">=",
            RelationalOperator::NotEqual => "<>",
            RelationalOperator::Less => "<",
            RelationalOperator::Greater => ">",
            RelationalOperator::Equal => "=",
        }
    }
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Condition {
    Or(Box<Condition>, Box<Condition>),
    And(Box<Condition>, Box<Condition>),
    Not(Box<Condition>),
    Relational {
        left: Expression,
        operator: RelationalOperator,
        right: Expression,
    },
}

impl Condition {
    pub fn or(left: Condition, right: Condition) -> Self {
        Condition::Or(Box::new(left), Box::new(right))
    }

    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And(Box::new(left), Box::new(right))
    }

    pub fn not(inner: Condition) -> Self {
        Condition::Not(Box::new(inner))
    }

    pub fn relational(left: Expression, operator: RelationalOperator, right: Expression) -> Self {
        Condition::Relational { left, operator, right }
    }
}
