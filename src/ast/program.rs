use crate::ast::Body;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub name: String,
    pub declarations: Declaration,
    pub body: Body,
}

impl Program {
    pub fn new(name: impl Into<String>, declarations: Declaration, body: Body) -> Self {
        Self {
            name: name.into(),
            declarations,
            body,
        }
    }
}

/// The `var` section, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Declaration {
    pub variables: Vec<VariableDecl>,
}

impl Declaration {
    pub fn new(variables: Vec<VariableDecl>) -> Self {
        Self { variables }
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDecl {
    pub name: String,
    pub var_type: VarType,
}

impl VariableDecl {
    pub fn new(name: impl Into<String>, var_type: VarType) -> Self {
        Self {
            name: name.into(),
            var_type,
        }
    }

    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, VarType::Real)
    }

    pub fn matrix(name: impl Into<String>, rows: impl Into<String>, columns: impl Into<String>) -> Self {
        Self::new(
            name,
            VarType::Matrix {
                rows: rows.into(),
                columns: columns.into(),
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VarType {
    Real,
    /// Bounds are kept as written; range checking belongs to later phases.
    Matrix { rows: String, columns: String },
}

impl VarType {
    pub fn is_matrix(&self) -> bool {
        matches!(self, VarType::Matrix { .. })
    }
}
