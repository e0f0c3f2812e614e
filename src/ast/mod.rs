// Syntax tree for the matrix language front end.
//
// program     = "program" ident ";" declaration "begin" body "end" "." ;
// declaration = "var" { ident ":" type } ;
// type        = "real" ";"
//             | "matrix" "[" number "," number "]" "of" "real" ";" ;
// body        = [ statement { ";" statement } [ ";" ] ] ;
// statement   = ident ":=" expression
//             | ident "[" expression "," expression "]" ":=" expression
//             | "leer" "(" string "," ident ")"
//             | "escribir" "(" element { "," element } ")"
//             | "si" condition "entonces" "begin" body "end"
//               [ "sino" "begin" body "end" ]
//             | "mientras" condition "hacer" "begin" body "end" ;
// element     = string | expression ;
// condition   = conjunction { "or" conjunction } ;
// conjunction = unary { "and" unary } ;
// unary       = "not" unary | "{" condition "}" | expression relop expression ;
// expression  = term { ( "+" | "-" ) term } ;
// term        = power { ( "*" | "/" ) power } ;
// power       = atom { "^" atom } ;
// atom        = "(" expression ")" | ident [ "[" expression "," expression "]" ]
//             | number | ( "filas" | "columnas" | "transpuesta" ) "(" expression ")" ;

mod conditions;
mod expressions;
mod program;
mod statements;

pub use conditions::{Condition, RelationalOperator};
pub use expressions::{BinaryOperator, Expression, MatrixFunction};
pub use program::{Declaration, Program, VarType, VariableDecl};
pub use statements::{Body, Statement, WriteElement};
