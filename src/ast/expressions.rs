use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, ExprType, ExprWrapper, TypeWrapper};

// LITERALS

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

impl Expr for IntegerExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Integer
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Rational Expression
/// Represents a rational literal in the AST. A trailing dot with no
/// fractional digits (`3.`) is still a rational.
#[derive(Debug, Clone)]
pub struct RationalExpr {
    pub value: f64,
    pub span: Span,
}

impl Expr for RationalExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Rational
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Boolean Expression
/// Represents a `true` or `false` literal in the AST.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BooleanExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// None Expression
/// Represents the `none` literal in the AST.
#[derive(Debug, Clone)]
pub struct NoneExpr {
    pub span: Span,
}

impl Expr for NoneExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::None
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes function names.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// COMPLEX

/// Group Expression
/// Represents a parenthesized expression in the AST.
#[derive(Debug, Clone)]
pub struct GroupExpr {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Expr for GroupExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Group
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// List Expression
/// Represents a list literal in the AST. Elements preserve source order
/// and may be empty.
#[derive(Debug, Clone)]
pub struct ListExpr {
    pub elements: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for ListExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::List
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Unary Expression
/// Represents a prefix `-` or `!` operation on an expression in the AST.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for UnaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Unary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Assignment Expression
/// Represents `name = value` in the AST. The target is always a plain
/// identifier.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub name: String,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Expr for AssignmentExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assignment
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Declaration Expression
/// Represents `name : type? = value` in the AST. The colon is mandatory
/// for a declaration; the type annotation after it is optional.
#[derive(Debug, Clone)]
pub struct DeclarationExpr {
    pub name: String,
    pub explicit_type: Option<TypeWrapper>,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Expr for DeclarationExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Declaration
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Call Expression
/// Represents a function call in the AST. Arguments preserve source order
/// and may be empty.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Get Item Expression
/// Represents an index operation `left[index]` in the AST.
#[derive(Debug, Clone)]
pub struct GetItemExpr {
    pub left: ExprWrapper,
    pub index: ExprWrapper,
    pub span: Span,
}

impl Expr for GetItemExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::GetItem
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
