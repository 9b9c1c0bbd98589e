use std::{
    any::Any,
    slice::{Iter, IterMut},
};

use crate::Span;

use super::ast::{ExprWrapper, Stmt, StmtType, StmtWrapper, TypeWrapper};

/// Program
/// The root of a syntax tree: the ordered sequence of top-level statements.
/// Returned to the caller, which owns it exclusively.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, StmtWrapper> {
        self.statements.iter_mut()
    }
}

impl Stmt for Program {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::Program
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Block Statement
/// A braced sequence of statements. May be empty.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Expression Statement
/// An expression followed by `;`.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// If Statement
/// The body and else body may be any statement, not necessarily blocks.
/// An `else` always attaches to the nearest enclosing `if` without one.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: ExprWrapper,
    pub then_body: StmtWrapper,
    pub else_body: Option<StmtWrapper>,
    pub span: Span,
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// While Statement
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: ExprWrapper,
    pub body: StmtWrapper,
    pub span: Span,
}

impl Stmt for WhileStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::WhileStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Return Statement
/// The value is mandatory: there is no bare `return;` form.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: ExprWrapper,
    pub span: Span,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A single `name : type` entry in a function declaration's parameter list.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub param_type: TypeWrapper,
    pub span: Span,
}

/// Function Declaration Statement
/// The body must be a braced block; the return type is optional.
#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeWrapper>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for FnDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FnDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
