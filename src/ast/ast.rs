use std::{any::Any, fmt::Debug, ops::Deref};

use super::types::BasicTypeKind;

/// Statement Types
#[derive(PartialEq, Debug)]
pub enum StmtType {
    Program,
    ExpressionStmt,
    BlockStmt,
    IfStmt,
    WhileStmt,
    ReturnStmt,
    FnDeclStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Debug {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the span of the statement.
    fn get_span(&self) -> &crate::Span;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Debug)]
pub enum ExprType {
    Integer,
    Rational,
    String,
    Boolean,
    None,
    Symbol,
    Group,
    List,
    Unary,
    Binary,
    Assignment,
    Declaration,
    Call,
    GetItem,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &crate::Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Expr for ExprWrapper {
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Type Types
///
/// Defines the various kinds of type annotations in the AST.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeType {
    Basic(BasicTypeKind),
    List,
    Func,
}

/// Type Trait
///
/// Defines the behavior of all type annotation kinds in the AST.
pub trait Type: Debug {
    /// Returns the type type of the type.
    fn get_type_type(&self) -> TypeType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the type into a TypeWrapper.
    fn clone_wrapper(&self) -> TypeWrapper;
    /// Returns the span of the type.
    fn get_span(&self) -> &crate::Span;
}

/// Type Wrapper
///
/// A wrapper that allows for any type annotation kind to be stored with helper methods
#[derive(Debug)]
pub struct TypeWrapper(Box<dyn Type>);

impl TypeWrapper {
    pub fn new<T: Type + 'static>(type_: T) -> Self {
        TypeWrapper(Box::new(type_))
    }
}

impl Type for TypeWrapper {
    fn get_type_type(&self) -> TypeType {
        self.0.get_type_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> TypeWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

impl Clone for TypeWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}
