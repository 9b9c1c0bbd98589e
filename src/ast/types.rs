use std::any::Any;

use crate::Span;

use super::ast::{Type, TypeType, TypeWrapper};

/// The built-in scalar type names. `none` doubles as a type name in type
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicTypeKind {
    None,
    Int,
    Ratio,
    Bool,
    Str,
    Any,
}

/// Basic Type
/// One of the built-in scalar types.
#[derive(Debug, Clone)]
pub struct BasicType {
    pub kind: BasicTypeKind,
    pub span: Span,
}

impl Type for BasicType {
    fn get_type_type(&self) -> TypeType {
        TypeType::Basic(self.kind)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// List Type
/// `list[element]` - a homogeneous list of the element type.
#[derive(Debug, Clone)]
pub struct ListType {
    pub element: TypeWrapper,
    pub span: Span,
}

impl Type for ListType {
    fn get_type_type(&self) -> TypeType {
        TypeType::List
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Func Type
/// `func[[parameter types], return type]` - a function signature.
/// Parameter types preserve declaration order and may be empty.
#[derive(Debug, Clone)]
pub struct FuncType {
    pub parameter_types: Vec<TypeWrapper>,
    pub return_type: TypeWrapper,
    pub span: Span,
}

impl Type for FuncType {
    fn get_type_type(&self) -> TypeType {
        TypeType::Func
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
