//! Semantic tree nodes produced from the CST.
//!
//! Sequences inside every node keep source order; nothing here reorders,
//! deduplicates or merges children.

use loom_cst::Span;
use serde::{Deserialize, Serialize};

/// Result of transforming a whole compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    pub services: Vec<Service>,
}

impl Ast {
    pub fn with_services(services: Vec<Service>) -> Self {
        Self { services }
    }
}

/// A declared service owning its resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub resources: Vec<Resource>,
    pub span: Span,
}

/// An annotated, parameter-free unit of behavior inside a service.
///
/// The name is fixed at construction. Annotations, local variables and
/// statements can only be appended, in source order.
///
/// # Example
///
/// ```rust
/// use loom_ast::{Resource, Statement};
/// use loom_cst::Span;
///
/// let mut resource = Resource::new("echo", Span::zero());
/// resource.add_statement(Statement::Return { values: Vec::new(), span: Span::zero() });
/// assert_eq!(resource.name(), "echo");
/// assert_eq!(resource.statements().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    name: String,
    annotations: Vec<Annotation>,
    local_variables: Vec<VariableDecl>,
    statements: Vec<Statement>,
    span: Span,
}

impl Resource {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            local_variables: Vec::new(),
            statements: Vec::new(),
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn local_variables(&self) -> &[VariableDecl] {
        &self.local_variables
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn add_variable(&mut self, variable: VariableDecl) {
        self.local_variables.push(variable);
    }

    pub fn add_statement(&mut self, statement: Statement) {
        self.statements.push(statement);
    }
}

/// Annotation storage only; meaning is assigned by later passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub value: Option<String>,
    pub attributes: Vec<AnnotationAttribute>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDecl {
    pub name: String,
    pub var_type: TypeRef,
    pub span: Span,
}

/// Declared type of a variable: an element type name plus array depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub array_dims: usize,
}

impl TypeRef {
    /// Splits trailing `[]` pairs off a type name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loom_ast::TypeRef;
    ///
    /// let ty = TypeRef::parse("int[][]").unwrap();
    /// assert_eq!(ty.name, "int");
    /// assert_eq!(ty.array_dims, 2);
    /// assert!(TypeRef::parse("[]").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut rest = text.trim();
        let mut array_dims = 0;
        while let Some(stripped) = rest.strip_suffix("[]") {
            rest = stripped.trim_end();
            array_dims += 1;
        }
        if rest.is_empty() || rest.contains(&['[', ']'][..]) || rest.contains(char::is_whitespace) {
            return None;
        }
        Some(Self {
            name: rest.to_string(),
            array_dims,
        })
    }

    pub fn is_array(&self) -> bool {
        self.array_dims > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Assignment {
        target: Expression,
        value: Expression,
        span: Span,
    },
    Return {
        values: Vec<Expression>,
        span: Span,
    },
    Reply {
        value: Expression,
        span: Span,
    },
    FunctionInvocation {
        call: FunctionCall,
        span: Span,
    },
    IfElse {
        condition: Expression,
        then_body: Vec<Statement>,
        else_body: Option<Vec<Statement>>,
        span: Span,
    },
    While {
        condition: Expression,
        body: Vec<Statement>,
        span: Span,
    },
    Block {
        statements: Vec<Statement>,
        span: Span,
    },
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Assignment { span, .. }
            | Statement::Return { span, .. }
            | Statement::Reply { span, .. }
            | Statement::FunctionInvocation { span, .. }
            | Statement::IfElse { span, .. }
            | Statement::While { span, .. }
            | Statement::Block { span, .. } => *span,
        }
    }
}

/// A call target, optionally qualified by package (`system:println`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub package: Option<String>,
    pub name: String,
    pub args: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Variable {
        name: String,
        span: Span,
    },
    ArrayElement {
        name: String,
        index: Box<Expression>,
        span: Span,
    },
    FunctionInvocation {
        call: FunctionCall,
        span: Span,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
        span: Span,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
        span: Span,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            "<" => Self::Lt,
            "<=" => Self::LtEq,
            ">" => Self::Gt,
            ">=" => Self::GtEq,
            "&&" => Self::And,
            "||" => Self::Or,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(Self::Neg),
            "!" => Some(Self::Not),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_plain() {
        assert_eq!(
            TypeRef::parse("string"),
            Some(TypeRef {
                name: "string".into(),
                array_dims: 0,
            })
        );
    }

    #[test]
    fn type_ref_rejects_garbage() {
        assert!(TypeRef::parse("").is_none());
        assert!(TypeRef::parse("int[3]").is_none());
        assert!(TypeRef::parse("two words").is_none());
    }

    #[test]
    fn resource_appends_in_order() {
        let mut resource = Resource::new("r", Span::zero());
        for n in 0..3 {
            resource.add_statement(Statement::Reply {
                value: Expression::Integer(n),
                span: Span::zero(),
            });
        }
        let values: Vec<_> = resource
            .statements()
            .iter()
            .map(|s| match s {
                Statement::Reply {
                    value: Expression::Integer(n),
                    ..
                } => *n,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn operators_from_symbols() {
        assert_eq!(BinaryOp::from_symbol("<="), Some(BinaryOp::LtEq));
        assert_eq!(BinaryOp::from_symbol("^"), None);
        assert_eq!(UnaryOp::from_symbol("!"), Some(UnaryOp::Not));
    }
}
