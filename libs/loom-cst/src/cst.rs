//! # Concrete Syntax Tree
//!
//! The tree the external parser hands over. Node kinds are a closed enum and
//! children stay in source order, including trivia; the transformer decides
//! what is significant.
//!
//! ## Example
//!
//! ```rust
//! use loom_cst::{Cst, CstNode, NodeKind, Span};
//!
//! let unit = CstNode::branch(NodeKind::CompilationUnit, Span::zero(), Vec::new());
//! assert!(Cst::new(unit, Vec::new()).is_ok());
//! ```

use crate::error::{CstError, ParseError};
use crate::span::Span;
use serde::{Deserialize, Serialize};

// =============================================================================
// TREE
// =============================================================================

/// A parsed compilation unit together with everything the parser skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cst {
    pub root: CstNode,
    #[serde(default)]
    pub errors: Vec<ParseError>,
}

impl Cst {
    pub fn new(root: CstNode, errors: Vec<ParseError>) -> Self {
        Self { root, errors }
    }

    /// True when the parser recovered from nothing.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Load a tree serialized by an out-of-process parser.
    ///
    /// Nesting depth is unbounded; the stack grows on demand while
    /// deserializing deeply nested expressions.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use loom_cst::{Cst, NodeKind};
    ///
    /// let json = r#"{
    ///     "root": { "kind": "compilation_unit", "span": { "start": 0, "end": 0 } }
    /// }"#;
    /// let cst = Cst::from_json(json).unwrap();
    /// assert_eq!(cst.root.kind, NodeKind::CompilationUnit);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CstError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let cst = Cst::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(cst)
    }

    pub fn to_json(&self) -> Result<String, CstError> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// NODES
// =============================================================================

/// One grammar node. Terminals carry their token `text`; interior nodes
/// carry `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CstNode {
    pub kind: NodeKind,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CstNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CstNode {
    /// Interior node with no children yet.
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self::branch(kind, span, Vec::new())
    }

    /// Terminal carrying token text.
    pub fn leaf(kind: NodeKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(kind, span)
        }
    }

    pub fn branch(kind: NodeKind, span: Span, children: Vec<CstNode>) -> Self {
        CstNode {
            kind,
            span,
            children,
            text: None,
        }
    }

    pub fn push(&mut self, child: CstNode) {
        self.children.push(child);
    }

    /// Token text, or `""` for interior nodes.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    pub fn find_child(&self, kind: NodeKind) -> Option<&CstNode> {
        self.find_children(kind).next()
    }

    /// Children of `kind`, in source order.
    pub fn find_children(&self, kind: NodeKind) -> impl Iterator<Item = &CstNode> + '_ {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Children that are not comments or separators, in source order.
    pub fn significant_children(&self) -> impl Iterator<Item = &CstNode> + '_ {
        self.children.iter().filter(|c| !c.kind.is_trivia())
    }

    pub fn is_error(&self) -> bool {
        self.kind == NodeKind::Error
    }

    /// Every error node in this subtree, depth first.
    pub fn error_nodes(&self) -> Vec<&CstNode> {
        let mut found = Vec::new();
        collect_error_nodes(self, &mut found);
        found
    }
}

fn collect_error_nodes<'a>(node: &'a CstNode, found: &mut Vec<&'a CstNode>) {
    if node.is_error() {
        found.push(node);
    }
    for child in &node.children {
        collect_error_nodes(child, found);
    }
}

// =============================================================================
// NODE KIND
// =============================================================================

/// Types of CST nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    // Top-level
    /// Root node containing all service definitions.
    CompilationUnit,
    /// Service like `service Echo { ... }`
    ServiceDefinition,
    /// Resource like `resource echo() { ... }`
    ResourceDefinition,
    /// Annotation like `@Path("/echo")`
    Annotation,
    /// Annotation key/value pair like `method = "GET"`
    AnnotationAttribute,
    /// Resource body `{ declarations statements }`
    FunctionBody,
    /// Local declaration like `int count;`
    VariableDeclaration,
    /// Type name like `int` or `string[]`
    TypeName,

    // Statements
    /// Wrapper around exactly one concrete statement.
    Statement,
    /// Assignment like `x = 10;`
    AssignmentStatement,
    /// Return like `return msg;`
    ReturnStatement,
    /// Reply like `reply m;`
    ReplyStatement,
    /// Call used as a statement like `log(msg);`
    FunctionInvocationStatement,
    /// If statement like `if (x > 0) { ... } else { ... }`
    IfElseStatement,
    /// While loop like `while (i < 10) { ... }`
    WhileStatement,
    /// Block of statements `{ ... }`
    Block,

    // Expressions
    /// Binary operation like `a + b`
    BinaryExpression,
    /// Unary operation like `-x` or `!x`
    UnaryExpression,
    /// Parenthesized expression like `(a + b)`
    ParenthesizedExpression,
    /// Call like `system:println(x)`
    FunctionInvocation,
    /// Arguments list `(a, b)`
    ArgumentList,
    /// Variable use like `msg`
    VariableReference,
    /// Indexed access like `items[0]`
    ArrayElementReference,

    // Terminals
    /// Identifier like `echo` or `system:println`
    Identifier,
    /// Operator token like `+` or `==`
    Operator,
    /// Integer literal like `10`
    IntegerLiteral,
    /// Float literal like `3.14`
    FloatLiteral,
    /// String literal like `"hello"`
    StringLiteral,
    /// Boolean literal `true` or `false`
    BooleanLiteral,
    /// `null`
    NullLiteral,

    // Other
    /// Semicolon
    Semicolon,
    /// Comment
    Comment,
    /// Error node inserted by parser recovery
    Error,
}

impl NodeKind {
    /// Check if this is a concrete statement node.
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::AssignmentStatement
                | Self::ReturnStatement
                | Self::ReplyStatement
                | Self::FunctionInvocationStatement
                | Self::IfElseStatement
                | Self::WhileStatement
                | Self::Block
        )
    }

    /// Check if this is an expression node.
    pub const fn is_expression(&self) -> bool {
        matches!(
            self,
            Self::BinaryExpression
                | Self::UnaryExpression
                | Self::ParenthesizedExpression
                | Self::FunctionInvocation
                | Self::VariableReference
                | Self::ArrayElementReference
                | Self::IntegerLiteral
                | Self::FloatLiteral
                | Self::StringLiteral
                | Self::BooleanLiteral
                | Self::NullLiteral
        )
    }

    /// Check if this is a literal node.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::IntegerLiteral
                | Self::FloatLiteral
                | Self::StringLiteral
                | Self::BooleanLiteral
                | Self::NullLiteral
        )
    }

    /// Comments and separators carry no meaning for the AST.
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment | Self::Semicolon)
    }
}

// =============================================================================
// TESTS
// =============================================================================
