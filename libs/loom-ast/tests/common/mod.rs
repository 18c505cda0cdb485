//! Shared CST builders for integration tests.

#![allow(dead_code)]

use loom_cst::{CstNode, NodeKind, Span};

pub fn leaf(kind: NodeKind, text: &str) -> CstNode {
    CstNode::leaf(kind, Span::zero(), text)
}

pub fn node(kind: NodeKind, children: Vec<CstNode>) -> CstNode {
    CstNode::branch(kind, Span::zero(), children)
}

pub fn annotation(name: &str) -> CstNode {
    node(NodeKind::Annotation, vec![leaf(NodeKind::Identifier, name)])
}

pub fn declaration(ty: &str, name: &str) -> CstNode {
    node(
        NodeKind::VariableDeclaration,
        vec![leaf(NodeKind::TypeName, ty), leaf(NodeKind::Identifier, name)],
    )
}

pub fn statement(inner: CstNode) -> CstNode {
    node(
        NodeKind::Statement,
        vec![inner, leaf(NodeKind::Semicolon, ";")],
    )
}

pub fn var(name: &str) -> CstNode {
    node(
        NodeKind::VariableReference,
        vec![leaf(NodeKind::Identifier, name)],
    )
}

pub fn return_of(values: Vec<CstNode>) -> CstNode {
    statement(node(NodeKind::ReturnStatement, values))
}

pub fn call(name: &str, args: Vec<CstNode>) -> CstNode {
    statement(node(
        NodeKind::FunctionInvocationStatement,
        vec![node(
            NodeKind::FunctionInvocation,
            vec![leaf(NodeKind::Identifier, name), node(NodeKind::ArgumentList, args)],
        )],
    ))
}

pub fn resource(
    name: &str,
    annotations: Vec<CstNode>,
    declarations: Vec<CstNode>,
    statements: Vec<CstNode>,
) -> CstNode {
    let mut body = declarations;
    body.extend(statements);
    let mut children = annotations;
    children.push(leaf(NodeKind::Identifier, name));
    children.push(node(NodeKind::FunctionBody, body));
    node(NodeKind::ResourceDefinition, children)
}
