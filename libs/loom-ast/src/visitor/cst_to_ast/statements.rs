//! # Statement Transformation
//!
//! The grammar wraps every statement in a `Statement` node. The wrapper is
//! skipped and its single significant child is dispatched on its kind.

use super::expressions::{transform_function_call, transform_expression};
use super::{expect_kind, required_child, with_stack};
use crate::ast::{Expression, Statement};
use crate::error::TransformError;
use loom_cst::{CstNode, NodeKind};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Transform a `Statement` wrapper node.
///
/// ## CST Structure
///
/// ```text
/// Statement
/// └── AssignmentStatement | ReturnStatement | ReplyStatement
///     | FunctionInvocationStatement | IfElseStatement | WhileStatement | Block
/// ```
pub fn transform_statement(node: &CstNode) -> Result<Statement, TransformError> {
    expect_kind(node, NodeKind::Statement)?;
    let mut significant = node.significant_children();
    match (significant.next(), significant.next()) {
        (Some(inner), None) => with_stack(|| transform_inner(inner)),
        (None, _) => Err(TransformError::malformed(node.span, "empty statement wrapper")),
        (Some(_), Some(extra)) => Err(TransformError::malformed(
            extra.span,
            "statement wrapper holds more than one statement",
        )),
    }
}

fn transform_inner(node: &CstNode) -> Result<Statement, TransformError> {
    tracing::trace!(kind = ?node.kind, "statement");
    match node.kind {
        NodeKind::AssignmentStatement => transform_assignment(node),
        NodeKind::ReturnStatement => transform_return(node),
        NodeKind::ReplyStatement => transform_reply(node),
        NodeKind::FunctionInvocationStatement => transform_invocation(node),
        NodeKind::IfElseStatement => transform_if_else(node),
        NodeKind::WhileStatement => transform_while(node),
        NodeKind::Block => Ok(Statement::Block {
            statements: transform_block(node)?,
            span: node.span,
        }),
        other => Err(TransformError::malformed(
            node.span,
            format!("{other:?} is not a statement"),
        )),
    }
}

/// Operands of a statement node: significant children minus operator tokens.
fn operands(node: &CstNode) -> Vec<&CstNode> {
    node.significant_children()
        .filter(|c| c.kind != NodeKind::Operator)
        .collect()
}

// =============================================================================
// SIMPLE STATEMENTS
// =============================================================================

/// `target = value;` where the target is a variable or array element.
fn transform_assignment(node: &CstNode) -> Result<Statement, TransformError> {
    let operands = operands(node);
    let &[target, value] = operands.as_slice() else {
        return Err(TransformError::malformed(
            node.span,
            "assignment needs a target and a value",
        ));
    };
    if !matches!(
        target.kind,
        NodeKind::VariableReference | NodeKind::ArrayElementReference
    ) {
        return Err(TransformError::malformed(
            target.span,
            format!("cannot assign to {:?}", target.kind),
        ));
    }
    Ok(Statement::Assignment {
        target: transform_expression(target)?,
        value: transform_expression(value)?,
        span: node.span,
    })
}

/// `return;` or `return a, b;`
fn transform_return(node: &CstNode) -> Result<Statement, TransformError> {
    let values = operands(node)
        .into_iter()
        .map(transform_expression)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Statement::Return {
        values,
        span: node.span,
    })
}

/// `reply m;`
fn transform_reply(node: &CstNode) -> Result<Statement, TransformError> {
    let operands = operands(node);
    let &[value] = operands.as_slice() else {
        return Err(TransformError::malformed(node.span, "reply needs exactly one value"));
    };
    Ok(Statement::Reply {
        value: transform_expression(value)?,
        span: node.span,
    })
}

/// `log(msg);`
fn transform_invocation(node: &CstNode) -> Result<Statement, TransformError> {
    let call = required_child(node, NodeKind::FunctionInvocation, "invocation statement")?;
    Ok(Statement::FunctionInvocation {
        call: transform_function_call(call)?,
        span: node.span,
    })
}

// =============================================================================
// COMPOUND STATEMENTS
// =============================================================================

/// `{ statements }`
fn transform_block(node: &CstNode) -> Result<Vec<Statement>, TransformError> {
    expect_kind(node, NodeKind::Block)?;
    let mut statements = Vec::new();
    for child in node.significant_children() {
        statements.push(transform_statement(child)?);
    }
    Ok(statements)
}

/// The single expression child of a conditional statement.
fn condition_of(node: &CstNode, what: &str) -> Result<Expression, TransformError> {
    let mut conditions = node
        .significant_children()
        .filter(|c| c.kind.is_expression());
    let condition = conditions
        .next()
        .ok_or_else(|| TransformError::malformed(node.span, format!("{what} missing condition")))?;
    if let Some(extra) = conditions.next() {
        return Err(TransformError::malformed(
            extra.span,
            format!("{what} has more than one condition"),
        ));
    }
    transform_expression(condition)
}

/// `if (cond) { ... } else { ... }`
fn transform_if_else(node: &CstNode) -> Result<Statement, TransformError> {
    let condition = condition_of(node, "if statement")?;
    let mut blocks = node.find_children(NodeKind::Block);
    let then_body = blocks
        .next()
        .map(transform_block)
        .transpose()?
        .ok_or_else(|| TransformError::malformed(node.span, "if statement missing body"))?;
    let else_body = blocks.next().map(transform_block).transpose()?;
    if let Some(extra) = blocks.next() {
        return Err(TransformError::malformed(
            extra.span,
            "if statement has more than two bodies",
        ));
    }

    Ok(Statement::IfElse {
        condition,
        then_body,
        else_body,
        span: node.span,
    })
}

/// `while (cond) { ... }`
fn transform_while(node: &CstNode) -> Result<Statement, TransformError> {
    let condition = condition_of(node, "while statement")?;
    let mut blocks = node.find_children(NodeKind::Block);
    let body = blocks
        .next()
        .map(transform_block)
        .transpose()?
        .ok_or_else(|| TransformError::malformed(node.span, "while statement missing Block"))?;
    if let Some(extra) = blocks.next() {
        return Err(TransformError::malformed(
            extra.span,
            "while statement has more than one body",
        ));
    }
    Ok(Statement::While {
        condition,
        body,
        span: node.span,
    })
}

// =============================================================================
// TESTS
// =============================================================================
