//! # AST Visitors
//!
//! ## Structure
//!
//! ```text
//! visitor/
//! ├── mod.rs            - This file
//! └── cst_to_ast/       - CST to AST transformation
//!     ├── mod.rs        - Compilation unit and services
//!     ├── resources.rs  - Resource orchestration
//!     ├── annotations.rs
//!     ├── declarations.rs
//!     ├── statements.rs
//!     └── expressions.rs
//! ```

pub mod cst_to_ast;
