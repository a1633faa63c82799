#![warn(clippy::pedantic)]
//! Arena-backed construction of a Verilog abstract syntax tree.
//!
//! A parser drives a [`builder::Builder`], one call per grammar reduction. The
//! builder records every node in an [`arena::Arena`] that the driver owns and
//! releases in one step once the tree is no longer needed.

pub mod arena;
pub mod builder;
pub(crate) mod enums_impl;
pub mod errors;
pub mod list;
pub mod nodes;
pub(crate) mod nodes_impl;
