//! Abstract syntax tree for the LAN source language
//!
//! This module defines the tree the external parser builds and the code
//! generator consumes:
//! - [`nodes`]: node variants, type/shape tags, and factory constructors
//! - [`printer`]: diagnostic tree renderer
//!
//! # Tree Shape
//!
//! The tree is a closed tagged union: one variant per language construct,
//! each carrying only the fields that construct needs. Children are owned
//! by value (boxed), absence is typed as `Option`, and nodes are never
//! mutated after construction. Statement sequences and parameter/argument
//! lists are cons-style nodes rather than vectors; list heads hold the most
//! recently prepended element, which the generator accounts for when
//! restoring source order.

pub mod nodes;
pub mod printer;
