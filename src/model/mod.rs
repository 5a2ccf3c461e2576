//! # Model Module
//!
//! The model module holds the resolved API-surface metadata that drives
//! documentation generation.
//!
//! ## Overview
//!
//! A [`TypeModel`] is the read-only facade over an already-resolved API
//! surface: the controller's identity, its action methods in declaration
//! order, and the deduplicated set of data-transfer types reachable from the
//! surface. How that resolution happened (reflection, an IDL, a compile-time
//! metadata dump) is deliberately outside this crate; the model arrives in
//! full before generation starts and is never mutated afterwards.
//!
//! [`load_model`] deserializes a model from a JSON or YAML dump and applies
//! the fail-fast validation rules: a malformed upstream model (empty
//! controller name, unnamed action, duplicate parameter names) is an error,
//! never something to paper over, because the generated text is copy-pasted
//! directly into client code.

mod load;
mod types;

pub use load::load_model;
pub use types::{ActionMethodMeta, ControllerMeta, DtoTypeMeta, ParameterMeta, TypeModel};
