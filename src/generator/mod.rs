//! # Generator Module
//!
//! The generator module turns a resolved [`TypeModel`](crate::model::TypeModel)
//! into the proxy documentation artifact.
//!
//! ## Overview
//!
//! Generation composes three independently rendered sections:
//!
//! 1. **Quick reference** - one invocation example per action method, derived
//!    by [`render_invocation`] from the action's payload type and parameter
//!    list
//! 2. **Proxy configuration example** - a fixed resilience-configuration
//!    snippet (retries, cache policy, circuit breaker) parameterized only by
//!    the controller name, produced once per run
//! 3. **Remote data provider registrations** - emitted only when the
//!    deployment's [`ProviderBinder`] reports a local counterpart for at
//!    least one DTO type
//!
//! ## Architecture
//!
//! ```text
//! TypeModel → signature resolution ─┐
//!           → provider matching ────┼→ assemble → README text
//!           → config template ──────┘
//! ```
//!
//! Fixed-shape text blocks are Askama templates under `templates/`; the
//! algorithmic parts (invocation lines, section ordering) are plain Rust.
//! Everything here is a pure function of its inputs: no caching, no shared
//! state, no I/O except the final [`write_readme`] step.

mod providers;
mod readme;
mod signature;
mod templates;

pub use providers::{match_data_providers, ProviderBinder};
pub use readme::{
    assemble, generate_readme, render_data_providers, render_proxy_config,
    render_quick_reference, write_readme,
};
pub use signature::{render_invocation, InvocationExample};
