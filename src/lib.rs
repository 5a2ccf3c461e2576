//! # proxygen
//!
//! **proxygen** generates human-readable usage documentation for strongly-typed
//! API client proxies, driven entirely by a resolved description of the
//! server-side API surface (a controller and its exposed action methods).
//!
//! ## Overview
//!
//! Given an immutable [`model::TypeModel`] — controller identity, ordered action
//! methods, and the data-transfer types reachable from the surface — proxygen
//! produces a single text artifact containing:
//!
//! - a **quick reference**: one canonical invocation example per action method,
//! - a **proxy configuration example**: the resilience options a consumer can
//!   chain onto a proxy instance (retries, cache policy, circuit breaker),
//! - a **remote data provider** section, emitted only when at least one DTO
//!   type has a local-entity data provider in the target deployment.
//!
//! ## Architecture
//!
//! The crate is organized into two modules:
//!
//! - **[`model`]** - the resolved API-surface metadata: plain immutable data
//!   plus a JSON/YAML loader with fail-fast validation
//! - **[`generator`]** - the emission engine: signature resolution,
//!   data-provider matching, template rendering, and document assembly
//!
//! ### Generation Flow
//!
//! ```text
//! metadata dump → model::load_model → TypeModel
//!                                        │
//!                 ┌──────────────────────┼──────────────────────┐
//!                 ▼                      ▼                      ▼
//!      render_invocation         render_proxy_config   match_data_providers
//!      (per action method)       (once per run)        (ProviderBinder probe)
//!                 └──────────────────────┼──────────────────────┘
//!                                        ▼
//!                                assemble → README text → write_readme
//! ```
//!
//! Generation is a single synchronous pass over the read-only model. Every
//! derived value is recomputed per run; nothing is cached, so re-running over
//! the same model is idempotent and produces byte-identical output.
//!
//! ## Quick Start
//!
//! ```rust
//! use proxygen::generator::generate_readme;
//! use proxygen::model::{ActionMethodMeta, ControllerMeta, ParameterMeta, TypeModel};
//!
//! let model = TypeModel::new(
//!     ControllerMeta {
//!         full_name: "Demo.Orders.OrderController".to_string(),
//!         actions: vec![ActionMethodMeta {
//!             name: "GetTotal".to_string(),
//!             return_type: Some("Money".to_string()),
//!             parameters: vec![ParameterMeta {
//!                 name: "orderId".to_string(),
//!                 type_name: "Guid".to_string(),
//!             }],
//!         }],
//!     },
//!     vec![],
//! );
//!
//! // No deployment-local data providers: the probe always comes back empty.
//! let readme = generate_readme(&model, &|_dto: &proxygen::model::DtoTypeMeta| String::new())
//!     .unwrap();
//! assert!(readme.contains(
//!     "Money result = await new Demo.Orders.OrderController().GetTotal(myorderId);"
//! ));
//! ```

pub mod generator;
pub mod model;

pub use generator::{
    assemble, generate_readme, match_data_providers, render_invocation, write_readme,
    InvocationExample, ProviderBinder,
};
pub use model::{
    load_model, ActionMethodMeta, ControllerMeta, DtoTypeMeta, ParameterMeta, TypeModel,
};
