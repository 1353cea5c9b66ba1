//! # vertxgen
//!
//! **vertxgen** turns a parsed [OpenAPI 3.x](https://spec.openapis.org/oas/v3.1.0)
//! specification into a normalized, template-ready generation model for a Java
//! Vert.x server. It is the transformation stage of a larger code-generation
//! pipeline: parsing sits upstream, template rendering and file emission sit
//! downstream.
//!
//! ## Architecture
//!
//! - **[`spec`]** - OpenAPI loading and descriptor construction
//!   ([`spec::OperationDescriptor`], [`spec::ModelDescriptor`])
//! - **[`config`]** - feature-flag resolution ([`config::FeatureConfig`]) and
//!   the CLI option catalog surfaced by the host pipeline
//! - **[`preprocess`]** - service-identifier assignment and listen-port
//!   extraction, run to completion before anything else reads the spec
//! - **[`adapter`]** - per-operation and per-model normalization for the
//!   Vert.x templates (method casing, `:param` routing syntax, import sets)
//! - **[`supporting`]** - resolution of the conditional supporting-file list
//! - **[`pipeline`]** - assembles everything into a [`pipeline::GenerationPlan`]
//! - **[`cli`]** - `vertxgen` binary with `plan` and `options` subcommands
//!
//! ## Pipeline
//!
//! ```text
//! OpenAPI file → load_spec → assign_service_ids / server_port
//!             → build_operations / build_models
//!             → adapt_operation / adapt_model
//!             → FeatureConfig::resolve + resolve_supporting_files
//!             → GenerationPlan (handed to the template engine)
//! ```
//!
//! The whole pass is single-threaded and deterministic: operations and models
//! are processed in the order the parsed spec yields them, and service
//! identifiers are assigned before any descriptor is built.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use vertxgen::pipeline::plan_from_file;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut options = BTreeMap::new();
//! options.insert("vertxVersion".to_string(), "5.0.8".to_string());
//!
//! let plan = plan_from_file("openapi.yaml", &options)?;
//! for op in &plan.operations {
//!     println!("{} {} → {}", op.http_method, op.path, op.service_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Vert.x 4 vs 5
//!
//! The two major versions are not configuration-compatible at the API-shape
//! level: Vert.x 5 exposes only the future-based calling convention. A
//! `vertxVersion` with major component 5 therefore forces `useFuture` on and
//! publishes the derived `vertxV5` generation property.
//!
//! ## Error model
//!
//! This stage prefers silent, deterministic fallback over failure: missing
//! operation identifiers are synthesized, unusable server URLs fall back to
//! port 8080, malformed option values fall back to their declared defaults,
//! and unrecognized option keys are ignored. The only hard failures are I/O
//! and spec-parse errors when loading the document.

pub mod adapter;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod preprocess;
pub mod spec;
pub mod supporting;

pub use config::{option_catalog, CliOption, FeatureConfig, OptionKind};
pub use pipeline::{build_plan, plan_from_file, GenerationPlan};
pub use preprocess::{assign_service_ids, server_port, ServiceId, ServiceIdTable};
pub use spec::{load_spec, ModelDescriptor, OperationDescriptor};
pub use supporting::{resolve_supporting_files, SupportingFile};
