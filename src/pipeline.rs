//! End-to-end assembly of the template-ready generation model.
//!
//! One synchronous pass, single-threaded, over an in-memory spec: options
//! resolve first, then the preprocessor assigns service identifiers (before
//! anything reads them), then descriptors are built and adapted in the order
//! the parsed spec yields them.

use crate::adapter::{adapt_model, adapt_operation};
use crate::config::FeatureConfig;
use crate::preprocess::{assign_service_ids, server_port, SERVER_PORT_PROPERTY};
use crate::spec::{build_models, build_operations, load_spec, ModelDescriptor, OperationDescriptor};
use crate::supporting::{resolve_supporting_files, SupportingFile};
use oas3::OpenApiV3Spec;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::info;

/// Everything the external template engine needs for one generation run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPlan {
    /// Slug derived from `info.title`
    pub slug: String,
    /// Resolved feature flags
    pub config: FeatureConfig,
    /// Generation-properties map keyed by recognized flag names
    pub properties: BTreeMap<String, Value>,
    /// Adapted per-operation descriptors, in spec order
    pub operations: Vec<OperationDescriptor>,
    /// Adapted per-model descriptors, in spec order
    pub models: Vec<ModelDescriptor>,
    /// Resolved supporting-file list, in emission order
    pub supporting_files: Vec<SupportingFile>,
}

/// Build the generation plan for an already parsed spec.
pub fn build_plan(
    spec: &OpenApiV3Spec,
    slug: &str,
    raw_options: &BTreeMap<String, String>,
) -> GenerationPlan {
    let config = FeatureConfig::resolve(raw_options);

    // Service ids must be fully assigned before any descriptor is built.
    let service_ids = assign_service_ids(spec);
    let port = server_port(spec);

    let mut operations = build_operations(spec, &service_ids);
    let mut models = build_models(spec);
    for op in &mut operations {
        adapt_operation(op);
    }
    for model in &mut models {
        adapt_model(model);
    }

    let mut properties = config.generation_properties();
    properties.insert(SERVER_PORT_PROPERTY.to_string(), json!(port));

    let supporting_files = resolve_supporting_files(&config);

    info!(
        slug,
        operations = operations.len(),
        models = models.len(),
        supporting_files = supporting_files.len(),
        port,
        "generation plan assembled"
    );

    GenerationPlan {
        slug: slug.to_string(),
        config,
        properties,
        operations,
        models,
        supporting_files,
    }
}

/// Load a spec file and build its generation plan.
pub fn plan_from_file(
    spec_path: &str,
    raw_options: &BTreeMap<String, String>,
) -> anyhow::Result<GenerationPlan> {
    let (spec, slug) = load_spec(spec_path)?;
    Ok(build_plan(&spec, &slug, raw_options))
}
