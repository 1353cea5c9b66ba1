use serde::Serialize;
use std::collections::BTreeSet;

/// Per-(path, method) record consumed by the template engine.
///
/// Built by [`crate::spec::build_operations`] and enriched in place by
/// [`crate::adapter::adapt_operation`] before it is handed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    /// HTTP method; upper case as parsed, lower case once adapted (the
    /// Vert.x routing layer is case-sensitive and expects lower case)
    pub http_method: String,
    /// Route path; `{name}` placeholders as parsed, `:name` once adapted
    pub path: String,
    /// Stable service identifier, assigned by the preprocessor
    pub service_id: String,
    /// Constant name for the service id (`UPPER_ID + "_SERVICE_ID"`)
    pub service_id_var_name: String,
    /// Java return type; `None` means the operation is semantically void
    pub return_type: Option<String>,
    /// Whether the route declares any path parameters
    pub has_path_params: bool,
    /// Import symbols required by the generated handler
    pub imports: BTreeSet<String>,
}

/// Per-schema record for a generated model class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model class name from `components.schemas`
    pub name: String,
    /// Whether the schema itself is an enum
    pub is_enum: bool,
    /// Whether any property of the schema is enum-valued
    pub has_enums: bool,
    /// Import symbols required by the generated model class
    pub imports: BTreeSet<String>,
}
