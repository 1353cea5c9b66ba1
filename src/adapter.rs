//! Per-operation and per-model postprocessing.
//!
//! Both adapters are pure in-place transforms over a descriptor: method and
//! path syntax are normalized to what the Vert.x routing layer expects, and
//! the import sets are curated for the Vert.x templates. Neither function
//! has a failure mode.

use crate::spec::{ModelDescriptor, OperationDescriptor};

/// Common exception type every generated handler method can signal.
pub const MAIN_API_EXCEPTION_IMPORT: &str = "MainApiException";

const JSON_INCLUDE_IMPORT: &str = "JsonInclude";
const JSON_PROPERTY_IMPORT: &str = "JsonProperty";
const JSON_VALUE_IMPORT: &str = "JsonValue";

/// Legacy documentation annotations inherited from the generic base
/// generator; the Vert.x templates do not use them.
const LEGACY_DOC_IMPORTS: [&str; 2] = ["ApiModel", "ApiModelProperty"];

/// Normalize one operation descriptor for the Vert.x templates.
pub fn adapt_operation(op: &mut OperationDescriptor) {
    op.http_method = op.http_method.to_lowercase();

    // The templates treat "absent" and "Void" differently; only absent
    // renders a void handler correctly.
    if op
        .return_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("void"))
    {
        op.return_type = None;
    }

    if op.has_path_params {
        op.path = camelize_path(&op.path);
    }

    op.imports.insert(MAIN_API_EXCEPTION_IMPORT.to_string());
}

/// Curate the import set of one model descriptor.
pub fn adapt_model(model: &mut ModelDescriptor) {
    for import in LEGACY_DOC_IMPORTS {
        model.imports.remove(import);
    }
    if !model.is_enum {
        model.imports.insert(JSON_INCLUDE_IMPORT.to_string());
        model.imports.insert(JSON_PROPERTY_IMPORT.to_string());
        if model.has_enums {
            model.imports.insert(JSON_VALUE_IMPORT.to_string());
        }
    }
}

/// Rewrite a route path into Vert.x routing syntax.
///
/// `{name}` placeholders become `:name`, then snake_case turns into
/// camelCase. A single pass over each segment replaces the old regex
/// fixpoint loop: a run of underscores followed by a character collapses to
/// the upper-cased character, a trailing run collapses to one underscore,
/// which is exactly the fixpoint of replacing underscore-character pairs.
pub fn camelize_path(path: &str) -> String {
    path.split('/')
        .map(camelize_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn camelize_segment(segment: &str) -> String {
    collapse_underscores(&convert_placeholders(segment))
}

/// Replace each balanced `{name}` with `:name`. An unbalanced `{` is left
/// untouched rather than scanned repeatedly.
fn convert_placeholders(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(start) = rest.find('{') {
        match rest[start + 1..].find('}') {
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push(':');
                out.push_str(&rest[start + 1..start + 1 + end]);
                rest = &rest[start + end + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

fn collapse_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            while chars.peek() == Some(&'_') {
                chars.next();
            }
            match chars.next() {
                Some(next) => out.extend(next.to_uppercase()),
                None => out.push('_'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
