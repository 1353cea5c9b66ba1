use super::types::{ModelDescriptor, OperationDescriptor};
use crate::preprocess::{ServiceId, ServiceIdTable};
use oas3::spec::ObjectOrReference;
use oas3::OpenApiV3Spec;
use serde_json::Value;
use std::collections::BTreeSet;

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Documentation annotations the generic base generator seeds on every model.
/// The Vert.x templates never render them; the adapter strips them again.
const BASE_DOC_ANNOTATIONS: [&str; 2] = ["ApiModel", "ApiModelProperty"];

fn ref_type_name(ref_path: &str) -> String {
    ref_path
        .strip_prefix(SCHEMA_REF_PREFIX)
        .unwrap_or("Object")
        .to_string()
}

/// Map an inline JSON schema to the Java type the templates render.
fn json_schema_to_java_type(schema: &Value) -> String {
    if let Some(ref_path) = schema.get("$ref").and_then(|v| v.as_str()) {
        return ref_type_name(ref_path);
    }
    match schema.get("type").and_then(|t| t.as_str()) {
        Some("string") => "String".to_string(),
        Some("integer") => "Integer".to_string(),
        Some("number") => "BigDecimal".to_string(),
        Some("boolean") => "Boolean".to_string(),
        Some("array") => {
            let inner = schema
                .get("items")
                .map(json_schema_to_java_type)
                .unwrap_or_else(|| "Object".to_string());
            format!("List<{inner}>")
        }
        _ => "Object".to_string(),
    }
}

/// Derive the Java return type for an operation.
///
/// The first 2xx `application/json` response wins. A success response without
/// content maps to `"Void"`, matching the base generator; the adapter turns
/// that into an absent return type later.
fn derive_return_type(operation: &oas3::spec::Operation) -> Option<String> {
    let responses = operation.responses.as_ref()?;
    let mut success: Vec<(u16, &ObjectOrReference<oas3::spec::Response>)> = responses
        .iter()
        .filter_map(|(status_str, resp)| {
            status_str
                .parse::<u16>()
                .ok()
                .filter(|s| (200..300).contains(s))
                .map(|s| (s, resp))
        })
        .collect();
    success.sort_by_key(|(status, _)| *status);

    let (_, resp_ref) = success.first()?;
    let ObjectOrReference::Object(resp_obj) = resp_ref else {
        return Some("Void".to_string());
    };
    let Some(media) = resp_obj.content.get("application/json") else {
        return Some("Void".to_string());
    };
    let ty = match media.schema.as_ref() {
        Some(ObjectOrReference::Ref { ref_path, .. }) => ref_type_name(ref_path),
        Some(ObjectOrReference::Object(schema_obj)) => serde_json::to_value(schema_obj)
            .map(|v| json_schema_to_java_type(&v))
            .unwrap_or_else(|_| "Object".to_string()),
        None => "Void".to_string(),
    };
    Some(ty)
}

fn declares_path_param(params: &[ObjectOrReference<oas3::spec::Parameter>]) -> bool {
    params.iter().any(|p| match p {
        ObjectOrReference::Object(param) => {
            matches!(param.location, oas3::spec::ParameterIn::Path)
        }
        // Referenced parameters are left to the path-pattern check below
        ObjectOrReference::Ref { .. } => false,
    })
}

/// Build an operation descriptor for every (path, method) pair.
///
/// The service-identifier table must be fully assigned before this runs; a
/// missing entry is re-synthesized with the same rule as a safety net.
pub fn build_operations(spec: &OpenApiV3Spec, ids: &ServiceIdTable) -> Vec<OperationDescriptor> {
    let mut operations = Vec::new();
    if let Some(paths_map) = spec.paths.as_ref() {
        for (path, item) in paths_map {
            for (method, operation) in item.methods() {
                let method = method.clone();
                let service_id = ids
                    .get(&method, path)
                    .cloned()
                    .unwrap_or_else(|| ServiceId::synthesized(&method, path));
                let has_path_params = path.contains('{')
                    || declares_path_param(&item.parameters)
                    || declares_path_param(&operation.parameters);

                operations.push(OperationDescriptor {
                    http_method: method.as_str().to_string(),
                    path: path.clone(),
                    service_id: service_id.id,
                    service_id_var_name: service_id.var_name,
                    return_type: derive_return_type(operation)
                        .or_else(|| Some("Void".to_string())),
                    has_path_params,
                    imports: BTreeSet::new(),
                });
            }
        }
    }
    operations
}

fn schema_json(spec: &OpenApiV3Spec, schema: &ObjectOrReference<oas3::spec::ObjectSchema>) -> Value {
    let obj = match schema {
        ObjectOrReference::Object(obj) => Some(obj),
        ObjectOrReference::Ref { ref_path, .. } => ref_path
            .strip_prefix(SCHEMA_REF_PREFIX)
            .and_then(|name| spec.components.as_ref()?.schemas.get(name))
            .and_then(|s| match s {
                ObjectOrReference::Object(obj) => Some(obj),
                _ => None,
            }),
    };
    obj.and_then(|o| serde_json::to_value(o).ok())
        .unwrap_or(Value::Null)
}

fn property_has_enum(schema: &Value) -> bool {
    schema
        .get("properties")
        .and_then(|p| p.as_object())
        .map(|props| props.values().any(|prop| prop.get("enum").is_some()))
        .unwrap_or(false)
}

/// Build a model descriptor for every component schema.
///
/// Imports start out as the base generator leaves them, documentation
/// annotations included, so the adapter pass works on realistic input.
pub fn build_models(spec: &OpenApiV3Spec) -> Vec<ModelDescriptor> {
    let Some(components) = spec.components.as_ref() else {
        return Vec::new();
    };
    components
        .schemas
        .iter()
        .map(|(name, schema)| {
            let json = schema_json(spec, schema);
            ModelDescriptor {
                name: name.clone(),
                is_enum: json.get("enum").is_some(),
                has_enums: property_has_enum(&json),
                imports: BASE_DOC_ANNOTATIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::assign_service_ids;
    use serde_json::json;

    fn spec_from(value: serde_json::Value) -> OpenApiV3Spec {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_return_type_from_ref() {
        let spec = spec_from(json!({
            "openapi": "3.1.0",
            "info": { "title": "t", "version": "1" },
            "paths": {
                "/pets/{id}": {
                    "get": {
                        "operationId": "getPet",
                        "responses": {
                            "200": {
                                "description": "ok",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Pet" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": { "Pet": { "type": "object", "properties": { "name": { "type": "string" } } } }
            }
        }));
        let ids = assign_service_ids(&spec);
        let ops = build_operations(&spec, &ids);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].return_type.as_deref(), Some("Pet"));
        assert_eq!(ops[0].http_method, "GET");
        assert!(ops[0].has_path_params);
    }

    #[test]
    fn test_return_type_void_without_content() {
        let spec = spec_from(json!({
            "openapi": "3.1.0",
            "info": { "title": "t", "version": "1" },
            "paths": {
                "/pets/{id}": {
                    "delete": {
                        "responses": { "204": { "description": "deleted" } }
                    }
                }
            }
        }));
        let ids = assign_service_ids(&spec);
        let ops = build_operations(&spec, &ids);
        assert_eq!(ops[0].return_type.as_deref(), Some("Void"));
        assert_eq!(ops[0].service_id, "DELETE_pets_id");
    }

    #[test]
    fn test_return_type_array_of_refs() {
        let spec = spec_from(json!({
            "openapi": "3.1.0",
            "info": { "title": "t", "version": "1" },
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "listPets",
                        "responses": {
                            "200": {
                                "description": "ok",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Pet" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": { "schemas": { "Pet": { "type": "object" } } }
        }));
        let ids = assign_service_ids(&spec);
        let ops = build_operations(&spec, &ids);
        assert_eq!(ops[0].return_type.as_deref(), Some("List<Pet>"));
        assert!(!ops[0].has_path_params);
    }

    #[test]
    fn test_build_models_enum_flags() {
        let spec = spec_from(json!({
            "openapi": "3.1.0",
            "info": { "title": "t", "version": "1" },
            "paths": {},
            "components": {
                "schemas": {
                    "Color": { "type": "string", "enum": ["red", "green"] },
                    "Pet": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "status": { "type": "string", "enum": ["available", "sold"] }
                        }
                    }
                }
            }
        }));
        let models = build_models(&spec);
        assert_eq!(models.len(), 2);
        let color = models.iter().find(|m| m.name == "Color").unwrap();
        assert!(color.is_enum);
        assert!(!color.has_enums);
        let pet = models.iter().find(|m| m.name == "Pet").unwrap();
        assert!(!pet.is_enum);
        assert!(pet.has_enums);
        assert!(pet.imports.contains("ApiModel"));
        assert!(pet.imports.contains("ApiModelProperty"));
    }
}
