use serde::Serialize;

/// Option key: generate Bean Validation API annotations.
pub const USE_BEAN_VALIDATION: &str = "useBeanValidation";
/// Option key: use a Bean Validation implementation to perform validation.
pub const PERFORM_BEAN_VALIDATION: &str = "performBeanValidation";
/// Option key: generate RX interfaces returning `Single<>`.
pub const RX_INTERFACE: &str = "rxInterface";
/// Option key: version of the swagger router library.
pub const SWAGGER_ROUTER_VERSION: &str = "vertxSwaggerRouterVersion";
/// Option key: annotate generated models with `@DataObject`.
pub const USE_DATA_OBJECT: &str = "useDataObject";
/// Option key: describe services with future-based signatures.
pub const USE_FUTURE: &str = "useFuture";
/// Option key: target Vert.x version.
pub const VERTX_VERSION: &str = "vertxVersion";

/// Generation-property key for the derived "targeting Vert.x 5" boolean.
/// Not a CLI option; published alongside the declared flags.
pub const VERTX_V5: &str = "vertxV5";

/// Value type of a CLI option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionKind {
    Bool,
    Str,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Bool => write!(f, "boolean"),
            OptionKind::Str => write!(f, "string"),
        }
    }
}

/// One entry of the option catalog surfaced in the host pipeline's help text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliOption {
    pub key: &'static str,
    pub kind: OptionKind,
    pub description: &'static str,
    pub default: Option<&'static str>,
}

impl CliOption {
    const fn boolean(key: &'static str, description: &'static str, default: bool) -> Self {
        Self {
            key,
            kind: OptionKind::Bool,
            description,
            default: Some(if default { "true" } else { "false" }),
        }
    }

    const fn string(
        key: &'static str,
        description: &'static str,
        default: Option<&'static str>,
    ) -> Self {
        Self {
            key,
            kind: OptionKind::Str,
            description,
            default,
        }
    }
}

/// The ordered option catalog. Keys must be unique across the catalog;
/// a duplicate is a configuration defect, caught by the test below.
pub fn option_catalog() -> Vec<CliOption> {
    vec![
        CliOption::boolean(
            USE_BEAN_VALIDATION,
            "Use Bean Validation API annotations",
            false,
        ),
        CliOption::boolean(
            PERFORM_BEAN_VALIDATION,
            "Use Bean Validation Impl. to perform Bean Validation",
            false,
        ),
        CliOption::boolean(
            RX_INTERFACE,
            "When specified, API interfaces are generated with RX and methods return Single<> and Comparable",
            false,
        ),
        CliOption::string(
            SWAGGER_ROUTER_VERSION,
            "Specify the version of the swagger router library",
            None,
        ),
        CliOption::boolean(
            USE_DATA_OBJECT,
            "When specified, model objects are generated with @DataObject",
            false,
        ),
        CliOption::boolean(
            USE_FUTURE,
            "When specified, describe services with future-based signatures. Unused with Vert.x 5",
            true,
        ),
        CliOption::string(VERTX_VERSION, "Vert.x version", Some(super::DEFAULT_VERTX_VERSION)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_option_keys_are_unique() {
        let catalog = option_catalog();
        let keys: HashSet<&str> = catalog.iter().map(|o| o.key).collect();
        assert_eq!(keys.len(), catalog.len(), "duplicate option key in catalog");
    }

    #[test]
    fn test_catalog_covers_all_flags() {
        let keys: Vec<&str> = option_catalog().iter().map(|o| o.key).collect();
        for key in [
            USE_BEAN_VALIDATION,
            PERFORM_BEAN_VALIDATION,
            RX_INTERFACE,
            SWAGGER_ROUTER_VERSION,
            USE_DATA_OBJECT,
            USE_FUTURE,
            VERTX_VERSION,
        ] {
            assert!(keys.contains(&key), "missing catalog entry for {key}");
        }
    }

    #[test]
    fn test_derived_property_is_not_an_option() {
        assert!(!option_catalog().iter().any(|o| o.key == VERTX_V5));
    }
}
