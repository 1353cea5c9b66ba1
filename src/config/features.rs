use super::options::{
    PERFORM_BEAN_VALIDATION, RX_INTERFACE, SWAGGER_ROUTER_VERSION, USE_BEAN_VALIDATION,
    USE_DATA_OBJECT, USE_FUTURE, VERTX_V5, VERTX_VERSION,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Vert.x version targeted when the options leave it unset.
pub const DEFAULT_VERTX_VERSION: &str = "4.5.15";

/// Resolved generation-time feature flags for one run.
///
/// Created once by [`FeatureConfig::resolve`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureConfig {
    pub use_data_object: bool,
    pub use_future: bool,
    pub rx_interface: bool,
    pub perform_bean_validation: bool,
    pub use_bean_validation: bool,
    pub vertx_version: String,
    pub swagger_router_version: Option<String>,
    /// Derived: the `vertx_version` major component is 5. Vert.x 5 exposes
    /// only the future-based calling convention, so this forces `use_future`.
    pub is_version5: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            use_data_object: false,
            use_future: true,
            rx_interface: false,
            perform_bean_validation: false,
            use_bean_validation: false,
            vertx_version: DEFAULT_VERTX_VERSION.to_string(),
            swagger_router_version: None,
            is_version5: false,
        }
    }
}

/// Read a boolean option, falling back to the default on anything that is not
/// literally `true`/`false` (case-insensitive). A long batch run should not
/// die on one mistyped flag; callers wanting strict validation pre-validate.
fn bool_option(raw: &BTreeMap<String, String>, key: &str, default: bool) -> bool {
    match raw.get(key) {
        None => default,
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => {
                debug!(key, value = %value, default, "unparsable boolean option, using default");
                default
            }
        },
    }
}

fn string_option(raw: &BTreeMap<String, String>, key: &str) -> Option<String> {
    raw.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl FeatureConfig {
    /// Resolve raw option strings into a fully derived config value.
    ///
    /// Unrecognized keys are ignored for forward compatibility. After the
    /// per-option conversion the Vert.x 5 gate is applied: a version starting
    /// with `5` forces future-based signatures regardless of the raw input.
    pub fn resolve(raw: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let vertx_version =
            string_option(raw, VERTX_VERSION).unwrap_or(defaults.vertx_version);
        let is_version5 = vertx_version.starts_with('5');
        let use_future = if is_version5 {
            true
        } else {
            bool_option(raw, USE_FUTURE, defaults.use_future)
        };

        Self {
            use_data_object: bool_option(raw, USE_DATA_OBJECT, defaults.use_data_object),
            use_future,
            rx_interface: bool_option(raw, RX_INTERFACE, defaults.rx_interface),
            perform_bean_validation: bool_option(
                raw,
                PERFORM_BEAN_VALIDATION,
                defaults.perform_bean_validation,
            ),
            use_bean_validation: bool_option(
                raw,
                USE_BEAN_VALIDATION,
                defaults.use_bean_validation,
            ),
            vertx_version,
            swagger_router_version: string_option(raw, SWAGGER_ROUTER_VERSION),
            is_version5,
        }
    }

    /// Generation properties published to the template engine.
    ///
    /// Only declared flags appear here, plus the derived [`VERTX_V5`] boolean.
    pub fn generation_properties(&self) -> BTreeMap<String, Value> {
        let mut props = BTreeMap::new();
        props.insert(USE_DATA_OBJECT.to_string(), json!(self.use_data_object));
        props.insert(USE_FUTURE.to_string(), json!(self.use_future));
        props.insert(RX_INTERFACE.to_string(), json!(self.rx_interface));
        props.insert(
            PERFORM_BEAN_VALIDATION.to_string(),
            json!(self.perform_bean_validation),
        );
        props.insert(
            USE_BEAN_VALIDATION.to_string(),
            json!(self.use_bean_validation),
        );
        props.insert(VERTX_VERSION.to_string(), json!(self.vertx_version));
        if let Some(v) = &self.swagger_router_version {
            props.insert(SWAGGER_ROUTER_VERSION.to_string(), json!(v));
        }
        props.insert(VERTX_V5.to_string(), json!(self.is_version5));
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let cfg = FeatureConfig::resolve(&BTreeMap::new());
        assert!(!cfg.use_data_object);
        assert!(cfg.use_future);
        assert!(!cfg.rx_interface);
        assert!(!cfg.is_version5);
        assert_eq!(cfg.vertx_version, DEFAULT_VERTX_VERSION);
    }

    #[test]
    fn test_explicit_flags() {
        let cfg = FeatureConfig::resolve(&raw(&[
            ("useDataObject", "true"),
            ("useFuture", "false"),
            ("rxInterface", "TRUE"),
        ]));
        assert!(cfg.use_data_object);
        assert!(!cfg.use_future);
        assert!(cfg.rx_interface);
    }

    #[test]
    fn test_version5_forces_future() {
        let cfg = FeatureConfig::resolve(&raw(&[
            ("vertxVersion", "5.0.8"),
            ("useFuture", "false"),
        ]));
        assert!(cfg.is_version5);
        assert!(cfg.use_future);
    }

    #[test]
    fn test_version4_honors_future_flag() {
        let cfg = FeatureConfig::resolve(&raw(&[
            ("vertxVersion", "4.5.15"),
            ("useFuture", "false"),
        ]));
        assert!(!cfg.is_version5);
        assert!(!cfg.use_future);
    }

    #[test]
    fn test_malformed_boolean_falls_back_to_default() {
        let cfg = FeatureConfig::resolve(&raw(&[
            ("useFuture", "yes please"),
            ("useDataObject", "1"),
        ]));
        assert!(cfg.use_future);
        assert!(!cfg.use_data_object);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let cfg = FeatureConfig::resolve(&raw(&[("someFutureOption", "whatever")]));
        assert_eq!(cfg, FeatureConfig::default());
    }

    #[test]
    fn test_properties_expose_only_declared_flags() {
        let cfg = FeatureConfig::resolve(&raw(&[("vertxVersion", "5.0.8")]));
        let props = cfg.generation_properties();
        assert_eq!(props.get("vertxV5"), Some(&serde_json::json!(true)));
        assert_eq!(props.get("useFuture"), Some(&serde_json::json!(true)));
        assert!(props.get("someFutureOption").is_none());
        // router version was not set, so it must not leak into the map
        assert!(props.get("vertxSwaggerRouterVersion").is_none());
    }
}
