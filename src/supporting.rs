//! Conditional supporting-file resolution.
//!
//! A supporting file is any generation artifact that is neither a model nor
//! an operation: the build descriptor, the bootstrap verticle, documentation,
//! and the data-object mapping files. The list is a pure function of the
//! resolved [`FeatureConfig`]; the emission stage downstream does the actual
//! writing and honors the `overwrite` flag.

use crate::config::FeatureConfig;
use serde::Serialize;

/// Java package the generated server lives in.
pub const INVOKER_PACKAGE: &str = "org.openapitools.vertx.server";
/// Java package for generated verticles/services.
pub const API_PACKAGE: &str = "org.openapitools.vertx.server.verticle";
/// Java package for generated model classes.
pub const MODEL_PACKAGE: &str = "org.openapitools.vertx.server.model";

/// Folder for generated Java sources.
pub const SOURCE_FOLDER: &str = "src/main/java";
/// Folder for generated resources.
pub const RESOURCE_FOLDER: &str = "src/main/resources";

/// One auxiliary generation artifact: which template renders it and where
/// the emission stage writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingFile {
    pub template: String,
    pub folder: String,
    pub dest_filename: String,
    /// `false` marks files never overwritten once present at the
    /// destination, protecting hand-edited build and doc files.
    pub overwrite: bool,
}

impl SupportingFile {
    fn new(template: &str, folder: &str, dest_filename: &str) -> Self {
        Self {
            template: template.to_string(),
            folder: folder.to_string(),
            dest_filename: dest_filename.to_string(),
            overwrite: true,
        }
    }

    fn do_not_overwrite(mut self) -> Self {
        self.overwrite = false;
        self
    }
}

/// Source folder for a Java package (`org.acme` → `src/main/java/org/acme`).
pub fn package_folder(package: &str) -> String {
    format!("{SOURCE_FOLDER}/{}", package.replace('.', "/"))
}

/// Resolve the supporting-file list for one run.
///
/// Idempotent: identical configs produce identical lists, and enabling
/// `use_data_object` appends the three mapping artifacts without touching
/// the unconditional entries.
pub fn resolve_supporting_files(config: &FeatureConfig) -> Vec<SupportingFile> {
    let invoker_folder = package_folder(INVOKER_PACKAGE);
    let api_folder = package_folder(API_PACKAGE);
    let model_folder = package_folder(MODEL_PACKAGE);

    let mut files = vec![
        SupportingFile::new("openapi.mustache", RESOURCE_FOLDER, "openapi.json"),
        SupportingFile::new("MainApiVerticle.mustache", &invoker_folder, "MainApiVerticle.java"),
        SupportingFile::new("pom.mustache", "", "pom.xml").do_not_overwrite(),
        SupportingFile::new("README.mustache", "", "README.md").do_not_overwrite(),
        SupportingFile::new("package-info-service.mustache", &api_folder, "package-info.java"),
    ];

    if config.use_data_object {
        files.push(SupportingFile::new(
            "package-info-model.mustache",
            &model_folder,
            "package-info.java",
        ));
        files.push(SupportingFile::new(
            "json-mappers.mustache",
            &format!("{RESOURCE_FOLDER}/META-INF/vertx"),
            "json-mappers.properties",
        ));
        files.push(SupportingFile::new(
            "DataObjectMapper.mustache",
            &model_folder,
            "DataObjectMapper.java",
        ));
    }

    files
}
