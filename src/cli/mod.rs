//! # CLI Module
//!
//! Command-line surface for inspecting what the generator would produce.
//!
//! ## Commands
//!
//! ### `plan`
//!
//! Build the generation plan for a spec and print it as JSON:
//!
//! ```bash
//! vertxgen plan --spec openapi.yaml -D useDataObject=true -D vertxVersion=5.0.8
//! ```
//!
//! ### `options`
//!
//! Print the generator option catalog:
//!
//! ```bash
//! vertxgen options
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
