//! Single preprocessing pass over a parsed OpenAPI document.
//!
//! Runs to completion before any descriptor is built or adapted, so every
//! downstream consumer observes a fully assigned service-identifier table.
//! The two concerns here mirror what a Vert.x server needs up front: which
//! port the bootstrap verticle should bind, and a stable service identifier
//! per (path, method) pair for event-bus addressing.

use http::Method;
use oas3::OpenApiV3Spec;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Port used when the spec declares no servers or the server URL is unusable.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Generation-property key for the resolved listen port.
pub const SERVER_PORT_PROPERTY: &str = "serverPort";

const SERVICE_ID_VAR_SUFFIX: &str = "_SERVICE_ID";

/// Stable identifier naming the handler/service responsible for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceId {
    /// The identifier itself (`operationId` verbatim, or synthesized)
    pub id: String,
    /// Constant name exposed to templates (`GET_PETS_SERVICE_ID`)
    pub var_name: String,
}

impl ServiceId {
    fn new(id: String) -> Self {
        let var_name = format!("{}{}", id.to_uppercase(), SERVICE_ID_VAR_SUFFIX);
        Self { id, var_name }
    }

    /// Identifier synthesized from the method and sanitized path, used when
    /// the operation declares no `operationId`.
    pub fn synthesized(method: &Method, path: &str) -> Self {
        Self::new(format!("{}{}", method.as_str(), sanitize_path(path)))
    }
}

/// Typed side-table of service identifiers keyed on (method, path).
///
/// Once built for a run the table is never mutated again; every consumer
/// reads the same assignment.
#[derive(Debug, Default)]
pub struct ServiceIdTable {
    entries: HashMap<(Method, String), ServiceId>,
}

impl ServiceIdTable {
    pub fn get(&self, method: &Method, path: &str) -> Option<&ServiceId> {
        self.entries.get(&(method.clone(), path.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip path-parameter braces and map `/` and `-` to `_`.
fn sanitize_path(path: &str) -> String {
    path.chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .map(|c| if c == '/' || c == '-' { '_' } else { c })
        .collect()
}

fn unique_service_id(seen: &mut HashSet<String>, candidate: String) -> String {
    if seen.insert(candidate.clone()) {
        return candidate;
    }
    let mut counter = 1;
    loop {
        let tiebreak = format!("{candidate}_{counter}");
        if seen.insert(tiebreak.clone()) {
            warn!(
                service_id = %candidate,
                assigned = %tiebreak,
                "synthesized service id collides with an earlier operation"
            );
            return tiebreak;
        }
        counter += 1;
    }
}

/// Assign a service identifier to every (path, method) pair in the spec.
///
/// An explicit non-empty `operationId` is used verbatim. Everything else gets
/// `UPPERMETHOD + sanitize(path)`; synthesized identifiers that collide across
/// distinct paths receive a numeric tiebreak suffix and a logged warning.
pub fn assign_service_ids(spec: &OpenApiV3Spec) -> ServiceIdTable {
    let mut table = ServiceIdTable::default();
    let mut seen: HashSet<String> = HashSet::new();

    if let Some(paths_map) = spec.paths.as_ref() {
        for (path, item) in paths_map {
            for (method, operation) in item.methods() {
                let method = method.clone();
                let explicit = operation
                    .operation_id
                    .as_deref()
                    .map(str::trim)
                    .filter(|id| !id.is_empty());
                let service_id = match explicit {
                    Some(id) => {
                        seen.insert(id.to_string());
                        ServiceId::new(id.to_string())
                    }
                    None => {
                        let synthesized = ServiceId::synthesized(&method, path);
                        ServiceId::new(unique_service_id(&mut seen, synthesized.id))
                    }
                };
                table
                    .entries
                    .insert((method, path.clone()), service_id);
            }
        }
    }
    table
}

/// Resolve the listen port from the first declared server URL.
///
/// A missing server, an unparsable URL, or a URL without an explicit port all
/// fall back to [`DEFAULT_SERVER_PORT`]; none of these are errors.
pub fn server_port(spec: &OpenApiV3Spec) -> u16 {
    let Some(server) = spec.servers.first() else {
        debug!("no servers declared, using default port {DEFAULT_SERVER_PORT}");
        return DEFAULT_SERVER_PORT;
    };
    let url_str = &server.url;
    let parsed = url::Url::parse(url_str)
        .or_else(|_| url::Url::parse(&format!("http://dummy{url_str}")));
    match parsed {
        Ok(u) => u.port().unwrap_or(DEFAULT_SERVER_PORT),
        Err(_) => {
            warn!(url = %url_str, "unparsable server URL, using default port {DEFAULT_SERVER_PORT}");
            DEFAULT_SERVER_PORT
        }
    }
}
