//! Process-wide registry of named TLS configurations.
//!
//! The dial path resolves `tls=<name>` query parameters against this table.
//! Access goes through this module alone, so the global table can later be
//! swapped for an injectable per-pool registry without touching the parse or
//! registration logic.

use std::collections::HashMap;
use std::sync::LazyLock;

use mysql_async::SslOpts;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Error, Result};

/// Dial-time keywords that can never name a registered config.
const RESERVED_NAMES: [&str; 4] = ["true", "false", "skip-verify", "preferred"];

static CONFIGS: LazyLock<RwLock<HashMap<String, SslOpts>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Register a TLS configuration under `name`.
///
/// Re-registering an existing name overwrites it; concurrent registrations of
/// the same name are last-writer-wins. Fails with [`Error::ReservedName`] for
/// the dial-time keywords.
pub fn register(name: &str, opts: SslOpts) -> Result<()> {
    if RESERVED_NAMES.contains(&name) {
        return Err(Error::ReservedName(name.to_string()));
    }
    CONFIGS.write().insert(name.to_string(), opts);
    debug!(name, "registered named TLS config");
    Ok(())
}

/// Remove a registered configuration, if present.
pub fn deregister(name: &str) {
    CONFIGS.write().remove(name);
}

/// Look up a registered configuration by name.
pub fn lookup(name: &str) -> Option<SslOpts> {
    CONFIGS.read().get(name).cloned()
}
