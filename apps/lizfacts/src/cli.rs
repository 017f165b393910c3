//! # CLI Module
//!
//! Collection commands for the lizfacts binary.
//!
//! The host executes the binary and parses stdout, so everything here writes
//! facts to stdout only; diagnostics go through tracing (stderr). Rendering
//! follows the external-fact protocol: `name=VALUE` lines, or one JSON
//! object. Printing nothing publishes nothing.

use lizfacts_core::{FactRegistry, Personality, PersonalityProvider};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors from the lizfacts CLI.
///
/// An absent fact is not an error. This type covers the only genuine
/// failures the binary has: producing its own output.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing facts to stdout failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build the fact registry this deployment ships.
///
/// One provider today: the personality fact. Registration happens here,
/// explicitly, when the host invokes the binary, never at load time.
#[must_use]
pub fn build_registry(state_file: Option<&Path>) -> FactRegistry {
    let provider = match state_file {
        Some(path) => PersonalityProvider::with_state_file(path),
        None => PersonalityProvider::new(),
    };
    debug!(state_file = %provider.state_file().display(), "registering personality fact");
    let mut registry = FactRegistry::new();
    registry.register(Box::new(provider));
    registry
}

/// Render published facts as `name=VALUE` lines.
///
/// An empty fact set renders as the empty string.
#[must_use]
pub fn render_text(facts: &BTreeMap<String, Personality>) -> String {
    let mut out = String::new();
    for (name, value) in facts {
        out.push_str(name);
        out.push('=');
        out.push_str(value.as_str());
        out.push('\n');
    }
    out
}

/// Render published facts as a single JSON object.
///
/// An empty fact set renders as `{}`.
pub fn render_json(facts: &BTreeMap<String, Personality>) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(facts)?)
}

/// Collect every registered fact and print it on stdout.
///
/// An absent fact prints nothing and still succeeds: a stale or unreadable
/// state file must never break the host's collection run.
pub fn cmd_collect(state_file: Option<&Path>, json: bool) -> Result<(), CliError> {
    let registry = build_registry(state_file);
    let facts = registry.collect_all();
    debug!(published = facts.len(), json, "collection cycle finished");

    let mut rendered = if json {
        render_json(&facts)?
    } else {
        render_text(&facts)
    };
    if json {
        rendered.push('\n');
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
