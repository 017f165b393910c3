//! # Provider Module
//!
//! Fact collection: the seam a host inventory framework consumes, and the
//! personality provider itself.
//!
//! A provider is a pure read-classify-report pipeline. It keeps no state
//! between cycles and cannot fail: a cycle either publishes a validated
//! value or publishes nothing. The host drives the schedule and owns
//! caching, report serialization, and transport.

use crate::personality::Personality;
use crate::statefile::{self, STATE_FILE_PATH};
use std::path::{Path, PathBuf};

/// Fact name the personality value is published under.
pub const FACT_NAME: &str = "lizardfs_personality";

/// Outcome of one collection cycle.
///
/// There is no error variant. Every failure mode (missing file, unreadable
/// file, empty file, unrecognized content) collapses to
/// [`FactResult::Absent`]; a best-effort inventory fact must never break the
/// host's collection run. A present value is always a member of the closed
/// set, never raw file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactResult {
    /// A validated personality to publish.
    Value(Personality),
    /// No value published this cycle.
    Absent,
}

impl FactResult {
    /// The published personality, if any.
    #[must_use]
    pub fn value(self) -> Option<Personality> {
        match self {
            Self::Value(personality) => Some(personality),
            Self::Absent => None,
        }
    }

    /// Whether this cycle published nothing.
    #[must_use]
    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<Personality>> for FactResult {
    fn from(value: Option<Personality>) -> Self {
        value.map_or(Self::Absent, Self::Value)
    }
}

/// A named fact with a zero-argument collection entry point.
///
/// Providers are constructed and registered explicitly at startup; see
/// [`FactRegistry`](crate::registry::FactRegistry). Nothing registers itself
/// as a load-time side effect.
pub trait FactProvider {
    /// Name the fact is published under.
    fn name(&self) -> &str;

    /// Run one collection cycle.
    ///
    /// Must be free of side effects beyond its own reads, and must not
    /// fail: "nothing to publish" is a result, not an error.
    fn collect(&self) -> FactResult;
}

/// Provider for the `lizardfs_personality` fact.
///
/// Reads the master election state file and publishes the recorded role.
/// Stateless: every cycle re-reads the file, so the result always reflects
/// on-disk state at call time.
#[derive(Debug, Clone)]
pub struct PersonalityProvider {
    state_file: PathBuf,
}

impl Default for PersonalityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalityProvider {
    /// Provider reading the well-known state file location.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state_file: PathBuf::from(STATE_FILE_PATH),
        }
    }

    /// Provider reading an alternate state file location.
    #[must_use]
    pub fn with_state_file(path: impl Into<PathBuf>) -> Self {
        Self {
            state_file: path.into(),
        }
    }

    /// The state file this provider reads.
    #[must_use]
    pub fn state_file(&self) -> &Path {
        &self.state_file
    }
}

impl FactProvider for PersonalityProvider {
    fn name(&self) -> &str {
        FACT_NAME
    }

    fn collect(&self) -> FactResult {
        statefile::read_first_line(&self.state_file)
            .as_deref()
            .and_then(Personality::from_token)
            .into()
    }
}

// =============================================================================
// TESTS
// =============================================================================
