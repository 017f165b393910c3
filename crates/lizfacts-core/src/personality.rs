//! # Personality Module
//!
//! The operating role of a LizardFS master node.
//!
//! An external election process records the current role on disk as one of
//! two literal tokens, `MASTER` or `SHADOW`. The set is closed and the
//! comparison is strict: no trimming, no case folding. A value that differs
//! in any byte is not a personality.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The role a LizardFS master node currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Personality {
    /// The active master serving the cluster.
    Master,
    /// A standby replica following the active master.
    Shadow,
}

impl Personality {
    /// Every member of the closed set, in token order.
    pub const ALL: [Self; 2] = [Self::Master, Self::Shadow];

    /// The literal token the election process writes for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "MASTER",
            Self::Shadow => "SHADOW",
        }
    }

    /// Strict lookup of a token in the closed set.
    ///
    /// Exact, case-sensitive equality only: `"master"` and `"MASTER "` are
    /// not members.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MASTER" => Some(Self::Master),
            "SHADOW" => Some(Self::Shadow),
            _ => None,
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error from parsing a string that is not a member of the closed set.
///
/// Carries the rejected input. This error never appears on the collection
/// path, where an unrecognized value simply publishes nothing; it exists for
/// hosts that parse previously published values back into the domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a personality token: {0:?}")]
pub struct ParsePersonalityError(pub String);

impl FromStr for Personality {
    type Err = ParsePersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParsePersonalityError(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
