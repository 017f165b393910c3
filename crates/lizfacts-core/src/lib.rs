//! # lizfacts-core
//!
//! Validated LizardFS host facts: THE LOGIC.
//!
//! A LizardFS master node runs as either the active `MASTER` or a standby
//! `SHADOW`; an external election process records the current role in a
//! single-line state file. This crate reads that file, validates its content
//! against the closed token set, and publishes the result as a host
//! inventory fact. When no validated value exists it publishes nothing.
//!
//! Collection is a pure read-classify-report pipeline:
//! - one bounded open and read per cycle; no caching or retries
//! - strict, case-sensitive token validation; never raw file content
//! - every failure mode collapses to "absent": a best-effort fact must not
//!   break the host's collection run

pub mod personality;
pub mod provider;
pub mod registry;
pub mod statefile;

pub use personality::{ParsePersonalityError, Personality};
pub use provider::{FACT_NAME, FactProvider, FactResult, PersonalityProvider};
pub use registry::FactRegistry;
pub use statefile::{READ_BYTE_CAP, STATE_FILE_PATH, read_first_line};
