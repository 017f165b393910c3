//! # Registry Module
//!
//! Explicit fact registration and collection.
//!
//! The host builds a registry at startup, registers the providers it wants,
//! and drives collection on its own schedule. There is no global registry
//! and no load-time self-registration.

use crate::personality::Personality;
use crate::provider::{FactProvider, FactResult};
use std::collections::BTreeMap;

/// Registry of fact providers, built by the host at startup.
#[derive(Default)]
pub struct FactRegistry {
    providers: Vec<Box<dyn FactProvider>>,
}

impl FactRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider.
    ///
    /// A later provider with the same name replaces the earlier one.
    pub fn register(&mut self, provider: Box<dyn FactProvider>) {
        self.providers.retain(|p| p.name() != provider.name());
        self.providers.push(provider);
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Run one collection cycle over every registered provider.
    ///
    /// Returns the published facts in deterministic (name) order. A provider
    /// that yields [`FactResult::Absent`] publishes nothing and is omitted.
    #[must_use]
    pub fn collect_all(&self) -> BTreeMap<String, Personality> {
        let mut facts = BTreeMap::new();
        for provider in &self.providers {
            if let FactResult::Value(personality) = provider.collect() {
                facts.insert(provider.name().to_string(), personality);
            }
        }
        facts
    }

    /// Run one collection cycle for a single named fact.
    ///
    /// An unknown name collapses to [`FactResult::Absent`], the same signal
    /// the host sees for any other unavailable value.
    #[must_use]
    pub fn collect_named(&self, name: &str) -> FactResult {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map_or(FactResult::Absent, |p| p.collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
