//! # Storage Capability
//!
//! Calculations are stateless and nothing is persisted. Front ends still hold
//! a [`Storage`] handle and report each completed calculation to it, so a
//! real history store can be injected later without touching the call sites.

use std::fmt::Debug;

use crate::calculations::{Calculation, CalculationOutput};

/// Injected persistence capability.
pub trait Storage: Send + Sync + Debug {
    /// Called after a calculation succeeds. The default keeps nothing.
    fn record(&self, _calculation: &Calculation, _output: &CalculationOutput) {}
}

/// Stateless default storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemStorage;

impl MemStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for MemStorage {}
