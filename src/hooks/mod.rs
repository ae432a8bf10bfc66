//! Process-wide hooks.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! use voe::{contract::ContractViolation, hooks};
//!
//! static VIOLATIONS: AtomicUsize = AtomicUsize::new(0);
//!
//! struct CountViolations;
//!
//! impl hooks::ContractHook for CountViolations {
//!     fn on_violation(
//!         &self,
//!         violation: &ContractViolation,
//!         location: &'static core::panic::Location<'static>,
//!     ) {
//!         VIOLATIONS.fetch_add(1, Ordering::Relaxed);
//!         eprintln!("{location}: {violation}");
//!     }
//! }
//!
//! hooks::register_contract_hook(&CountViolations);
//! ```
//!
//! # Hook Types
//!
//! - [`ContractHook`]: runs right before a [`ContractViolation`] panics, for
//!   example to forward the violation to a custom logger or crash reporter.
//!
//! Hooks are stored in a lock that is a `spin::RwLock` by default and a
//! `std::sync::RwLock` with the `std` feature. The lock is never held while a
//! hook runs, so hooks may register or unregister hooks themselves.

mod hook_lock;

use core::panic::Location;

use self::hook_lock::HookLock;
use crate::contract::ContractViolation;

/// Observer for contract violations.
///
/// Closures taking `(&ContractViolation, &'static Location<'static>)`
/// implement this trait.
pub trait ContractHook: 'static + Send + Sync {
    /// Called with the violation and the location of the offending call,
    /// before the violation panics.
    fn on_violation(&self, violation: &ContractViolation, location: &'static Location<'static>);
}

impl<F> ContractHook for F
where
    F: Fn(&ContractViolation, &'static Location<'static>) + 'static + Send + Sync,
{
    #[inline]
    fn on_violation(&self, violation: &ContractViolation, location: &'static Location<'static>) {
        self(violation, location);
    }
}

static CONTRACT_HOOK: HookLock<&'static dyn ContractHook> = HookLock::new();

/// Installs the contract hook and returns the previously installed one.
pub fn register_contract_hook(hook: &'static dyn ContractHook) -> Option<&'static dyn ContractHook> {
    CONTRACT_HOOK.replace(Some(hook))
}

/// Removes the contract hook and returns it.
pub fn unregister_contract_hook() -> Option<&'static dyn ContractHook> {
    CONTRACT_HOOK.replace(None)
}

pub(crate) fn run_contract_hook(violation: &ContractViolation, location: &'static Location<'static>) {
    if let Some(hook) = CONTRACT_HOOK.load() {
        hook.on_violation(violation, location);
    }
}
