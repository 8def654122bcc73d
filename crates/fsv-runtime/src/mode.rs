#![forbid(unsafe_code)]

//! Runtime mode definitions for Strict and Hardened operation.

use serde::{Deserialize, Serialize};

/// Operational mode governing how much input validation the engine performs.
///
/// - **Strict**: Accept whatever numbers the caller provides; non-finite
///   coordinates flow through the arithmetic unchanged.
/// - **Hardened**: Reject non-finite samples and path points before any
///   summation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuntimeMode {
    #[default]
    Strict,
    Hardened,
}

impl RuntimeMode {
    #[must_use]
    pub fn rejects_non_finite(self) -> bool {
        self == Self::Hardened
    }
}
