//! Identifier types shared between crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a placed element.
///
/// Allocated by the scene store from a monotonic counter and never reused,
/// so an id held by the host always names at most one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
