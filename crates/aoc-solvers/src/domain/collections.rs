//! Hash collections used by the puzzle solvers
//!
//! With the `fx-hash` feature these are the `rustc-hash` collections,
//! otherwise the std ones. Construct them with `default()`.

#[cfg(feature = "fx-hash")]
pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

#[cfg(not(feature = "fx-hash"))]
pub use std::collections::{HashMap, HashSet};
