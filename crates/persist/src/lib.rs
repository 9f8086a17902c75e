//! Persistence: the `.phy` single-file world container.
//!
//! # Invariants
//! - Loading is fail-closed: bad magic, schema mismatch, or payload hash
//!   mismatch all refuse the file rather than guessing.
//! - Saving writes the whole container in one shot; there is no partial
//!   or incremental update path.

pub mod store;

pub use store::{StoreError, load_world, save_world};
