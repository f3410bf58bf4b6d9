//! Employee roster storage.
//!
//! The roster is the only owner of employee records and the only write
//! path for them.

mod store;

pub use store::Roster;
