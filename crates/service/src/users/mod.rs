//! Fake user backend: the whole user collection lives in one JSON file.
//!
//! Stands in for a real user-management service in tests and local
//! development. There is no locking; concurrent dumps race and the last
//! writer wins.

pub mod domain;
pub mod store;

pub use domain::{User, UserType};
pub use store::{dump_users, get_all_users, UserStore};
