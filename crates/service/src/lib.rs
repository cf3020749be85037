//! Service layer providing business-oriented operations on top of models.
//! - Orders: create/list through a repository over SeaORM.
//! - Users: a JSON-file backed fake store with bulk dump/load and id lookup.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod orders;
pub mod users;
