use serde::{Deserialize, Serialize};

/// Role tag stored in the `user_type` field.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Staff,
    Customer,
}

/// One entry of the users document.
///
/// `hashed_password` is opaque here; hashing happens in whatever wrote the
/// file. `created_by` points at another user id without any integrity check.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    pub hashed_password: String,
    pub created_by: i64,
}
