use std::{collections::HashSet, path::{Path, PathBuf}, sync::Arc};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::storage::json_document;
use crate::users::domain::User;

/// Write `users` to `path`, replacing whatever the file held before.
///
/// Ids must be unique; a collection with a repeated id is rejected and the
/// file is left untouched.
#[instrument(skip_all, fields(path = %path.display(), count = users.len()))]
pub async fn dump_users(users: &[User], path: &Path) -> Result<(), ServiceError> {
    let mut seen = HashSet::with_capacity(users.len());
    if let Some(dup) = users.iter().find(|u| !seen.insert(u.id)) {
        return Err(ServiceError::Validation(format!("duplicate user id {}", dup.id)));
    }
    json_document::write_document(path, users).await?;
    debug!("users dumped");
    Ok(())
}

/// Load every user from `path`, in file order.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn get_all_users(path: &Path) -> Result<Vec<User>, ServiceError> {
    let users: Vec<User> = json_document::read_document(path).await?;
    debug!(count = users.len(), "users loaded");
    Ok(users)
}

/// Handle on one users document.
///
/// The path is fixed at construction so lookups never depend on ambient
/// process state.
#[derive(Clone, Debug)]
pub struct UserStore {
    file_path: PathBuf,
}

impl UserStore {
    /// Bind to `path` without touching the filesystem.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    /// Bind to `path`, creating an empty document if none exists.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = Self::new(path);
        let created = json_document::ensure_document(&store.file_path, &Vec::<User>::new()).await?;
        if created {
            info!(path = %store.file_path.display(), "initialized empty users document");
        }
        Ok(Arc::new(store))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub async fn dump_users(&self, users: &[User]) -> Result<(), ServiceError> {
        dump_users(users, &self.file_path).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ServiceError> {
        get_all_users(&self.file_path).await
    }

    /// Find the user whose id equals `id`; `NotFound` when absent.
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, ServiceError> {
        self.get_all_users()
            .await?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| ServiceError::not_found(&format!("user {id}")))
    }

    /// Delete the backing file.
    pub async fn destroy(&self) -> Result<(), ServiceError> {
        json_document::remove_document(&self.file_path).await
    }
}
