use trackit_db::models::user::{UserIdxModel, UserModel};

use crate::repository::{SharedIdxCache, Table};

pub struct UserRepositoryImpl {
    pub(super) users: Table<UserModel>,
    pub(super) user_idx_cache: SharedIdxCache<UserIdxModel>,
}

impl UserRepositoryImpl {
    pub fn new(users: Table<UserModel>, user_idx_cache: SharedIdxCache<UserIdxModel>) -> Self {
        Self {
            users,
            user_idx_cache,
        }
    }
}
