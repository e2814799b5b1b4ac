use std::error::Error;
use trackit_db::models::user::UserModel;
use trackit_db::utils::hash_as_i64;

use super::repo_impl::UserRepositoryImpl;

impl UserRepositoryImpl {
    /// Exact, case-sensitive match on the stored address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, Box<dyn Error + Send + Sync>> {
        let email_hash = hash_as_i64(&email)?;
        let indices = self
            .user_idx_cache
            .read()
            .get_by_i64_index("email_hash", &email_hash);

        let users = self.users.read();
        Ok(indices
            .iter()
            .filter_map(|idx| users.get(&idx.id))
            .find(|user| user.email.as_str() == email)
            .cloned())
    }
}
