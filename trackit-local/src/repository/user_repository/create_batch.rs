use async_trait::async_trait;
use std::collections::HashSet;
use std::error::Error;
use trackit_db::models::{user::UserModel, IndexAware};
use trackit_db::repository::create_batch::CreateBatch;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl CreateBatch<UserModel> for UserRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<UserModel>,
    ) -> Result<Vec<UserModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut users = self.users.write();
        let mut cache = self.user_idx_cache.write();

        let mut seen = HashSet::new();
        for item in &items {
            if users.contains_key(&item.id) || !seen.insert(item.id) {
                return Err(format!("User {} already exists", item.id).into());
            }
        }

        for item in &items {
            cache.add(item.to_index());
            users.insert(item.id, item.clone());
        }
        tracing::debug!(count = items.len(), "created users");

        Ok(items)
    }
}
