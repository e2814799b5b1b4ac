use async_trait::async_trait;
use std::error::Error;
use trackit_db::models::user::UserModel;
use trackit_db::repository::load::Load;
use uuid::Uuid;

use super::repo_impl::UserRepositoryImpl;

#[async_trait]
impl Load<UserModel> for UserRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<UserModel, Box<dyn Error + Send + Sync>> {
        self.users
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| format!("User {id} not found").into())
    }
}
