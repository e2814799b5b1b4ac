use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trackit_api::{Role, SessionUser};
use uuid::Uuid;

use crate::models::{HasPrimaryKey, IdxModelCache, Identifiable, Index, IndexAware, Indexable};

/// A user account from the mock directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,
    pub email: HeaplessString<100>,
    pub name: HeaplessString<100>,
    pub role: Role,
}

impl From<&UserModel> for SessionUser {
    fn from(user: &UserModel) -> Self {
        SessionUser {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

impl Identifiable for UserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Index model for User
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdxModel {
    pub id: Uuid,
    pub email_hash: Option<i64>,
}

impl IndexAware for UserModel {
    type IndexType = UserIdxModel;

    fn to_index(&self) -> Self::IndexType {
        UserIdxModel {
            id: self.id,
            email_hash: crate::utils::hash_as_i64(&self.email.as_str()).ok(),
        }
    }
}

impl Identifiable for UserIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for UserIdxModel {}

impl Indexable for UserIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("email_hash".to_string(), self.email_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        HashMap::new()
    }
}

impl HasPrimaryKey for UserIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

pub type UserIdxModelCache = IdxModelCache<UserIdxModel>;
