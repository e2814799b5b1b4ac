use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::role::Role;

/// The signed-in user as it is kept for the lifetime of a session and
/// persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: HeaplessString<100>,
    pub name: HeaplessString<100>,
    pub role: Role,
}

/// Credentials submitted from the login form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please enter both email and password"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// In-process authentication state owned by the auth service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<SessionUser>,
}

impl SessionState {
    pub fn new(user: Option<SessionUser>) -> Self {
        Self { user }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) -> Option<SessionUser> {
        self.user.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: Uuid::from_u128(1),
            email: HeaplessString::from_str("customer@trackit.com").unwrap(),
            name: HeaplessString::from_str("John Smith").unwrap(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_session_user_json_shape() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["email"], "customer@trackit.com");
        assert_eq!(json["name"], "John Smith");
        assert_eq!(json["role"], "customer");
        assert_eq!(json["id"], Uuid::from_u128(1).to_string());

        let back: SessionUser = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample_user());
    }

    #[test]
    fn test_login_request_validation() {
        assert!(LoginRequest::new("admin@trackit.com", "demo123").validate().is_ok());
        assert!(LoginRequest::new("admin@trackit.com", "").validate().is_err());
        assert!(LoginRequest::new("not-an-email", "demo123").validate().is_err());
        assert!(LoginRequest::new("", "").validate().is_err());
    }

    #[test]
    fn test_session_state_transitions() {
        let mut state = SessionState::default();
        assert!(!state.is_authenticated());

        state.sign_in(sample_user());
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.role), Some(Role::Customer));

        assert_eq!(state.sign_out(), Some(sample_user()));
        assert!(state.user().is_none());
    }
}
