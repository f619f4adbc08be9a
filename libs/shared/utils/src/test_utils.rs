use std::sync::Arc;

use shared_config::AppConfig;
use shared_models::auth::{AuthUser, Role};

use crate::jwt::sign_token;

pub struct TestConfig {
    pub jwt_secret: String,
    pub store_url: String,
    pub store_service_key: String,
    pub uploads_dir: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            store_url: "http://localhost:54321".to_string(),
            store_service_key: "test-service-key".to_string(),
            uploads_dir: "uploads".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_store_url(store_url: &str) -> Self {
        Self {
            store_url: store_url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            store_url: self.store_url.clone(),
            store_service_key: self.store_service_key.clone(),
            jwt_secret: self.jwt_secret.clone(),
            port: 8500,
            uploads_dir: self.uploads_dir.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl TestUser {
    pub fn new(id: &str, email: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            role,
        }
    }

    pub fn doctor(id: &str) -> Self {
        Self::new(id, "doctor@example.com", Role::Doctor)
    }

    pub fn patient(id: &str) -> Self {
        Self::new(id, "patient@example.com", Role::Patient)
    }

    pub fn admin(id: &str) -> Self {
        Self::new(id, "admin@example.com", Role::Admin)
    }

    pub fn to_auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id.clone(),
            role: self.role,
            email: Some(self.email.clone()),
        }
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str) -> String {
        sign_token(&user.id, user.role, Some(&user.email), secret)
            .expect("signing a test token should not fail")
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        sign_token(&user.id, user.role, Some(&user.email), "wrong-secret")
            .expect("signing a test token should not fail")
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}
