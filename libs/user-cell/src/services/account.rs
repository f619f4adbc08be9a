use chrono::Utc;
use regex::Regex;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::store::StoreClient;
use shared_utils::jwt::sign_token;
use shared_utils::password::{hash_password, verify_password};

use crate::error::AccountError;
use crate::models::{LoginRequest, PublicUser, RegisterRequest, SetupRequest, UserAccount};

const COLLECTION: &str = "users";

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

pub struct AccountService {
    store: StoreClient,
    jwt_secret: String,
}

impl AccountService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
            jwt_secret: config.jwt_secret.clone(),
        }
    }

    /// Register a new account. Both uniqueness checks run before any
    /// write, so a rejected registration leaves no partial state.
    pub async fn register(&self, request: RegisterRequest) -> Result<PublicUser, AccountError> {
        debug!("Registering user: {}", request.username);

        for (field, value) in [
            ("username", &request.username),
            ("password", &request.password),
            ("first_name", &request.first_name),
            ("last_name", &request.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(AccountError::Validation(format!("{} is required", field)));
            }
        }

        let email_ok = Regex::new(EMAIL_PATTERN)
            .map(|re| re.is_match(&request.email))
            .unwrap_or(false);
        if !email_ok {
            return Err(AccountError::Validation(
                "Invalid email address".to_string(),
            ));
        }

        let by_username = self
            .store
            .find(COLLECTION, &format!("username=eq.{}", request.username))
            .await?;
        if !by_username.is_empty() {
            return Err(AccountError::DuplicateUsername);
        }

        let by_email = self
            .store
            .find(COLLECTION, &format!("email=eq.{}", request.email))
            .await?;
        if !by_email.is_empty() {
            return Err(AccountError::DuplicateEmail);
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| AccountError::Hash(e.to_string()))?;

        let document = json!({
            "username": request.username,
            "password_hash": password_hash,
            "role": request.role.unwrap_or_default(),
            "first_name": request.first_name,
            "last_name": request.last_name,
            "email": request.email,
            "address": request.address,
            "phone_number": request.phone_number,
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        });

        let stored = self.store.insert(COLLECTION, document).await?;

        let account: UserAccount = serde_json::from_value(stored)?;
        debug!("User registered with ID: {}", account.id);

        Ok(account.into_public())
    }

    /// Exchange username and password for a signed token. Unknown
    /// username and wrong password are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> Result<String, AccountError> {
        debug!("Login attempt for user: {}", request.username);

        let result = self
            .store
            .find(COLLECTION, &format!("username=eq.{}", request.username))
            .await?;

        let account: UserAccount = match result.into_iter().next() {
            Some(doc) => serde_json::from_value(doc)?,
            None => return Err(AccountError::InvalidCredentials),
        };

        let matches = verify_password(&request.password, &account.password_hash)
            .map_err(|e| AccountError::Hash(e.to_string()))?;
        if !matches {
            return Err(AccountError::InvalidCredentials);
        }

        let token = sign_token(
            &account.id.to_string(),
            account.role,
            Some(&account.email),
            &self.jwt_secret,
        )
        .map_err(AccountError::Token)?;

        debug!("Login succeeded for user: {}", account.id);
        Ok(token)
    }

    /// Patch profile fields on an existing account.
    pub async fn setup(
        &self,
        user_id: &str,
        request: SetupRequest,
    ) -> Result<PublicUser, AccountError> {
        debug!("Updating profile for user: {}", user_id);

        let mut patch = serde_json::Map::new();

        if let Some(first_name) = request.first_name {
            patch.insert("first_name".to_string(), json!(first_name));
        }
        if let Some(last_name) = request.last_name {
            patch.insert("last_name".to_string(), json!(last_name));
        }
        if let Some(email) = request.email {
            patch.insert("email".to_string(), json!(email));
        }
        if let Some(address) = request.address {
            patch.insert("address".to_string(), json!(address));
        }
        if let Some(phone_number) = request.phone_number {
            patch.insert("phone_number".to_string(), json!(phone_number));
        }

        patch.insert("updated_at".to_string(), json!(Utc::now().to_rfc3339()));

        let updated = self
            .store
            .update_by_id(COLLECTION, user_id, serde_json::Value::Object(patch))
            .await?
            .ok_or(AccountError::NotFound)?;

        let account: UserAccount = serde_json::from_value(updated)?;
        Ok(account.into_public())
    }

    pub async fn get_by_id(&self, user_id: &str) -> Result<PublicUser, AccountError> {
        let result = self
            .store
            .find_by_id(COLLECTION, user_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        let account: UserAccount = serde_json::from_value(result)?;
        Ok(account.into_public())
    }
}
