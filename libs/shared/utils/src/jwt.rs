use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use tracing::debug;

use shared_models::auth::{AuthUser, JwtClaims, Role};

type HmacSha256 = Hmac<Sha256>;

/// Tokens issued at login are valid for one hour.
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Sign an HS256 token carrying the account id, role and email.
pub fn sign_token(
    user_id: &str,
    role: Role,
    email: Option<&str>,
    jwt_secret: &str,
) -> Result<String, String> {
    if jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    let now = Utc::now();
    let exp = now + Duration::hours(TOKEN_TTL_HOURS);

    let header = json!({
        "alg": "HS256",
        "typ": "JWT"
    });

    let claims = json!({
        "sub": user_id,
        "role": role,
        "email": email,
        "iat": now.timestamp(),
        "exp": exp.timestamp()
    });

    let header_b64 = URL_SAFE_NO_PAD.encode(header.to_string());
    let claims_b64 = URL_SAFE_NO_PAD.encode(claims.to_string());
    let signing_input = format!("{}.{}", header_b64, claims_b64);

    let mut mac = HmacSha256::new_from_slice(jwt_secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", signing_input, signature))
}

pub fn validate_token(token: &str, jwt_secret: &str) -> Result<AuthUser, String> {
    if jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    // Split token into parts
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid token format".to_string());
    }

    let header_b64 = parts[0];
    let claims_b64 = parts[1];
    let signature_b64 = parts[2];

    let signature = match URL_SAFE_NO_PAD.decode(signature_b64) {
        Ok(sig) => sig,
        Err(e) => {
            debug!("Failed to decode signature: {}", e);
            return Err("Invalid signature encoding".to_string());
        }
    };

    let signing_input = format!("{}.{}", header_b64, claims_b64);

    let mut mac = match HmacSha256::new_from_slice(jwt_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return Err("Failed to create HMAC".to_string()),
    };

    mac.update(signing_input.as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Token signature verification failed");
        return Err("Invalid token signature".to_string());
    }

    // Decode claims
    let claims_json = match URL_SAFE_NO_PAD.decode(claims_b64) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(json_str) => json_str,
            Err(_) => return Err("Invalid claims encoding".to_string()),
        },
        Err(_) => return Err("Invalid claims encoding".to_string()),
    };

    let claims: JwtClaims = match serde_json::from_str(&claims_json) {
        Ok(c) => c,
        Err(e) => {
            debug!("Failed to parse claims: {}", e);
            return Err("Invalid claims format".to_string());
        }
    };

    // Check expiration
    if let Some(exp) = claims.exp {
        let now = Utc::now().timestamp() as u64;
        if exp < now {
            debug!("Token expired at {} (now: {})", exp, now);
            return Err("Token expired".to_string());
        }
    }

    let user = AuthUser {
        id: claims.sub,
        role: claims.role,
        email: claims.email,
    };

    debug!("Token validated successfully for user: {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::auth::Role;

    const SECRET: &str = "test-secret-key-for-jwt-validation-must-be-long-enough";

    fn raw_token(claims: serde_json::Value, secret: &str) -> String {
        let header = json!({"alg": "HS256", "typ": "JWT"});
        let header_b64 = URL_SAFE_NO_PAD.encode(header.to_string());
        let claims_b64 = URL_SAFE_NO_PAD.encode(claims.to_string());
        let signing_input = format!("{}.{}", header_b64, claims_b64);

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{}.{}", signing_input, signature)
    }

    #[test]
    fn sign_then_validate_round_trips_identity() {
        let token = sign_token("user-1", Role::Doctor, Some("doc@example.com"), SECRET).unwrap();

        let user = validate_token(&token, SECRET).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.role, Role::Doctor);
        assert_eq!(user.email.as_deref(), Some("doc@example.com"));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = sign_token("user-1", Role::Patient, None, "wrong-secret").unwrap();

        let err = validate_token(&token, SECRET).unwrap_err();
        assert_eq!(err, "Invalid token signature");
    }

    #[test]
    fn expired_token_is_rejected() {
        let past = Utc::now().timestamp() - 3600;
        let token = raw_token(
            json!({"sub": "user-1", "role": "patient", "exp": past}),
            SECRET,
        );

        let err = validate_token(&token, SECRET).unwrap_err();
        assert_eq!(err, "Token expired");
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(validate_token("not-a-token", SECRET).is_err());
        assert!(validate_token("a.b", SECRET).is_err());
        assert!(validate_token("", SECRET).is_err());
    }

    #[test]
    fn unknown_role_claim_is_rejected() {
        let token = raw_token(json!({"sub": "user-1", "role": "superuser"}), SECRET);

        let err = validate_token(&token, SECRET).unwrap_err();
        assert_eq!(err, "Invalid claims format");
    }

    #[test]
    fn empty_secret_refuses_to_sign_or_validate() {
        assert!(sign_token("user-1", Role::Patient, None, "").is_err());
        assert!(validate_token("a.b.c", "").is_err());
    }
}
