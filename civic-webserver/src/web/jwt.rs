use std::{collections::HashSet, time::Duration};

use anyhow::{anyhow, Result};
use civic_core::entities::Timestamp;
use jwt_service::JwtService;
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VALIDITY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The profile id
    sub: String,
    /// Expiry time as Unix timestamp
    exp: i64,
}

pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(time_valid: Duration) -> Self {
        Self {
            jwt_service: JwtService::new(),
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, profile_id: &str) -> Result<String> {
        let valid_secs = i64::try_from(self.time_valid.as_secs())?;
        let exp = Timestamp::now().as_secs() + valid_secs;
        let claims = Claims {
            sub: profile_id.to_string(),
            exp,
        };
        self.jwt_service.encode(&claims)
    }

    pub fn validate_token_and_get_profile_id(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.jwt_service.decode(token)?;
        Ok(claims.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens();
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    /// Expired tokens need no blacklisting.
    fn remove_invalid_tokens(&self) {
        let jwt_service = &self.jwt_service;
        self.lock()
            .retain(|token| jwt_service.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

impl Default for JwtState {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDITY)
    }
}

#[cfg(feature = "jwt")]
mod jwt_service {
    use super::{Claims, Result};
    use base64::Engine as _;
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

    fn generate_secret() -> String {
        base64::engine::general_purpose::STANDARD.encode(rand::random::<[u8; 32]>())
    }

    pub struct Key {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl Key {
        pub fn new(secret: &str) -> Self {
            Self {
                encoding_key: EncodingKey::from_secret(secret.as_bytes()),
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            }
        }

        pub fn random() -> Self {
            Self::new(&generate_secret())
        }
    }

    pub struct JwtService {
        key: Key,
    }

    impl JwtService {
        pub fn new() -> Self {
            Self { key: Key::random() }
        }
        pub fn encode(&self, claims: &Claims) -> Result<String> {
            let token = encode(&Header::default(), claims, &self.key.encoding_key)?;
            Ok(token)
        }
        pub fn decode(&self, token: &str) -> Result<Claims> {
            let token_data =
                decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
            Ok(token_data.claims)
        }
    }
}

#[cfg(not(feature = "jwt"))]
mod jwt_service {
    use super::{Claims, Result};
    use anyhow::bail;

    pub struct JwtService;

    impl JwtService {
        pub fn new() -> Self {
            Self
        }
        pub fn encode(&self, _claims: &Claims) -> Result<String> {
            bail!("JWT support is disabled")
        }
        pub fn decode(&self, _token: &str) -> Result<Claims> {
            bail!("JWT support is disabled")
        }
    }
}

#[cfg(test)]
#[cfg(feature = "jwt")]
mod tests {
    use super::*;

    #[test]
    fn blacklisted_tokens_are_rejected() {
        let jwt_state = JwtState::default();
        let token = jwt_state.generate_token("profile-1").unwrap();
        assert_eq!(
            "profile-1",
            jwt_state.validate_token_and_get_profile_id(&token).unwrap()
        );
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(jwt_state.validate_token_and_get_profile_id(&token).is_err());
    }

    #[test]
    fn invalid_tokens_are_removed_from_blacklist() {
        let jwt_state = JwtState::default();
        let token = jwt_state.generate_token("profile-1").unwrap();
        jwt_state.blacklist_token("dubidubidu".to_string());
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(!jwt_state.is_on_blacklist("dubidubidu"));
    }
}
