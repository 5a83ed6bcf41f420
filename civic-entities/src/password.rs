use pwhash::bcrypt;
use std::{fmt, str::FromStr};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A bcrypt password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password must have at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.chars().count() < MIN_PASSWORD_LEN {
            return Err(ParseError::TooShort);
        }
        let hash = bcrypt::hash(plain)?;
        Ok(Self(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let pw: Password = "secret123".parse().unwrap();
        assert!(pw.verify("secret123"));
        assert!(!pw.verify("secret124"));
        assert_ne!("secret123", pw.as_hash());
    }

    #[test]
    fn reject_short_passwords() {
        assert!(matches!("abc".parse::<Password>(), Err(ParseError::TooShort)));
    }

    #[test]
    fn debug_hides_hash() {
        let pw = Password::from_hash("$2y$abc".into());
        assert_eq!("Password(***)", format!("{pw:?}"));
    }
}
