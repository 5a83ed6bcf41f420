use std::{borrow::Borrow, fmt, str::FromStr};

use uuid::Uuid;

/// Opaque public identifier of issues and profiles.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(String);

impl Id {
    pub fn new() -> Self {
        Uuid::new_v4().into()
    }

    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Id {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<Uuid> for Id {
    fn from(from: Uuid) -> Self {
        Self(from.as_simple().to_string())
    }
}

impl From<Id> for String {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique_and_valid() {
        let a = Id::new();
        let b = Id::new();
        assert!(a.is_valid());
        assert_ne!(a, b);
        assert_eq!(32, a.as_str().len());
    }

    #[test]
    fn blank_ids_are_invalid() {
        assert!(!Id::from("").is_valid());
        assert!(!Id::from("  ").is_valid());
    }
}
