use super::{is_valid_email, prelude::*};

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub email: EmailAddress,
    pub password: String,
}

/// Signs up a new user.
///
/// The profile starts incomplete with the role [`Role::User`].
pub fn register_with_email<R: ProfileRepo>(repo: &R, new_profile: NewProfile) -> Result<Profile> {
    let NewProfile { email, password } = new_profile;
    if !is_valid_email(&email) {
        return Err(Error::EmailAddress);
    }
    let password = password.parse::<Password>()?;
    if repo.try_get_profile_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let profile = Profile {
        id: Id::new(),
        email,
        password,
        role: Role::User,
        name: None,
        phone: None,
        avatar_url: None,
        organization_name: None,
        location_text: None,
        home_pos: None,
        is_complete: false,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new profile: email = {}", profile.email);
    repo.create_profile(&profile)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_profile(email: &str, password: &str) -> NewProfile {
        NewProfile {
            email: EmailAddress::new_unchecked(email.into()),
            password: password.into(),
        }
    }

    #[test]
    fn register_two_users() {
        let db = MockDb::default();
        assert!(register_with_email(&db, new_profile("foo@bar.de", "secret1")).is_ok());
        assert!(register_with_email(&db, new_profile("baz@bar.de", "secret2")).is_ok());
        assert_eq!(2, db.profiles.borrow().len());
        let p = &db.profiles.borrow()[0];
        assert_eq!(Role::User, p.role);
        assert!(!p.is_complete);
        assert!(p.password.verify("secret1"));
    }

    #[test]
    fn reject_existing_email() {
        let db = MockDb::default();
        assert!(register_with_email(&db, new_profile("foo@bar.de", "secret1")).is_ok());
        assert!(matches!(
            register_with_email(&db, new_profile("foo@bar.de", "secret2")),
            Err(Error::UserExists)
        ));
    }

    #[test]
    fn reject_invalid_input() {
        let db = MockDb::default();
        assert!(matches!(
            register_with_email(&db, new_profile("fooo@", "secret1")),
            Err(Error::EmailAddress)
        ));
        assert!(matches!(
            register_with_email(&db, new_profile("foo@bar.de", "123")),
            Err(Error::Password)
        ));
        assert!(db.profiles.borrow().is_empty());
    }
}
