use super::*;

pub fn register_with_email(
    connections: &sqlite::Connections,
    new_profile: usecases::NewProfile,
) -> Result<Profile> {
    let email = new_profile.email.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_with_email(conn, new_profile).inspect_err(|err| {
            log::warn!("Failed to register {email}: {err}");
        })
    })?)
}

pub fn login_with_email(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
) -> Result<Profile> {
    let db = connections.shared()?;
    Ok(usecases::login_with_email(&db, credentials)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_and_login() {
        let fixture = BackendFixture::new();
        let profile = flows::register_with_email(
            &fixture.db_connections,
            usecases::NewProfile {
                email: "Jane@Example.org".parse().unwrap(),
                password: "secret".into(),
            },
        )
        .unwrap();
        assert_eq!("jane@example.org", profile.email.as_str());
        assert!(!profile.is_complete);

        let logged_in = flows::login_with_email(
            &fixture.db_connections,
            &usecases::Credentials {
                email: &"jane@example.org".parse().unwrap(),
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!(profile.id, logged_in.id);
    }

    #[test]
    fn register_twice() {
        let fixture = BackendFixture::new();
        fixture.create_profile("jane@example.org", None);
        let err = flows::register_with_email(
            &fixture.db_connections,
            usecases::NewProfile {
                email: "jane@example.org".parse().unwrap(),
                password: "secret".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::UserExists))
        ));
    }
}
