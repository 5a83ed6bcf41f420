use super::prelude::*;

#[derive(Debug)]
pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R: ProfileRepo>(repo: &R, login: &Credentials) -> Result<Profile> {
    let profile = repo
        .try_get_profile_by_email(login.email)?
        .ok_or(Error::Credentials)?;
    if !profile.password.verify(login.password) {
        log::debug!("Invalid password for {}", login.email);
        return Err(Error::Credentials);
    }
    Ok(profile)
}
