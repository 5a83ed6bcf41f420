use super::*;
use rocket::http::SameSite;

fn login_cookie(profile_id: String) -> Cookie<'static> {
    Cookie::build((COOKIE_ACCOUNT_KEY, profile_id))
        .same_site(SameSite::Lax)
        .http_only(true)
        .build()
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    new_user: JsonResult<json::Credentials>,
) -> Result<json::Profile> {
    let json::Credentials { email, password } = new_user?.into_inner();
    let new_profile = usecases::NewProfile {
        email: email.parse()?,
        password,
    };
    let profile = flows::register_with_email(&db, new_profile)?;
    Ok(Json(profile.into()))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<Option<json::JwtToken>> {
    let login = login?.into_inner();
    let profile = {
        let credentials = usecases::Credentials {
            email: &login.email.parse()?,
            password: &login.password,
        };
        flows::login_with_email(&db, &credentials).inspect_err(|err| {
            debug!("Login with email '{}' failed: {}", login.email, err);
        })?
    };

    let mut response = None;
    if cfg!(feature = "jwt") {
        let token = jwt_state.generate_token(profile.id.as_str())?;
        response = Some(json::JwtToken { token });
    }
    if cfg!(feature = "cookies") {
        cookies.add_private(login_cookie(profile.id.into()));
    }
    Ok(Json(response))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
) -> Json<()> {
    cookies.remove_private(COOKIE_ACCOUNT_KEY);
    if cfg!(feature = "jwt") {
        for bearer in auth.bearer_tokens() {
            jwt_state.blacklist_token(bearer.to_owned());
        }
    }
    Json(())
}
