//! Authentication and session state of a request.

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::{jwt, sqlite};
use civic_application::error::AppError;
use civic_core::{
    entities::*,
    repositories::{Error as RepoError, ProfileRepo},
    usecases::Error as ParameterError,
};

pub const COOKIE_ACCOUNT_KEY: &str = "civic-account";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    auth_header_val
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty() && !token.contains(' '))
}

/// Credentials that came along with the request.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_id: Option<String>,
}

impl Auth {
    pub fn account_id(&self) -> Result<&str> {
        self.account_id
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn account_id_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_ACCOUNT_KEY)
            .map(|cookie| cookie.value().to_owned())
    }

    async fn account_id_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_profile_id(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);

        let mut account_id = None;
        if cfg!(feature = "cookies") {
            account_id = Self::account_id_from_cookie(request);
        }
        if cfg!(feature = "jwt") && account_id.is_none() {
            account_id = Self::account_id_from_jwt_in_header(request, &bearer_tokens).await;
        }

        Outcome::Success(Self {
            bearer_tokens,
            account_id,
        })
    }
}

/// The profile of the logged in account.
///
/// It is loaded on the first access within a request and shared by
/// all guards and handlers of that request.
#[derive(Debug, Default)]
pub struct Session {
    profile: Option<Profile>,
}

impl Session {
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    async fn load(request: &Request<'_>) -> Self {
        let Outcome::Success(auth) = request.guard::<Auth>().await else {
            return Self::default();
        };
        let Ok(account_id) = auth.account_id() else {
            return Self::default();
        };
        let Outcome::Success(connections) = request.guard::<sqlite::Connections>().await else {
            error!("No database connections available");
            return Self::default();
        };
        let profile = load_profile(&connections, account_id);
        Self { profile }
    }
}

fn load_profile(connections: &sqlite::Connections, id: &str) -> Option<Profile> {
    let db = connections
        .shared()
        .inspect_err(|err| warn!("Unable to load the session profile: {err}"))
        .ok()?;
    match db.get_profile(id) {
        Ok(profile) => Some(profile),
        Err(RepoError::NotFound) => {
            debug!("The session refers to an unknown profile {id}");
            None
        }
        Err(err) => {
            warn!("Unable to load the session profile {id}: {err}");
            None
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for &'r Session {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(request.local_cache_async(Session::load(request)).await)
    }
}

/// A logged in account.
#[derive(Debug)]
pub struct Account(Profile);

impl Account {
    pub fn profile(&self) -> &Profile {
        &self.0
    }

    pub fn into_profile(self) -> Profile {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let session = try_outcome!(request.guard::<&Session>().await);
        match session.profile() {
            Some(profile) => Outcome::Success(Account(profile.clone())),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Version(pub &'static str);
