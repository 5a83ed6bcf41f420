use std::{fmt::Display, result};

use civic_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::{ContentType, Cookie, CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes, FromForm, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::{jwt, sqlite, Cfg, Gateways},
};
use civic_application::prelude as flows;
use civic_core::{entities::*, repositories::*, usecases};

mod error;
mod export;
mod issues;
mod location;
mod map;
mod photos;
mod profile;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        // ---   profile   --- //
        profile::get_profile,
        profile::put_profile,
        profile::post_profile_complete,
        profile::post_profile_location_autofill,
        // ---   issues   --- //
        issues::get_issues,
        issues::get_issue,
        issues::post_issue,
        issues::put_issue_status,
        photos::post_photo,
        // ---   export   --- //
        export::csv_export,
        // ---   map   --- //
        map::get_map,
        // ---   location   --- //
        location::get_predictions,
        location::get_place_details,
        location::get_geocode,
        location::get_reverse,
        location::post_resolve,
        location::post_current,
        util::get_version,
    ]
}

/// Query parameters of the issue list.
#[derive(Debug, Default, FromForm)]
pub struct IssueQuery {
    search: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    location: Option<String>,
}

impl From<IssueQuery> for usecases::IssueFilter {
    fn from(from: IssueQuery) -> Self {
        let IssueQuery {
            search,
            category,
            priority,
            status,
            location,
        } = from;
        Self {
            search,
            category,
            priority,
            status,
            location,
        }
    }
}

/// Runs blocking gateway calls outside of the async executor.
async fn blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow::anyhow!("Blocking task failed: {err}")))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
