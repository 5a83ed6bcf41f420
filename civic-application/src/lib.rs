mod change_issue_status;
mod export_issues;
mod profile;
mod register;
mod report_issue;

pub mod prelude {
    pub use super::{
        change_issue_status::*, export_issues::*, profile::*, register::*, report_issue::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use civic_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use civic_db_sqlite::Connections;
}
