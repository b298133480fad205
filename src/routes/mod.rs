mod health_check;
mod login;
mod review_email;

pub use health_check::*;
pub use login::*;
pub use review_email::*;

/// Body shared by every error answered from these routes.
#[derive(serde::Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}
