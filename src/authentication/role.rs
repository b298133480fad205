use std::str::FromStr;

/// Roles allowed to sign in to the admin console. Matching is exact and case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
)]
pub enum AdminRole {
    #[strum(serialize = "Super Admin")]
    SuperAdmin,
    #[strum(serialize = "Admin")]
    Admin,
    #[strum(serialize = "Finance")]
    Finance,
    #[strum(serialize = "Moderator")]
    Moderator,
    #[strum(serialize = "Auditor")]
    Auditor,
    #[strum(serialize = "Developer")]
    Developer,
}

impl AdminRole {
    pub fn parse(role: &str) -> Option<Self> {
        Self::from_str(role).ok()
    }
}
