/// Kind of account that just registered. Only artisans get a distinct
/// welcome email; every other value is treated as a regular client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Artisan,
    Client,
}

impl UserType {
    pub fn parse(user_type: Option<&str>) -> Self {
        match user_type {
            Some("artisan") => Self::Artisan,
            _ => Self::Client,
        }
    }
}
