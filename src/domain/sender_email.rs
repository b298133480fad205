use validator::validate_email;

#[derive(Debug, Clone)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        match validate_email(&email) {
            true => Ok(Self(email)),
            false => Err(format!("{} is not a valid sender email address", email)),
        }
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
