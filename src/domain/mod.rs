mod sender_email;
mod user_type;

pub use sender_email::*;
pub use user_type::*;
