mod password;
mod role;

pub use password::*;
pub use role::*;
