mod post;
mod preflight;
mod template;

pub use post::*;
pub use preflight::*;
pub use template::*;
