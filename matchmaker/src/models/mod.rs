mod profile;
mod sample;
mod score;
mod user;

pub use profile::*;
pub use sample::*;
pub use score::*;
pub use user::*;
