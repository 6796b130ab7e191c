mod error;
pub mod password;
mod request;
pub mod session;

pub use error::*;
pub use request::*;
