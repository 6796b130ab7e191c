mod error;
mod operator;
mod provider;

pub use error::*;
pub use operator::*;
pub use provider::*;
