mod error;
mod family;
mod message;


pub use error::UnknownFamily;
pub use family::{Family, checker_category};
pub use message::{Event, Message};
