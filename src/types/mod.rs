pub mod error;
pub mod invitation;
pub mod mail;
pub mod response;
pub mod user;
