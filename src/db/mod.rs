pub mod invitations;
pub mod members;
pub mod push_tokens;
pub mod service;
pub mod users;
pub mod wards;
