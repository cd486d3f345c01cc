pub mod create;
pub mod register;
pub mod validate;
