pub mod guild;
pub mod message;
pub mod profile;
