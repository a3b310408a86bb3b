pub mod catalog;
pub mod channel;
pub mod commands;
pub mod resolver;
pub mod version;
