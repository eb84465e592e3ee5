pub mod compose;
pub mod config;
pub mod store;
pub mod table;
pub mod template;
