pub mod layout;
pub mod messages;
pub mod render;
