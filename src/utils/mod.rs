pub mod colors;
pub mod formatting;
