pub mod duration;
pub mod form;
pub mod script;
pub mod validation;
