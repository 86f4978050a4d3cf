pub mod index;
pub mod new_prescription;
