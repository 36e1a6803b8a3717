pub mod aggregate;
pub mod form;
pub mod price;
pub mod rules;
