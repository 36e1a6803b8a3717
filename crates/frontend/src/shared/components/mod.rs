pub mod form_template;
pub mod ui;

pub use form_template::FormTemplate;
