//! Product creation form
//!
//! MVVM split:
//! - state.rs: validation gate and image slot (plain Rust)
//! - submit.rs: submit action over a gateway and a sink
//! - model.rs: HTTP gateway
//! - view_model.rs: signals and commands
//! - view.rs: Leptos component (pure UI)

mod model;
pub mod state;
pub mod submit;
mod view;
mod view_model;

pub use view::ProductForm;
pub use view_model::ProductFormViewModel;
