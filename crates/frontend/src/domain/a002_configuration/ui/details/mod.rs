//! Cabinet Configurator UI Module
//!
//! MVVM split:
//! - state.rs: pure state and transition rules
//! - view_model.rs: reactive wrapper with load/save commands
//! - view.rs: Leptos components (pure UI)

mod state;
mod view;
mod view_model;

pub use view::CabinetConfigurator;
