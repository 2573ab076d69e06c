pub mod api;
pub mod context;
pub mod form;
pub mod guard;
pub mod submit;
