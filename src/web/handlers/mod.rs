//! HTML handlers for the front-end.

pub mod create;
pub mod index;

pub use create::create_form_handler;
pub use index::index_handler;
