//! # Domain Layer
//!
//! Core types shared by every other crate in the workspace.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy, including the resolution failures of the container |
//! | [`value_objects`] | The [`Document`](value_objects::Document) entity |
//! | [`ports`] | Boundary traits implemented by `wiring-providers` |
//! | [`services`] | Services composed purely from ports |

pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use error::{Error, Result};
