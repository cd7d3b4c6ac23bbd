//! Domain services

mod document;

pub use document::DocumentService;
