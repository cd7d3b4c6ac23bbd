//! Value objects

mod document;

pub use document::Document;
