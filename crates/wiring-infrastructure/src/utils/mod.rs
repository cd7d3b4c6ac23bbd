//! Infrastructure utilities

mod timing;

pub use timing::{measure, TimedOperation};
