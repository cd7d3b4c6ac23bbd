//! Document entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document returned by a [`DocumentDb`](crate::ports::DocumentDb)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Store identifier
    pub id: String,
    /// Human readable title
    pub title: String,
    /// Document contents
    pub body: String,
    /// When the backing store produced this copy
    pub retrieved_at: DateTime<Utc>,
}

impl Document {
    /// Create a document stamped with the current time
    pub fn new<I: Into<String>, T: Into<String>, B: Into<String>>(id: I, title: T, body: B) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            retrieved_at: Utc::now(),
        }
    }

    /// A document carrying only its identifier
    pub fn with_id<I: Into<String>>(id: I) -> Self {
        Self::new(id, String::new(), String::new())
    }
}
