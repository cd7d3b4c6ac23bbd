//! Constructor declarations for domain services

use super::constructor::{Constructor, Injectable};
use std::sync::Arc;
use wiring_domain::ports::DocumentDb;
use wiring_domain::services::DocumentService;

impl Injectable for DocumentService {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::builder()
            .contract::<dyn DocumentDb>()
            .build(|args| {
                let db: Arc<dyn DocumentDb> = args.next::<dyn DocumentDb>()?;
                Ok(DocumentService::new(db))
            })]
    }
}
