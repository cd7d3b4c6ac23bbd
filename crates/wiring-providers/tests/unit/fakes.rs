//! Hand-written recording fakes for the document ports
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use wiring_domain::error::{Error, Result};
use wiring_domain::ports::{DocumentCache, DocumentDb};
use wiring_domain::value_objects::Document;

/// Store answering from a fixed map, recording every id it was asked for
#[derive(Default)]
pub struct RecordingDb {
    documents: HashMap<String, Document>,
    calls: Mutex<Vec<String>>,
}

impl RecordingDb {
    pub fn with(documents: &[Document]) -> Self {
        Self {
            documents: documents
                .iter()
                .map(|d| (d.id.clone(), d.clone()))
                .collect(),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentDb for RecordingDb {
    async fn get_by_id(&self, id: &str) -> Result<Option<Document>> {
        self.calls.lock().unwrap().push(id.to_string());
        Ok(self.documents.get(id).cloned())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Store that always fails
pub struct FailingDb;

#[async_trait]
impl DocumentDb for FailingDb {
    async fn get_by_id(&self, _id: &str) -> Result<Option<Document>> {
        Err(Error::infrastructure("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}

/// Cache backed by a map, recording gets and sets
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, Document>>,
    gets: Mutex<Vec<String>>,
    sets: Mutex<Vec<(String, Document)>>,
}

impl RecordingCache {
    pub fn holding(document: Document) -> Self {
        let cache = Self::default();
        cache
            .entries
            .lock()
            .unwrap()
            .insert(document.id.clone(), document);
        cache
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub fn sets(&self) -> Vec<(String, Document)> {
        self.sets.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentCache for RecordingCache {
    async fn get(&self, id: &str) -> Result<Option<Document>> {
        self.gets.lock().unwrap().push(id.to_string());
        Ok(self.entries.lock().unwrap().get(id).cloned())
    }

    async fn set(&self, id: &str, document: Document) -> Result<()> {
        self.sets
            .lock()
            .unwrap()
            .push((id.to_string(), document.clone()));
        self.entries.lock().unwrap().insert(id.to_string(), document);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Cache whose every operation fails
pub struct BrokenCache;

#[async_trait]
impl DocumentCache for BrokenCache {
    async fn get(&self, _id: &str) -> Result<Option<Document>> {
        Err(Error::cache("unavailable"))
    }

    async fn set(&self, _id: &str, _document: Document) -> Result<()> {
        Err(Error::cache("unavailable"))
    }

    fn provider_name(&self) -> &str {
        "broken"
    }
}
