//! Shared test doubles for the mapping store and the code generator.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use linkshort::errors::{Result, ShortenerError};
use linkshort::services::CodeGenerator;
use linkshort::storage::{MappingStore, ShortLink};

/// Every call the service makes against the store, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FindByLongUrl(String),
    FindByCode(String),
    Exists(String),
    Insert(String, String),
    Health,
}

/// Operation that should fail with a storage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    FindByLongUrl,
    Exists,
    Insert,
    Health,
}

/// Scripted outcome for the next `insert` call.
#[derive(Debug, Clone)]
pub enum InsertConflict {
    /// Another writer stored the same long URL under this code first.
    ConcurrentWinner(String),
    /// The short code was taken between the existence check and the insert.
    CodeTaken,
}

/// In-memory `MappingStore` that records every call.
#[derive(Default)]
pub struct MemoryStore {
    mappings: Mutex<Vec<ShortLink>>,
    calls: Mutex<Vec<StoreCall>>,
    taken_codes: Mutex<HashSet<String>>,
    conflicts: Mutex<VecDeque<InsertConflict>>,
    fail_on: Mutex<Option<FailOn>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(self, code: &str, long_url: &str) -> Self {
        self.mappings
            .lock()
            .unwrap()
            .push(ShortLink::new(code, long_url));
        self
    }

    /// Codes reported as existing without a stored mapping.
    pub fn with_taken_codes(self, codes: &[&str]) -> Self {
        self.taken_codes
            .lock()
            .unwrap()
            .extend(codes.iter().map(|c| c.to_string()));
        self
    }

    pub fn with_conflict(self, conflict: InsertConflict) -> Self {
        self.conflicts.lock().unwrap().push_back(conflict);
        self
    }

    pub fn failing_on(self, op: FailOn) -> Self {
        *self.fail_on.lock().unwrap() = Some(op);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn inserts(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Insert(code, url) => Some((code, url)),
                _ => None,
            })
            .collect()
    }

    pub fn mappings(&self) -> Vec<ShortLink> {
        self.mappings.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self, op: FailOn) -> Result<()> {
        if *self.fail_on.lock().unwrap() == Some(op) {
            return Err(ShortenerError::database_connection("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn find_code_by_long_url(&self, long_url: &str) -> Result<Option<String>> {
        self.record(StoreCall::FindByLongUrl(long_url.to_string()));
        self.check_failure(FailOn::FindByLongUrl)?;
        Ok(self
            .mappings
            .lock()
            .unwrap()
            .iter()
            .find(|link| link.long_url == long_url)
            .map(|link| link.code.clone()))
    }

    async fn find_long_url_by_code(&self, code: &str) -> Result<Option<String>> {
        self.record(StoreCall::FindByCode(code.to_string()));
        Ok(self
            .mappings
            .lock()
            .unwrap()
            .iter()
            .find(|link| link.code == code)
            .map(|link| link.long_url.clone()))
    }

    async fn code_exists(&self, code: &str) -> Result<bool> {
        self.record(StoreCall::Exists(code.to_string()));
        self.check_failure(FailOn::Exists)?;
        let stored = self.mappings.lock().unwrap().iter().any(|l| l.code == code);
        Ok(stored || self.taken_codes.lock().unwrap().contains(code))
    }

    async fn insert(&self, code: &str, long_url: &str) -> Result<()> {
        self.record(StoreCall::Insert(code.to_string(), long_url.to_string()));
        self.check_failure(FailOn::Insert)?;

        if let Some(conflict) = self.conflicts.lock().unwrap().pop_front() {
            if let InsertConflict::ConcurrentWinner(winner) = conflict {
                self.mappings
                    .lock()
                    .unwrap()
                    .push(ShortLink::new(winner, long_url));
            }
            return Err(ShortenerError::duplicate_mapping("UNIQUE constraint failed"));
        }

        let mut mappings = self.mappings.lock().unwrap();
        if mappings
            .iter()
            .any(|l| l.code == code || l.long_url == long_url)
        {
            return Err(ShortenerError::duplicate_mapping("UNIQUE constraint failed"));
        }
        mappings.push(ShortLink::new(code, long_url));
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.record(StoreCall::Health);
        self.check_failure(FailOn::Health)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

/// Generator that hands out a fixed sequence of codes.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    generated: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            generated: AtomicUsize::new(0),
        }
    }

    pub fn generate_calls(&self) -> usize {
        self.generated.load(Ordering::SeqCst)
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self, length: usize) -> String {
        self.generated.fetch_add(1, Ordering::SeqCst);
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "z".repeat(length))
    }

    fn regenerate(&self, code: &str) -> String {
        format!("{}-new", code)
    }
}
