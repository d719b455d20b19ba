use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::db::database::Database;
use crate::db::error::DatabaseError;
use crate::db::models::NewImage;

/// A fake in-memory implementation of the Database trait for testing
#[derive(Clone)]
pub struct FakeDatabase {
    inserts: Arc<RwLock<Vec<NewImage>>>,
    fail_inserts: Arc<RwLock<bool>>,
}

impl FakeDatabase {
    /// Create a new empty FakeDatabase
    pub fn new() -> Self {
        FakeDatabase {
            inserts: Arc::new(RwLock::new(Vec::new())),
            fail_inserts: Arc::new(RwLock::new(false)),
        }
    }

    /// Make every subsequent insert fail
    pub fn fake_fail_inserts(&self) {
        *self.fail_inserts.write().unwrap() = true;
    }

    /// Every row inserted into this database, in call order
    pub fn inserted_images(&self) -> Vec<NewImage> {
        self.inserts.read().unwrap().clone()
    }
}

impl Default for FakeDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Database for FakeDatabase {
    async fn insert_image(&self, image: &NewImage) -> Result<(), DatabaseError> {
        if *self.fail_inserts.read().unwrap() {
            return Err(DatabaseError::QueryError("injected failure".to_string()));
        }

        self.inserts.write().unwrap().push(image.clone());
        Ok(())
    }
}
