//! Loadable fact packs.
//!
//! A pack is a JSON file mapping categories to fact lists, letting hosts ship
//! domain facts alongside the application instead of compiling them in:
//!
//! ```json
//! {
//!   "name": "deploy",
//!   "categories": {
//!     "deploy": ["Blue-green deploys keep the old fleet warm for rollback."]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use crate::store::{FactStore, StoreError};

/// Errors from pack loading and installation.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pack contents: {0}")]
    Invalid(#[from] StoreError),
}

/// A named set of fact categories loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactPack {
    /// Display name; optional in the file.
    #[serde(default)]
    pub name: String,

    /// Category name to fact list.
    pub categories: HashMap<String, Vec<String>>,
}

impl FactPack {
    /// Read and parse a pack file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, PackError> {
        let bytes = fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Append every category of this pack to the store.
    ///
    /// Each category goes through the store's normal validation; installation
    /// aborts on the first invalid category, with earlier categories already
    /// applied.
    pub fn install_into(&self, store: &mut FactStore) -> Result<(), PackError> {
        for (category, facts) in &self.categories {
            store.add_facts(category, facts.iter().cloned())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_and_install_pack() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name":"deploy","categories":{{"deploy":["Fact one.","Fact two."]}}}}"#
        )
        .unwrap();

        let pack = FactPack::load(file.path()).await.unwrap();
        assert_eq!(pack.name, "deploy");

        let mut store = FactStore::new();
        pack.install_into(&mut store).unwrap();
        assert_eq!(store.get_fact_count("deploy"), 2);
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FactPack::load(file.path()).await.unwrap_err();
        assert!(matches!(err, PackError::Json(_)));
    }

    #[test]
    fn test_install_rejects_empty_facts() {
        let pack = FactPack {
            name: String::new(),
            categories: HashMap::from([("bad".to_string(), vec!["ok".to_string(), " ".to_string()])]),
        };

        let mut store = FactStore::new();
        let err = pack.install_into(&mut store).unwrap_err();
        assert!(matches!(err, PackError::Invalid(_)));
        assert_eq!(store.get_fact_count("bad"), 0);
    }
}
