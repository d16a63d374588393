//! JSON fixture files for demo and development startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use plantdesk_models::{Contractor, Document, Media, Project, Setting};

use crate::error::StoreError;

/// Every collection's rows, as written by `plantdesk-cli seed`.
///
/// Missing sections load as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub projects: Vec<Project>,
    pub contractors: Vec<Contractor>,
    pub documents: Vec<Document>,
    pub media: Vec<Media>,
    pub settings: Vec<Setting>,
}

impl Fixture {
    pub async fn read(path: &Path) -> Result<Self, StoreError> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|source| StoreError::FixtureIo {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_slice(&raw).map_err(|source| StoreError::FixtureFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    pub async fn write(&self, path: &Path) -> Result<(), StoreError> {
        let raw = serde_json::to_vec_pretty(self).map_err(|source| StoreError::FixtureFormat {
            path: path.to_path_buf(),
            source,
        })?;

        tokio::fs::write(path, raw)
            .await
            .map_err(|source| StoreError::FixtureIo {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("plantdesk-{}-{}.json", name, Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_write_then_load_store() {
        let now = Utc::now();
        let fixture = Fixture {
            settings: vec![Setting {
                id: Uuid::new_v4(),
                key: "office.timezone".to_string(),
                value: json!("America/Chicago"),
                description: None,
                created_at: now,
                updated_at: now,
            }],
            ..Default::default()
        };

        let path = temp_path("roundtrip");
        fixture.write(&path).await.unwrap();
        let store = Store::load(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(store.settings.len().await, 1);
        assert!(store.projects.is_empty().await);
    }

    #[tokio::test]
    async fn test_partial_fixture_loads() {
        let path = temp_path("partial");
        tokio::fs::write(&path, br#"{"contractors": []}"#).await.unwrap();
        let store = Store::load(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(store.contractors.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_and_malformed_fixture() {
        let err = Store::load(&temp_path("missing")).await.unwrap_err();
        assert!(matches!(err, StoreError::FixtureIo { .. }));

        let path = temp_path("malformed");
        tokio::fs::write(&path, b"[1, 2").await.unwrap();
        let err = Store::load(&path).await.unwrap_err();
        tokio::fs::remove_file(&path).await.unwrap();
        assert!(matches!(err, StoreError::FixtureFormat { .. }));
    }

    #[test]
    fn test_duplicate_setting_keys_rejected() {
        let now = Utc::now();
        let setting = |id| Setting {
            id,
            key: "dup".to_string(),
            value: json!(1),
            description: None,
            created_at: now,
            updated_at: now,
        };
        let fixture = Fixture {
            settings: vec![setting(Uuid::new_v4()), setting(Uuid::new_v4())],
            ..Default::default()
        };
        assert!(matches!(
            Store::from_fixture(fixture),
            Err(StoreError::Conflict(_))
        ));
    }
}
