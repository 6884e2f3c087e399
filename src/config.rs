//! Collection input configuration.
//!
//! A collection directory carries a JSON configuration naming its
//! documents and the persona-and-task query driving the ranking.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Optional descriptive block for a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Stable identifier for the collection
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

/// A document listed in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Source filename (e.g., "handbook.pdf")
    pub filename: String,

    /// Display title, usually the file stem
    pub title: String,
}

/// The persona the ranking is performed for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Role description (e.g., "HR professional")
    pub role: String,
}

/// The task the persona needs to accomplish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobToBeDone {
    /// Free-text task statement
    pub task: String,
}

/// Input configuration of one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Optional descriptive block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_info: Option<CollectionInfo>,

    /// Documents to process
    pub documents: Vec<DocumentRef>,

    /// Persona driving the ranking
    pub persona: Persona,

    /// Task driving the ranking
    pub job_to_be_done: JobToBeDone,
}

impl CollectionConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingConfig(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let config: CollectionConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The persona query: role and task joined into one text.
    pub fn query(&self) -> String {
        format!("{} {}", self.persona.role, self.job_to_be_done.task)
    }

    /// Filenames of all listed documents.
    pub fn document_names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.filename.clone()).collect()
    }

    fn validate(&self) -> Result<()> {
        if self.persona.role.trim().is_empty() {
            return Err(Error::InvalidConfig("persona role is empty".to_string()));
        }
        if self.job_to_be_done.task.trim().is_empty() {
            return Err(Error::InvalidConfig("job task is empty".to_string()));
        }
        Ok(())
    }

    /// Generate a configuration by scanning a documents directory.
    ///
    /// Every regular file becomes a [`DocumentRef`] with its stem as the
    /// title, sorted by filename for determinism.
    pub fn generate(
        docs_dir: impl AsRef<Path>,
        info: Option<CollectionInfo>,
        role: impl Into<String>,
        task: impl Into<String>,
    ) -> Result<Self> {
        let mut documents = Vec::new();
        if docs_dir.as_ref().is_dir() {
            for entry in fs::read_dir(docs_dir)? {
                let entry = entry?;
                if !entry.file_type()?.is_file() {
                    continue;
                }
                let filename = entry.file_name().to_string_lossy().into_owned();
                let title = Path::new(&filename)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| filename.clone());
                documents.push(DocumentRef { filename, title });
            }
        }
        documents.sort_by(|a, b| a.filename.cmp(&b.filename));

        let config = CollectionConfig {
            collection_info: info,
            documents,
            persona: Persona { role: role.into() },
            job_to_be_done: JobToBeDone { task: task.into() },
        };
        config.validate()?;
        Ok(config)
    }
}
