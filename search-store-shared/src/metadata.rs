//! Index metadata blob.
//!
//! The store reports index mappings/settings as a JSON document. This type
//! carries that document as opaque text; callers that need structure parse
//! it themselves.

/// Opaque JSON text describing an index's mappings and settings.
///
/// The content is passed verbatim as the body of a create-index request and
/// returned verbatim (as the store reports it) from a metadata fetch. No
/// normalization is applied in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMetadata {
    content: String,
}

impl IndexMetadata {
    /// Wrap a JSON text blob as index metadata.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The metadata document as JSON text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the metadata, returning the JSON text.
    pub fn into_content(self) -> String {
        self.content
    }
}

impl From<String> for IndexMetadata {
    fn from(content: String) -> Self {
        Self { content }
    }
}
