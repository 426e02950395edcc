//! Confluence v2 page request bodies.
//!
//! Pages written through the v2 `/pages` API carry their body as a string
//! holding the ADF JSON, tagged with the `atlas_doc_format` representation.
//! Creating a page needs a space and a title; an update needs the page id and
//! its next version number, and only renames the page when a title is given.

use crate::document::Document;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Body representation for ADF content.
pub const ATLAS_DOC_FORMAT: &str = "atlas_doc_format";

/// Page status used for created and updated pages.
pub const STATUS_CURRENT: &str = "current";

/// Page body: the document serialized into a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBody {
    pub representation: String,
    pub value: String,
}

impl PageBody {
    pub fn from_document(doc: &Document) -> Result<Self> {
        Ok(Self {
            representation: ATLAS_DOC_FORMAT.to_string(),
            value: doc.to_json()?,
        })
    }
}

/// Version block of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVersion {
    pub number: u64,
}

/// Request body for creating or updating a page.
///
/// # Example
///
/// ```
/// use mdadf_core::{Document, PageRequest};
///
/// let doc = Document::new(Vec::new());
/// let request = PageRequest::create("123", "Notes", &doc)
///     .unwrap()
///     .with_parent("42");
/// assert_eq!(request.parent_id.as_deref(), Some("42"));
/// assert_eq!(request.body.representation, "atlas_doc_format");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub body: PageBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<PageVersion>,
}

impl PageRequest {
    /// Body for creating a new page in a space.
    pub fn create(
        space_id: impl Into<String>,
        title: impl Into<String>,
        doc: &Document,
    ) -> Result<Self> {
        Ok(Self {
            id: None,
            space_id: Some(space_id.into()),
            status: STATUS_CURRENT.to_string(),
            title: Some(title.into()),
            parent_id: None,
            body: PageBody::from_document(doc)?,
            version: None,
        })
    }

    /// Body for replacing the content of an existing page.
    ///
    /// `version` must be the page's current version number plus one. The
    /// title is left as it is unless set with [`PageRequest::with_title`].
    pub fn update(page_id: impl Into<String>, version: u64, doc: &Document) -> Result<Self> {
        Ok(Self {
            id: Some(page_id.into()),
            space_id: None,
            status: STATUS_CURRENT.to_string(),
            title: None,
            parent_id: None,
            body: PageBody::from_document(doc)?,
            version: Some(PageVersion { number: version }),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}
