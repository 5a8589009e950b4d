//! Document access: collaborator traits, the atomic creation scope, and an
//! in-memory document implementation.
//!
//! The engine never owns the document it tags. [`Document`] is the seam to
//! the host model: it exposes the views and tag definitions the pipeline
//! reads, and the atomic [`commit`](Document::commit) through which all
//! mutation flows. [`TagBatch`] is the creation scope itself: tags are
//! created into a batch, optionally repositioned, and then committed as one
//! unit - either every pending tag in the batch is placed, or none are.
//!
//! [`InMemoryDocument`] is the reference implementation, loadable from and
//! serializable back to a TOML model file.

use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use placard_core::{
    geometry::{Point, Uv},
    identifier::Id,
    model::{
        DefId, Element, PendingTag, PlacedTag, TagDefinition, TagId, TagOrientation, View,
    },
};

/// Errors raised by document access and mutation.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model file: {0}")]
    Parse(String),

    #[error("Failed to serialize model: {0}")]
    Serialize(String),

    #[error("View '{view}' not found in document")]
    UnknownView { view: Id },

    #[error("Tag target '{element}' is not an element of view '{view}'")]
    MissingTarget { element: Id, view: Id },
}

/// The host document seam.
///
/// Implementations own the views, elements, and tag definitions; the engine
/// borrows the document per run and caches nothing beyond it. Mutation is
/// confined to [`commit`](Document::commit), which applies a whole
/// [`TagBatch`] atomically.
pub trait Document {
    /// Snapshot of the document's views, in enumeration order.
    fn views(&self) -> Vec<View>;

    /// The document's tag definitions, in enumeration order.
    ///
    /// Enumeration order is the resolution order: when several definitions
    /// share a name, the catalog selects the first.
    fn tag_definitions(&self) -> &[TagDefinition];

    /// Atomically applies a batch of pending tags.
    ///
    /// On success every pending tag is placed and assigned an identity; the
    /// returned ids are in batch order. On failure no tag from the batch is
    /// observable in the document.
    ///
    /// # Errors
    ///
    /// Implementations fail when the batch's view is unknown or a pending
    /// tag's target does not belong to that view.
    fn commit(&mut self, batch: TagBatch) -> Result<Vec<TagId>, DocumentError>;
}

/// Handle to a pending tag within a [`TagBatch`].
///
/// Handles are only meaningful for the batch that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHandle(usize);

/// An open atomic creation scope for a single view.
///
/// Mirrors the host's transaction shape: tags are created into the scope,
/// their heads may be repositioned afterwards, and the whole scope is then
/// handed to [`Document::commit`]. A dropped batch discards its pending
/// tags - nothing reaches the document without a commit.
#[derive(Debug)]
pub struct TagBatch {
    view: Id,
    pending: Vec<PendingTag>,
}

impl TagBatch {
    /// Opens a creation scope for the named view.
    pub fn new(view: Id) -> Self {
        Self {
            view,
            pending: Vec::new(),
        }
    }

    /// Returns the name of the view this scope belongs to.
    pub fn view(&self) -> Id {
        self.view
    }

    /// Creates a reference-bound tag for an element.
    ///
    /// The head starts at the anchor; use [`set_head_position`] to offset
    /// it after creation.
    ///
    /// [`set_head_position`]: TagBatch::set_head_position
    pub fn tag_reference(
        &mut self,
        definition: &TagDefinition,
        element: &Element,
        leader: bool,
        orientation: TagOrientation,
        anchor: Point,
    ) -> TagHandle {
        self.pending.push(PendingTag::reference(
            definition.id(),
            element.id(),
            leader,
            orientation,
            anchor,
        ));
        TagHandle(self.pending.len() - 1)
    }

    /// Creates a region-bound area tag, positioned by planar coordinate.
    pub fn tag_region(
        &mut self,
        definition: &TagDefinition,
        region: &Element,
        anchor: Uv,
    ) -> TagHandle {
        self.pending
            .push(PendingTag::region(definition.id(), region.id(), anchor));
        TagHandle(self.pending.len() - 1)
    }

    /// Repositions a pending tag's head, leaving its anchor untouched.
    ///
    /// # Panics
    /// Panics if the handle was issued by a different batch.
    pub fn set_head_position(&mut self, handle: TagHandle, head: Point) {
        self.pending[handle.0].set_head(head);
    }

    /// Returns a pending tag's current head position.
    ///
    /// # Panics
    /// Panics if the handle was issued by a different batch.
    pub fn head_position(&self, handle: TagHandle) -> Point {
        self.pending[handle.0].head()
    }

    /// Number of pending tags in the scope.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no tags have been created in the scope.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Consumes the scope, yielding the view name and pending tags.
    ///
    /// Intended for [`Document::commit`] implementations.
    pub fn into_parts(self) -> (Id, Vec<PendingTag>) {
        (self.view, self.pending)
    }
}

/// Serialized form of a document model file.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
struct DocumentFile {
    /// Tag family names, in resolution order.
    #[serde(default)]
    tag_families: Vec<String>,
    #[serde(default)]
    views: Vec<View>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<PlacedTag>,
}

/// An in-memory design document.
///
/// Owns views, tag definitions, and placed tags. This is the concrete
/// [`Document`] the CLI works with; it loads from a TOML model file and
/// serializes back, placed tags included.
///
/// # Examples
///
/// ```
/// use placard::document::{Document, InMemoryDocument};
/// use placard::identifier::Id;
/// use placard::model::{View, ViewKind};
///
/// let doc = InMemoryDocument::new()
///     .with_tag_family("M_Room Tag")
///     .with_view(View::new(Id::new("Level 1"), ViewKind::FloorPlan));
///
/// assert_eq!(doc.views().len(), 1);
/// assert_eq!(doc.tag_definitions().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    views: Vec<View>,
    tag_definitions: Vec<TagDefinition>,
    tags: Vec<PlacedTag>,
    next_tag: u64,
}

impl InMemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a view (builder style).
    pub fn with_view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    /// Adds a tag family definition (builder style).
    ///
    /// Definitions resolve in insertion order; adding the same name twice
    /// is allowed, and the first occurrence wins name matches.
    pub fn with_tag_family(mut self, name: &str) -> Self {
        let id = DefId::new(self.tag_definitions.len());
        self.tag_definitions
            .push(TagDefinition::new(id, Id::new(name)));
        self
    }

    /// Looks up a view by name.
    pub fn view(&self, name: Id) -> Option<&View> {
        self.views.iter().find(|view| view.name() == name)
    }

    /// The tags placed in this document, in commit order.
    pub fn tags(&self) -> &[PlacedTag] {
        &self.tags
    }

    /// Parses a document from TOML model text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when the text is not a valid model
    /// file.
    pub fn from_toml_str(input: &str) -> Result<Self, DocumentError> {
        let file: DocumentFile =
            toml::from_str(input).map_err(|err| DocumentError::Parse(err.to_string()))?;
        Ok(Self::from_file(file))
    }

    /// Reads and parses a document from a TOML model file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes the document, placed tags included, to TOML model text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialize`] when serialization fails.
    pub fn to_toml_string(&self) -> Result<String, DocumentError> {
        let file = DocumentFile {
            tag_families: self
                .tag_definitions
                .iter()
                .map(|def| def.name().to_string())
                .collect(),
            views: self.views.clone(),
            tags: self.tags.clone(),
        };
        toml::to_string(&file).map_err(|err| DocumentError::Serialize(err.to_string()))
    }

    /// Writes the document to a TOML model file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let content = self.to_toml_string()?;
        fs::write(path, content)?;
        Ok(())
    }

    fn from_file(file: DocumentFile) -> Self {
        let tag_definitions = file
            .tag_families
            .iter()
            .enumerate()
            .map(|(index, name)| TagDefinition::new(DefId::new(index), Id::new(name)))
            .collect();
        let next_tag = file
            .tags
            .iter()
            .map(|tag| tag.id().value())
            .max()
            .map_or(0, |max| max + 1);
        Self {
            views: file.views,
            tag_definitions,
            tags: file.tags,
            next_tag,
        }
    }
}

impl Document for InMemoryDocument {
    fn views(&self) -> Vec<View> {
        self.views.clone()
    }

    fn tag_definitions(&self) -> &[TagDefinition] {
        &self.tag_definitions
    }

    fn commit(&mut self, batch: TagBatch) -> Result<Vec<TagId>, DocumentError> {
        let (view_name, pending) = batch.into_parts();
        let view = self
            .views
            .iter()
            .find(|view| view.name() == view_name)
            .ok_or(DocumentError::UnknownView { view: view_name })?;

        // Validate every target before placing anything; a bad target must
        // not leave a partial batch behind.
        for tag in &pending {
            let target = tag.target().id();
            if !view.elements().iter().any(|element| element.id() == target) {
                return Err(DocumentError::MissingTarget {
                    element: target,
                    view: view_name,
                });
            }
        }

        let placed = pending.len();
        let ids: Vec<TagId> = pending
            .into_iter()
            .map(|tag| {
                let id = TagId::new(self.next_tag);
                self.next_tag += 1;
                self.tags.push(tag.into_placed(id, view_name));
                id
            })
            .collect();

        debug!(view = view_name.to_string(), placed; "Committed tag batch");
        Ok(ids)
    }
}
