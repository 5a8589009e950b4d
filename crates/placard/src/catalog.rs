//! Tag catalog: resolving categories to tag definitions.
//!
//! The catalog binds each taggable [`Category`] to a concrete tag
//! definition in the document, by exact display-name match against a fixed
//! name table. It is built once per run; the document's definitions cannot
//! change mid-run, so rebuilding per view would only differ in cost.
//!
//! Resolution rules:
//! - the **first** definition (in the document's enumeration order) whose
//!   name matches is selected;
//! - a name with zero matches leaves its category absent from the catalog -
//!   never an error at build time, observed only at lookup time, where the
//!   element is skipped.

use indexmap::IndexMap;
use log::debug;

use placard_core::model::{Category, TagDefinition};

use crate::document::Document;

/// Fixed category to tag-family-name table.
const TAG_FAMILY_NAMES: &[(Category, &str)] = &[
    (Category::Rooms, "M_Room Tag"),
    (Category::Doors, "M_Door Tag"),
    (Category::Windows, "M_Window Tag"),
    (Category::Furniture, "M_Furniture Tag"),
    (Category::LightingFixtures, "M_Lighting Fixture Tag"),
    (Category::Walls, "M_Wall Tag"),
    (Category::CurtainWalls, "M_Curtain Wall Tag"),
    (Category::Areas, "M_Area Tag"),
];

/// The per-run category to tag-definition mapping.
///
/// # Examples
///
/// ```
/// use placard::catalog::TagCatalog;
/// use placard::document::InMemoryDocument;
/// use placard::model::Category;
///
/// let doc = InMemoryDocument::new().with_tag_family("M_Room Tag");
/// let catalog = TagCatalog::build(&doc);
///
/// assert!(catalog.lookup(Category::Rooms).is_some());
/// assert!(catalog.lookup(Category::Doors).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TagCatalog {
    entries: IndexMap<Category, TagDefinition>,
}

impl TagCatalog {
    /// Builds the catalog against a document's tag definitions.
    ///
    /// Scans the fixed name table in order; unresolved names are logged at
    /// debug level and left absent.
    pub fn build<D: Document>(document: &D) -> Self {
        let definitions = document.tag_definitions();
        let mut entries = IndexMap::new();

        for &(category, family) in TAG_FAMILY_NAMES {
            match definitions.iter().find(|def| def.name() == family) {
                Some(def) => {
                    entries.insert(category, *def);
                }
                None => {
                    debug!(category = category.to_string(), family; "No tag definition resolved for category");
                }
            }
        }

        Self { entries }
    }

    /// Looks up the tag definition for a category.
    ///
    /// Absence means the category is never tagged in this run; callers skip
    /// the element.
    pub fn lookup(&self, category: Category) -> Option<&TagDefinition> {
        self.entries.get(&category)
    }

    /// Number of resolved categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no category resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
