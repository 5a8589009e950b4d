//! Semantic document model types.
//!
//! This module contains the representation of a design document as the
//! tagging engine sees it: views owning elements, element categories and
//! locations, tag definitions, and the tags the engine places.
//!
//! # Pipeline Position
//!
//! ```text
//! Model file (TOML) / host document
//!     ↓ load
//! Document model (these types)
//!     ↓ rules + catalog + policy
//! Pending tags (TagBatch)
//!     ↓ commit
//! Placed tags (document)
//! ```
//!
//! # Organization
//!
//! - [`ViewKind`], [`View`] - views and their classification
//! - [`Category`], [`WallKind`], [`Location`], [`Element`] - taggable content
//! - [`DefId`], [`TagDefinition`] - resolvable tag families
//! - [`TagId`], [`TagTarget`], [`PendingTag`], [`PlacedTag`] - placements

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Point, Uv},
    identifier::Id,
};

/// Classification of a view, driving category eligibility.
///
/// Only the four recognized kinds ever receive tags; anything else
/// deserializes to [`ViewKind::Other`] and is skipped by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// Plan view cut at floor level
    FloorPlan,
    /// Reflected ceiling plan
    CeilingPlan,
    /// Vertical section through the model
    Section,
    /// Plan view showing area regions
    AreaPlan,
    /// Any other view classification; never tagged
    #[serde(other)]
    Other,
}

impl From<ViewKind> for &'static str {
    fn from(val: ViewKind) -> Self {
        match val {
            ViewKind::FloorPlan => "floor-plan",
            ViewKind::CeilingPlan => "ceiling-plan",
            ViewKind::Section => "section",
            ViewKind::AreaPlan => "area-plan",
            ViewKind::Other => "other",
        }
    }
}

impl Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// The semantic category of an element.
///
/// Categories are the keys of both the per-view-kind eligibility rules and
/// the tag catalog. `Display` renders the host document's category name
/// (e.g. `"Curtain Walls"`); model files use the kebab-case serde form.
///
/// Unrecognized category strings deserialize to [`Category::Other`], which
/// no rule set contains, so such elements are never tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Rooms,
    Windows,
    Doors,
    Furniture,
    Walls,
    CurtainWalls,
    LightingFixtures,
    Areas,
    /// Catch-all for categories the engine does not know about
    #[serde(other)]
    Other,
}

impl From<Category> for &'static str {
    fn from(val: Category) -> Self {
        match val {
            Category::Rooms => "Rooms",
            Category::Windows => "Windows",
            Category::Doors => "Doors",
            Category::Furniture => "Furniture",
            Category::Walls => "Walls",
            Category::CurtainWalls => "Curtain Walls",
            Category::LightingFixtures => "Lighting Fixtures",
            Category::Areas => "Areas",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Structural subtype of a wall element.
///
/// Only consulted for [`Category::Walls`] elements; a curtain-kind wall is
/// remapped to [`Category::CurtainWalls`] before tag resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallKind {
    Basic,
    Curtain,
    Stacked,
}

/// The location representation of an element.
///
/// Curves are stored as their two endpoints only: the insertion-point
/// contract consumes nothing but the endpoints, so any curve shape between
/// them is irrelevant here.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    /// A single placement point
    Point(Point),
    /// A curve, reduced to its two endpoints
    Curve { start: Point, end: Point },
}

impl Location {
    /// Derives the insertion point for this location.
    ///
    /// Point locations pass through unchanged; curve locations resolve to
    /// the arithmetic midpoint of their endpoints.
    pub fn insertion_point(&self) -> Point {
        match *self {
            Location::Point(point) => point,
            Location::Curve { start, end } => start.midpoint(end),
        }
    }
}

/// A piece of taggable content in the document.
///
/// Elements are immutable for the duration of a run; the pipeline borrows
/// them from the document and never caches them beyond the run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Element {
    id: Id,
    category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wall_kind: Option<WallKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
}

impl Element {
    /// Creates a new element with no location.
    pub fn new(id: Id, category: Category) -> Self {
        Self {
            id,
            category,
            wall_kind: None,
            location: None,
        }
    }

    /// Sets the element's location (builder style).
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the element's wall subtype (builder style).
    pub fn with_wall_kind(mut self, kind: WallKind) -> Self {
        self.wall_kind = Some(kind);
        self
    }

    /// Returns the element's identity.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the element's category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the element's location, if it has one.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Returns true if this element is a curtain-kind wall.
    pub fn is_curtain_wall(&self) -> bool {
        self.category == Category::Walls && self.wall_kind == Some(WallKind::Curtain)
    }

    /// Derives the tag insertion point from the element's location.
    ///
    /// Returns `None` when the element has no location; callers skip the
    /// element in that case rather than treating it as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use placard_core::geometry::Point;
    /// # use placard_core::identifier::Id;
    /// # use placard_core::model::{Category, Element, Location};
    /// let door = Element::new(Id::new("door-1"), Category::Doors).with_location(Location::Curve {
    ///     start: Point::new(2.0, 0.0, 0.0),
    ///     end: Point::new(4.0, 0.0, 0.0),
    /// });
    ///
    /// assert_eq!(door.insertion_point(), Some(Point::new(3.0, 0.0, 0.0)));
    /// ```
    pub fn insertion_point(&self) -> Option<Point> {
        self.location.as_ref().map(Location::insertion_point)
    }
}

/// A named visualization of the document that can host annotations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct View {
    name: Id,
    kind: ViewKind,
    #[serde(default)]
    template: bool,
    #[serde(default)]
    elements: Vec<Element>,
}

impl View {
    /// Creates a new non-template view with no elements.
    pub fn new(name: Id, kind: ViewKind) -> Self {
        Self {
            name,
            kind,
            template: false,
            elements: Vec::new(),
        }
    }

    /// Marks the view as a template (builder style).
    ///
    /// Template views are never tagged.
    pub fn as_template(mut self) -> Self {
        self.template = true;
        self
    }

    /// Adds an element to the view (builder style).
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Returns the view's name.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Returns the view's kind.
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Returns true if this view is a template.
    pub fn is_template(&self) -> bool {
        self.template
    }

    /// Borrows the elements owned by this view, in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// Enumeration-order handle for a tag definition within a document.
///
/// Assigned by the document when its tag definitions are enumerated; a
/// lower index means the definition appears earlier and wins name-match
/// ambiguities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DefId(usize);

impl DefId {
    /// Creates a definition handle from an enumeration index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the enumeration index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A resolvable tag family definition.
///
/// Definitions are matched by exact display name against the catalog's
/// fixed name table; the definition itself carries no placement logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDefinition {
    id: DefId,
    name: Id,
}

impl TagDefinition {
    /// Creates a new tag definition.
    pub fn new(id: DefId, name: Id) -> Self {
        Self { id, name }
    }

    /// Returns the definition's enumeration-order handle.
    pub fn id(&self) -> DefId {
        self.id
    }

    /// Returns the definition's display name (e.g. `"M_Room Tag"`).
    pub fn name(&self) -> Id {
        self.name
    }
}

/// Orientation of a placed tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// What a placed tag refers to.
///
/// Reference tags point at an element; region tags bind to an area region
/// within the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagTarget {
    /// A reference-bound tag pointing at an element
    Element(Id),
    /// A region-bound tag for an area region
    Region(Id),
}

impl TagTarget {
    /// Returns the id of the referenced element or region.
    pub fn id(&self) -> Id {
        match *self {
            TagTarget::Element(id) | TagTarget::Region(id) => id,
        }
    }
}

/// Identity of a placed tag, assigned by the document at commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TagId(u64);

impl TagId {
    /// Creates a tag identity from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identity value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A tag inside an open creation scope, before commit.
///
/// Pending tags have no document identity; committing the batch converts
/// each of them into a [`PlacedTag`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTag {
    definition: DefId,
    target: TagTarget,
    leader: bool,
    orientation: TagOrientation,
    anchor: Point,
    head: Point,
}

impl PendingTag {
    /// Creates a pending reference-bound tag anchored at `anchor`.
    ///
    /// The head position starts at the anchor; offsets are applied by
    /// repositioning the head after creation.
    pub fn reference(
        definition: DefId,
        element: Id,
        leader: bool,
        orientation: TagOrientation,
        anchor: Point,
    ) -> Self {
        Self {
            definition,
            target: TagTarget::Element(element),
            leader,
            orientation,
            anchor,
            head: anchor,
        }
    }

    /// Creates a pending region-bound tag anchored by a planar coordinate.
    ///
    /// Region tags are positioned by 2D coordinate only; both anchor and
    /// head start at the planar point lifted to zero elevation.
    pub fn region(definition: DefId, region: Id, anchor: Uv) -> Self {
        let anchor = anchor.to_point();
        Self {
            definition,
            target: TagTarget::Region(region),
            leader: false,
            orientation: TagOrientation::Horizontal,
            anchor,
            head: anchor,
        }
    }

    /// Returns the tag's definition handle.
    pub fn definition(&self) -> DefId {
        self.definition
    }

    /// Returns the tag's target.
    pub fn target(&self) -> TagTarget {
        self.target
    }

    /// Returns true if the tag draws a leader line.
    pub fn leader(&self) -> bool {
        self.leader
    }

    /// Returns the tag's orientation.
    pub fn orientation(&self) -> TagOrientation {
        self.orientation
    }

    /// Returns the anchor (insertion reference) point.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the current head position.
    pub fn head(&self) -> Point {
        self.head
    }

    /// Repositions the tag's head, leaving the anchor untouched.
    pub fn set_head(&mut self, head: Point) {
        self.head = head;
    }

    /// Converts the pending tag into a placed tag with document identity.
    pub fn into_placed(self, id: TagId, view: Id) -> PlacedTag {
        PlacedTag {
            id,
            view,
            definition: self.definition,
            target: self.target,
            leader: self.leader,
            orientation: self.orientation,
            anchor: self.anchor,
            head: self.head,
        }
    }
}

/// A committed annotation tag.
///
/// This is the placement result: document identity plus the final head
/// position, which may be offset from the raw anchor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlacedTag {
    id: TagId,
    view: Id,
    definition: DefId,
    #[serde(default)]
    leader: bool,
    #[serde(default)]
    orientation: TagOrientation,
    target: TagTarget,
    anchor: Point,
    head: Point,
}

impl PlacedTag {
    /// Returns the tag's document identity.
    pub fn id(&self) -> TagId {
        self.id
    }

    /// Returns the name of the view hosting the tag.
    pub fn view(&self) -> Id {
        self.view
    }

    /// Returns the tag's definition handle.
    pub fn definition(&self) -> DefId {
        self.definition
    }

    /// Returns the tag's target.
    pub fn target(&self) -> TagTarget {
        self.target
    }

    /// Returns true if the tag draws a leader line.
    pub fn leader(&self) -> bool {
        self.leader
    }

    /// Returns the tag's orientation.
    pub fn orientation(&self) -> TagOrientation {
        self.orientation
    }

    /// Returns the anchor (insertion reference) point.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Returns the final head position.
    pub fn head(&self) -> Point {
        self.head
    }
}
