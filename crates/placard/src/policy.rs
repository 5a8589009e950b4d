//! Placement policy: classification and head offsets.
//!
//! Classification turns an eligible element into a [`TagPlan`]: the final
//! category the tag is resolved under, plus the placement path (region- or
//! reference-bound, with or without a leader line). Category remapping for
//! curtain-kind walls happens here, before tag-definition lookup and before
//! any leader or offset decision, so downstream stages only ever see the
//! final category.
//!
//! Head offsets are applied to a tag's head position after creation, never
//! to its anchor. The two offset rules are independent checks and may both
//! apply to the same tag.

use placard_core::{
    geometry::Point,
    model::{Category, Element, ViewKind},
};

/// How a tag is bound to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPath {
    /// Region-bound area tag, positioned by planar coordinate only
    Region,
    /// Reference-bound element tag
    Reference {
        /// Whether the tag draws a leader line to its anchor
        leader: bool,
    },
}

/// The classification outcome for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPlan {
    category: Category,
    path: TagPath,
}

impl TagPlan {
    /// Returns the final category the tag definition is resolved under.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the placement path.
    pub fn path(&self) -> TagPath {
        self.path
    }
}

/// Classifies an element into its tag plan.
///
/// - Areas take the region-bound path.
/// - Walls are tagged with a leader; curtain-kind walls are additionally
///   remapped to [`Category::CurtainWalls`].
/// - Everything else is reference-bound without a leader, category
///   unchanged.
pub fn classify(element: &Element) -> TagPlan {
    match element.category() {
        Category::Areas => TagPlan {
            category: Category::Areas,
            path: TagPath::Region,
        },
        Category::Walls => {
            let category = if element.is_curtain_wall() {
                Category::CurtainWalls
            } else {
                Category::Walls
            };
            TagPlan {
                category,
                path: TagPath::Reference { leader: true },
            }
        }
        category => TagPlan {
            category,
            path: TagPath::Reference { leader: false },
        },
    }
}

/// Computes the head offset for a tag of the given final category hosted in
/// a view of the given kind.
///
/// Windows shift the head by `(0, +3, 0)`; tags in section views shift by
/// `(0, 0, +3)`. The checks are independent: a window tagged in a section
/// view receives both, summed. The zero offset means "leave the head at the
/// anchor".
pub fn head_offset(category: Category, view_kind: ViewKind) -> Point {
    let mut offset = Point::default();
    if category == Category::Windows {
        offset = offset.add_point(Point::new(0.0, 3.0, 0.0));
    }
    if view_kind == ViewKind::Section {
        offset = offset.add_point(Point::new(0.0, 0.0, 3.0));
    }
    offset
}
