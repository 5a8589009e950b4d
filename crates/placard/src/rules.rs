//! Per-view-kind category eligibility rules.
//!
//! Each recognized [`ViewKind`] maps to the ordered set of element
//! categories that receive tags in views of that kind. The table is fixed
//! for the lifetime of the process and expressed as immutable data; there
//! is no way to mutate it at runtime.
//!
//! View kinds without an entry ([`ViewKind::Other`]) are skipped entirely
//! by the pipeline: no elements of such views are ever considered.

use placard_core::model::{Category, ViewKind};

const FLOOR_PLAN: &[Category] = &[
    Category::Rooms,
    Category::Windows,
    Category::Doors,
    Category::Furniture,
    Category::Walls,
];

const AREA_PLAN: &[Category] = &[Category::Areas];

const CEILING_PLAN: &[Category] = &[Category::Rooms, Category::LightingFixtures];

const SECTION: &[Category] = &[Category::Rooms];

/// Returns the ordered set of categories eligible for tagging in views of
/// the given kind, or `None` when views of that kind are never tagged.
///
/// # Examples
///
/// ```
/// # use placard::rules;
/// # use placard::model::{Category, ViewKind};
/// let categories = rules::categories_for(ViewKind::Section).unwrap();
/// assert_eq!(categories, &[Category::Rooms]);
///
/// assert!(rules::categories_for(ViewKind::Other).is_none());
/// ```
pub fn categories_for(kind: ViewKind) -> Option<&'static [Category]> {
    match kind {
        ViewKind::FloorPlan => Some(FLOOR_PLAN),
        ViewKind::AreaPlan => Some(AREA_PLAN),
        ViewKind::CeilingPlan => Some(CEILING_PLAN),
        ViewKind::Section => Some(SECTION),
        ViewKind::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_plan_categories() {
        assert_eq!(
            categories_for(ViewKind::FloorPlan),
            Some(
                &[
                    Category::Rooms,
                    Category::Windows,
                    Category::Doors,
                    Category::Furniture,
                    Category::Walls,
                ][..]
            )
        );
    }

    #[test]
    fn test_area_plan_categories() {
        assert_eq!(
            categories_for(ViewKind::AreaPlan),
            Some(&[Category::Areas][..])
        );
    }

    #[test]
    fn test_ceiling_plan_categories() {
        assert_eq!(
            categories_for(ViewKind::CeilingPlan),
            Some(&[Category::Rooms, Category::LightingFixtures][..])
        );
    }

    #[test]
    fn test_section_categories() {
        assert_eq!(
            categories_for(ViewKind::Section),
            Some(&[Category::Rooms][..])
        );
    }

    #[test]
    fn test_other_has_no_rule() {
        assert_eq!(categories_for(ViewKind::Other), None);
    }

    #[test]
    fn test_curtain_walls_never_directly_eligible() {
        // Curtain walls enter the pipeline as Walls elements and are
        // remapped by classification, never matched by the rule table.
        for kind in [
            ViewKind::FloorPlan,
            ViewKind::AreaPlan,
            ViewKind::CeilingPlan,
            ViewKind::Section,
        ] {
            let categories = categories_for(kind).unwrap();
            assert!(!categories.contains(&Category::CurtainWalls));
        }
    }
}
