//! Integration tests for the Tagger API
//!
//! These tests drive full tagging runs through the public facade against
//! in-memory documents and check the placed tags, counts, and reports.

use placard::{
    RunReporter, Tagger,
    config::{AppConfig, BatchFailureMode, FailureConfig, ReportConfig, ReportMode},
    document::{Document, DocumentError, InMemoryDocument, TagBatch},
    geometry::Point,
    identifier::Id,
    model::{
        Category, Element, Location, TagDefinition, TagId, TagOrientation, TagTarget, View,
        ViewKind, WallKind,
    },
};

#[derive(Default)]
struct CollectingReporter {
    reports: Vec<(String, usize)>,
}

impl RunReporter for CollectingReporter {
    fn view_processed(&mut self, view: &str, count: usize) {
        self.reports.push((view.to_string(), count));
    }
}

/// Document wrapper whose commit fails for one named view.
struct FailingCommit {
    inner: InMemoryDocument,
    fail_view: Id,
}

impl FailingCommit {
    fn new(inner: InMemoryDocument, fail_view: Id) -> Self {
        Self { inner, fail_view }
    }

    fn inner(&self) -> &InMemoryDocument {
        &self.inner
    }
}

impl Document for FailingCommit {
    fn views(&self) -> Vec<View> {
        self.inner.views()
    }

    fn tag_definitions(&self) -> &[TagDefinition] {
        self.inner.tag_definitions()
    }

    fn commit(&mut self, batch: TagBatch) -> Result<Vec<TagId>, DocumentError> {
        if batch.view() == self.fail_view {
            return Err(DocumentError::UnknownView { view: batch.view() });
        }
        self.inner.commit(batch)
    }
}

fn point(x: f64, y: f64, z: f64) -> Location {
    Location::Point(Point::new(x, y, z))
}

fn all_tag_families() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_tag_family("M_Room Tag")
        .with_tag_family("M_Door Tag")
        .with_tag_family("M_Window Tag")
        .with_tag_family("M_Furniture Tag")
        .with_tag_family("M_Lighting Fixture Tag")
        .with_tag_family("M_Wall Tag")
        .with_tag_family("M_Curtain Wall Tag")
        .with_tag_family("M_Area Tag")
}

#[test]
fn test_floor_plan_room_and_door() {
    let mut doc = all_tag_families().with_view(
        View::new(Id::new("Level 1"), ViewKind::FloorPlan)
            .with_element(
                Element::new(Id::new("room-101"), Category::Rooms)
                    .with_location(point(0.0, 0.0, 0.0)),
            )
            .with_element(
                Element::new(Id::new("door-1"), Category::Doors).with_location(Location::Curve {
                    start: Point::new(2.0, 0.0, 0.0),
                    end: Point::new(4.0, 0.0, 0.0),
                }),
            ),
    );

    let summary = Tagger::default().run(&mut doc, &mut ()).expect("run");

    assert_eq!(summary.total(), 2);
    assert_eq!(doc.tags().len(), 2);

    let room_tag = &doc.tags()[0];
    assert_eq!(room_tag.target(), TagTarget::Element(Id::new("room-101")));
    assert_eq!(room_tag.head(), Point::new(0.0, 0.0, 0.0));

    // The door sits on a curve; its tag lands on the midpoint.
    let door_tag = &doc.tags()[1];
    assert_eq!(door_tag.target(), TagTarget::Element(Id::new("door-1")));
    assert_eq!(door_tag.head(), Point::new(3.0, 0.0, 0.0));
    assert_eq!(door_tag.anchor(), Point::new(3.0, 0.0, 0.0));
}

#[test]
fn test_window_head_offset_in_floor_plan() {
    let mut doc = all_tag_families().with_view(
        View::new(Id::new("Level 1"), ViewKind::FloorPlan).with_element(
            Element::new(Id::new("window-1"), Category::Windows)
                .with_location(point(1.0, 1.0, 0.0)),
        ),
    );

    Tagger::default().run(&mut doc, &mut ()).expect("run");

    let tag = &doc.tags()[0];
    // Head is offset from the anchor; the anchor itself never moves.
    assert_eq!(tag.anchor(), Point::new(1.0, 1.0, 0.0));
    assert_eq!(tag.head(), Point::new(1.0, 4.0, 0.0));
}

#[test]
fn test_section_head_offset() {
    let mut doc = all_tag_families().with_view(
        View::new(Id::new("Section A-A"), ViewKind::Section).with_element(
            Element::new(Id::new("room-201"), Category::Rooms)
                .with_location(point(1.0, 1.0, 0.0)),
        ),
    );

    Tagger::default().run(&mut doc, &mut ()).expect("run");

    let tag = &doc.tags()[0];
    assert_eq!(tag.anchor(), Point::new(1.0, 1.0, 0.0));
    assert_eq!(tag.head(), Point::new(1.0, 1.0, 3.0));
}

#[test]
fn test_area_plan_takes_region_path() {
    let mut doc = all_tag_families().with_view(
        View::new(Id::new("Rentable Areas"), ViewKind::AreaPlan).with_element(
            // The area's location has a nonzero elevation; the region tag
            // must still land on the working plane.
            Element::new(Id::new("area-1"), Category::Areas).with_location(point(5.0, 5.0, 7.0)),
        ),
    );

    let summary = Tagger::default().run(&mut doc, &mut ()).expect("run");

    assert_eq!(summary.total(), 1);
    let tag = &doc.tags()[0];
    assert_eq!(tag.target(), TagTarget::Region(Id::new("area-1")));
    assert_eq!(tag.anchor(), Point::new(5.0, 5.0, 0.0));
    assert_eq!(tag.head(), Point::new(5.0, 5.0, 0.0));
    assert!(!tag.leader());
}

#[test]
fn test_curtain_wall_resolves_curtain_definition() {
    let mut doc = all_tag_families().with_view(
        View::new(Id::new("Level 1"), ViewKind::FloorPlan)
            .with_element(
                Element::new(Id::new("wall-basic"), Category::Walls)
                    .with_wall_kind(WallKind::Basic)
                    .with_location(Location::Curve {
                        start: Point::new(0.0, 0.0, 0.0),
                        end: Point::new(10.0, 0.0, 0.0),
                    }),
            )
            .with_element(
                Element::new(Id::new("wall-curtain"), Category::Walls)
                    .with_wall_kind(WallKind::Curtain)
                    .with_location(Location::Curve {
                        start: Point::new(0.0, 5.0, 0.0),
                        end: Point::new(10.0, 5.0, 0.0),
                    }),
            ),
    );

    Tagger::default().run(&mut doc, &mut ()).expect("run");

    let defs = doc.tag_definitions().to_vec();
    let wall_def = defs.iter().find(|d| d.name() == "M_Wall Tag").unwrap().id();
    let curtain_def = defs
        .iter()
        .find(|d| d.name() == "M_Curtain Wall Tag")
        .unwrap()
        .id();

    let basic_tag = &doc.tags()[0];
    assert_eq!(basic_tag.definition(), wall_def);
    assert!(basic_tag.leader());

    // The curtain wall is looked up under Curtain Walls, never Walls,
    // and keeps its leader.
    let curtain_tag = &doc.tags()[1];
    assert_eq!(curtain_tag.definition(), curtain_def);
    assert!(curtain_tag.leader());
}

#[test]
fn test_missing_curtain_definition_skips_element() {
    // The document resolves a wall tag but no curtain wall tag; the
    // curtain wall must be skipped, not tagged under Walls.
    let mut doc = InMemoryDocument::new()
        .with_tag_family("M_Room Tag")
        .with_tag_family("M_Wall Tag")
        .with_view(
            View::new(Id::new("Level 1"), ViewKind::FloorPlan)
                .with_element(
                    Element::new(Id::new("room-101"), Category::Rooms)
                        .with_location(point(0.0, 0.0, 0.0)),
                )
                .with_element(
                    Element::new(Id::new("wall-curtain"), Category::Walls)
                        .with_wall_kind(WallKind::Curtain)
                        .with_location(Location::Curve {
                            start: Point::new(0.0, 5.0, 0.0),
                            end: Point::new(10.0, 5.0, 0.0),
                        }),
                ),
        );

    let mut reporter = CollectingReporter::default();
    let summary = Tagger::default().run(&mut doc, &mut reporter).expect("run");

    assert_eq!(summary.total(), 1);
    assert_eq!(doc.tags().len(), 1);
    assert_eq!(doc.tags()[0].target(), TagTarget::Element(Id::new("room-101")));
    assert_eq!(reporter.reports, vec![("Level 1".to_string(), 1)]);
}

#[test]
fn test_element_without_location_is_skipped() {
    let mut doc = all_tag_families().with_view(
        View::new(Id::new("Level 1"), ViewKind::FloorPlan)
            .with_element(Element::new(Id::new("room-unplaced"), Category::Rooms))
            .with_element(
                Element::new(Id::new("room-placed"), Category::Rooms)
                    .with_location(point(2.0, 2.0, 0.0)),
            ),
    );

    let summary = Tagger::default().run(&mut doc, &mut ()).expect("run");

    assert_eq!(summary.total(), 1);
    assert_eq!(
        doc.tags()[0].target(),
        TagTarget::Element(Id::new("room-placed"))
    );
}

#[test]
fn test_tags_are_horizontal() {
    let mut doc = all_tag_families().with_view(
        View::new(Id::new("Level 1"), ViewKind::FloorPlan).with_element(
            Element::new(Id::new("room-101"), Category::Rooms).with_location(point(0.0, 0.0, 0.0)),
        ),
    );

    Tagger::default().run(&mut doc, &mut ()).expect("run");
    assert_eq!(doc.tags()[0].orientation(), TagOrientation::Horizontal);
}

fn two_view_document() -> InMemoryDocument {
    all_tag_families()
        .with_view(
            View::new(Id::new("Level 1"), ViewKind::FloorPlan)
                .with_element(
                    Element::new(Id::new("room-101"), Category::Rooms)
                        .with_location(point(0.0, 0.0, 0.0)),
                )
                .with_element(
                    Element::new(Id::new("room-102"), Category::Rooms)
                        .with_location(point(5.0, 0.0, 0.0)),
                ),
        )
        .with_view(
            View::new(Id::new("Ceiling 1"), ViewKind::CeilingPlan).with_element(
                Element::new(Id::new("light-1"), Category::LightingFixtures)
                    .with_location(point(2.0, 2.0, 3.0)),
            ),
        )
}

#[test]
fn test_per_view_reporting() {
    let mut doc = two_view_document();
    let mut reporter = CollectingReporter::default();

    let summary = Tagger::default().run(&mut doc, &mut reporter).expect("run");

    assert_eq!(summary.total(), 3);
    assert_eq!(
        reporter.reports,
        vec![("Level 1".to_string(), 2), ("Ceiling 1".to_string(), 1)]
    );
}

#[test]
fn test_cumulative_reporting() {
    let mut doc = two_view_document();
    let mut reporter = CollectingReporter::default();

    let config = AppConfig::new(
        ReportConfig::new(ReportMode::Cumulative),
        FailureConfig::default(),
    );
    let summary = Tagger::new(config).run(&mut doc, &mut reporter).expect("run");

    // The legacy mode reports the running total after every view.
    assert_eq!(summary.total(), 3);
    assert_eq!(
        reporter.reports,
        vec![("Level 1".to_string(), 2), ("Ceiling 1".to_string(), 3)]
    );
}

#[test]
fn test_summary_outcomes_carry_both_counts() {
    let mut doc = two_view_document();

    let summary = Tagger::default().run(&mut doc, &mut ()).expect("run");

    let outcomes = summary.views();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].view(), "Level 1");
    assert_eq!(outcomes[0].added(), 2);
    assert_eq!(outcomes[0].total(), 2);
    assert_eq!(outcomes[1].view(), "Ceiling 1");
    assert_eq!(outcomes[1].added(), 1);
    assert_eq!(outcomes[1].total(), 3);
}

#[test]
fn test_batch_failure_aborts_run_by_default() {
    let mut doc = FailingCommit::new(two_view_document(), Id::new("Level 1"));
    let mut reporter = CollectingReporter::default();

    let err = Tagger::default().run(&mut doc, &mut reporter).unwrap_err();

    assert!(matches!(err, placard::PlacardError::ViewBatch { .. }));
    // Nothing from the failed view is observable, and the run stopped
    // before the second view.
    assert!(doc.inner().tags().is_empty());
    assert!(reporter.reports.is_empty());
}

#[test]
fn test_batch_failure_skip_view_continues() {
    let mut doc = FailingCommit::new(two_view_document(), Id::new("Level 1"));
    let mut reporter = CollectingReporter::default();

    let config = AppConfig::new(
        ReportConfig::default(),
        FailureConfig::new(BatchFailureMode::SkipView),
    );
    let summary = Tagger::new(config).run(&mut doc, &mut reporter).expect("run");

    // The failed view contributes nothing; the ceiling plan still tags.
    assert_eq!(summary.total(), 1);
    assert_eq!(summary.views().len(), 1);
    assert_eq!(summary.views()[0].view(), "Ceiling 1");
    assert_eq!(reporter.reports, vec![("Ceiling 1".to_string(), 1)]);
    assert_eq!(doc.inner().tags().len(), 1);
    assert_eq!(
        doc.inner().tags()[0].target(),
        TagTarget::Element(Id::new("light-1"))
    );
}

#[test]
fn test_model_file_round_trip() {
    let input = r#"
        tag-families = ["M_Room Tag", "M_Door Tag"]

        [[views]]
        name = "Level 1"
        kind = "floor-plan"

        [[views.elements]]
        id = "room-101"
        category = "rooms"
        location = { point = { x = 0.0, y = 0.0, z = 0.0 } }

        [[views.elements]]
        id = "door-1"
        category = "doors"
        location = { curve = { start = { x = 2.0, y = 0.0, z = 0.0 }, end = { x = 4.0, y = 0.0, z = 0.0 } } }
    "#;

    let mut doc = InMemoryDocument::from_toml_str(input).expect("parse");
    let summary = Tagger::default().run(&mut doc, &mut ()).expect("run");
    assert_eq!(summary.total(), 2);

    let serialized = doc.to_toml_string().expect("serialize");
    let reloaded = InMemoryDocument::from_toml_str(&serialized).expect("reparse");
    assert_eq!(reloaded.tags(), doc.tags());
    assert_eq!(reloaded.tags().len(), 2);
}

#[test]
fn test_reusable_tagger() {
    let tagger = Tagger::default();

    let mut doc1 = two_view_document();
    let mut doc2 = two_view_document();

    let summary1 = tagger.run(&mut doc1, &mut ()).expect("first run");
    let summary2 = tagger.run(&mut doc2, &mut ()).expect("second run");

    assert_eq!(summary1.total(), 3);
    assert_eq!(summary2.total(), 3);
}
