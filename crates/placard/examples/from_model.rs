//! Example: Tagging a document built from the model types
//!
//! This example demonstrates how to programmatically build a document
//! using the model types directly, run a tagging pass over it, and
//! inspect the placed tags.

use placard::{
    RunReporter, Tagger,
    document::InMemoryDocument,
    geometry::Point,
    identifier::Id,
    model::{Category, Element, Location, View, ViewKind, WallKind},
};

/// Prints each view's report line as it arrives.
struct PrintReporter;

impl RunReporter for PrintReporter {
    fn view_processed(&mut self, view: &str, count: usize) {
        println!("Added {count} tags to view '{view}'");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building document from model types...\n");

    // A floor plan with a room, a door on a curve, and a curtain wall
    let floor_plan = View::new(Id::new("Level 1"), ViewKind::FloorPlan)
        .with_element(
            Element::new(Id::new("room-101"), Category::Rooms)
                .with_location(Location::Point(Point::new(0.0, 0.0, 0.0))),
        )
        .with_element(
            Element::new(Id::new("door-1"), Category::Doors).with_location(Location::Curve {
                start: Point::new(2.0, 0.0, 0.0),
                end: Point::new(4.0, 0.0, 0.0),
            }),
        )
        .with_element(
            Element::new(Id::new("wall-3"), Category::Walls)
                .with_wall_kind(WallKind::Curtain)
                .with_location(Location::Curve {
                    start: Point::new(0.0, 5.0, 0.0),
                    end: Point::new(10.0, 5.0, 0.0),
                }),
        );

    // A section showing the same room; rooms are the only eligible
    // category in sections
    let section = View::new(Id::new("Section A-A"), ViewKind::Section).with_element(
        Element::new(Id::new("room-101"), Category::Rooms)
            .with_location(Location::Point(Point::new(0.0, 0.0, 0.0))),
    );

    let mut document = InMemoryDocument::new()
        .with_tag_family("M_Room Tag")
        .with_tag_family("M_Door Tag")
        .with_tag_family("M_Wall Tag")
        .with_tag_family("M_Curtain Wall Tag")
        .with_view(floor_plan)
        .with_view(section);

    // Run the tagging pass with default configuration
    let tagger = Tagger::default();
    let summary = tagger.run(&mut document, &mut PrintReporter)?;

    println!("\nPlaced {} tags in total:", summary.total());
    for tag in document.tags() {
        println!(
            "  #{} in '{}' -> {:?} head at ({}, {}, {})",
            tag.id().value(),
            tag.view(),
            tag.target(),
            tag.head().x(),
            tag.head().y(),
            tag.head().z(),
        );
    }

    Ok(())
}
