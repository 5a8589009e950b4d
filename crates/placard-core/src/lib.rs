//! Placard Core Types and Definitions
//!
//! This crate provides the foundational types and definitions for the
//! Placard tagging engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Insertion-point and offset math ([`geometry`] module)
//! - **Model**: The semantic document model ([`model`] module) - views,
//!   elements, locations, categories, tag definitions, and placed tags

pub mod geometry;
pub mod identifier;
pub mod model;
