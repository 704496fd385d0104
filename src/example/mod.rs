// src/example/mod.rs

//! Example rendering pipeline.
//!
//! - [`path`]: path joining and title -> name derivation.
//! - [`locator`]: finds `<root>/<name>/<name>.rb` across search roots.
//! - [`segment`]: splits a file into (comment, code) segments.
//! - [`render`]: turns segments into a docs/code table.
//! - [`tag`]: the `include_example` tag tying the above together with the
//!   execution runner.

pub mod locator;
pub mod path;
pub mod render;
pub mod segment;
pub mod tag;

pub use locator::{ExampleBundle, ExampleLocator};
pub use render::TableRenderer;
pub use segment::{parse, CodeBlock, Segment, SegmentSequence};
pub use tag::{ExampleTagHandler, PageContext};
