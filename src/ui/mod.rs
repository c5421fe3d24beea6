/// UI building blocks
///
/// This module holds the widgets that are more than a one-liner in the
/// main view:
/// - Gallery grid of uploaded photos (grid.rs)

pub mod grid;
