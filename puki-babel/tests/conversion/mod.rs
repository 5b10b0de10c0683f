//! End to end conversion tests
//!
//! Every case goes through the full pipeline, so these catch ordering
//! regressions the per-rule unit tests cannot see.

mod kitchensink;
mod properties;
mod table;
