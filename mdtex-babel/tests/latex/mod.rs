//! LaTeX rendering tests
//!
//! Whole-document conversions, checked against inline snapshots.

mod kitchensink;
mod render;
