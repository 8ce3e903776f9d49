//! Placeholder icons for the content blocker browser extension
//!
//! Renders a red circle with a white "X" at 16, 48 and 128 pixels and saves
//! each one as `icon<size>.png`.

pub mod draw;
pub mod geometry;
pub mod icon_gen;
pub mod manifest;
