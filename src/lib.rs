//! Masks Dispatch - label fit engine for Masks call sheets
//!
//! Effective labels, pentagon graph geometry, requirement overlays, the
//! three-tier fit verdict, turn cooldowns and the dispatch workflow.

pub mod cooldown;
pub mod core;
pub mod dispatch;
pub mod fit;
pub mod geometry;
pub mod labels;
pub mod overlay;
