//! AI coach — circadian schedule analysis with an AI primary and a
//! deterministic rule-based fallback behind one planner interface.

pub mod handlers;
pub mod models;
pub mod planner;
pub mod prompts;
