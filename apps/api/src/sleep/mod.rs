//! Sleep — the 90-minute cycle calculator and its route handler.

pub mod cycles;
pub mod handlers;
