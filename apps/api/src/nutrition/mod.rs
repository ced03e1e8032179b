//! Nutrition — the glucose curve simulator and nutrient-timing windows.

pub mod glucose;
pub mod handlers;
pub mod timing;
