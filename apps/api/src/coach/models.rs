//! Wire types for the AI coach: the request snapshot of the user's day and
//! the structured daily plan both planner backends produce.
//!
//! The plan is deliberately modeled as explicit tagged records (not open JSON
//! maps) so both the LLM output and the rule-based fallback are checked
//! against the same shape.

use serde::{Deserialize, Serialize};

use crate::nutrition::glucose::MealType;

/// Snapshot of the user's current biological state. Every field has the demo
/// default, so an empty `{}` request body is a valid analysis input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachRequest {
    #[serde(default = "default_bedtime")]
    pub bedtime: String,
    #[serde(default = "default_wake_time")]
    pub wake_time: String,
    #[serde(default = "default_sleep_quality")]
    pub sleep_quality: u8,
    #[serde(default = "default_last_meal")]
    pub last_meal: String,
    #[serde(default = "default_last_meal_time")]
    pub last_meal_time: String,
    #[serde(default = "default_energy_level")]
    pub energy_level: u8,
    #[serde(default = "default_mood")]
    pub mood: String,
    #[serde(default = "default_workout_type")]
    pub workout_type: Option<String>,
    #[serde(default = "default_workout_time")]
    pub workout_time: Option<String>,
}

impl Default for CoachRequest {
    fn default() -> Self {
        CoachRequest {
            bedtime: default_bedtime(),
            wake_time: default_wake_time(),
            sleep_quality: default_sleep_quality(),
            last_meal: default_last_meal(),
            last_meal_time: default_last_meal_time(),
            energy_level: default_energy_level(),
            mood: default_mood(),
            workout_type: default_workout_type(),
            workout_time: default_workout_time(),
        }
    }
}

fn default_bedtime() -> String {
    "23:00".to_string()
}
fn default_wake_time() -> String {
    "07:00".to_string()
}
fn default_sleep_quality() -> u8 {
    7
}
fn default_last_meal() -> String {
    "chicken and rice".to_string()
}
fn default_last_meal_time() -> String {
    "12:30".to_string()
}
fn default_energy_level() -> u8 {
    6
}
fn default_mood() -> String {
    "neutral".to_string()
}
fn default_workout_type() -> Option<String> {
    Some("strength training".to_string())
}
fn default_workout_time() -> Option<String> {
    Some("16:00".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Plan output
// ────────────────────────────────────────────────────────────────────────────

/// A named time window with the reasoning behind it. Times stay as `"HH:MM"`
/// strings on this path: the LLM emits them and the fallback formats them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedWindow {
    pub start: String,
    pub end: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimeTime {
    pub focus_peak: TimedWindow,
    pub strength_peak: TimedWindow,
    pub focus_crash: TimedWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Focus,
    Strength,
    Recovery,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub time: String,
    pub duration_min: u32,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Tip,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecommendation {
    pub time: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub reason: String,
}

/// The full optimized daily schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    pub biological_prime_time: PrimeTime,
    pub schedule_blocks: Vec<ScheduleBlock>,
    pub alerts: Vec<Alert>,
    pub meal_recommendations: Vec<MealRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_body_takes_demo_defaults() {
        let request: CoachRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.bedtime, "23:00");
        assert_eq!(request.wake_time, "07:00");
        assert_eq!(request.sleep_quality, 7);
        assert_eq!(request.workout_type.as_deref(), Some("strength training"));
    }

    #[test]
    fn test_workout_fields_accept_null() {
        let request: CoachRequest =
            serde_json::from_str(r#"{"workout_type": null, "workout_time": null}"#).unwrap();
        assert!(request.workout_type.is_none());
        assert!(request.workout_time.is_none());
    }

    /// The exact wire shape the planner backends must produce.
    #[test]
    fn test_daily_plan_deserializes_from_wire_shape() {
        let json = r#"{
            "biological_prime_time": {
                "focus_peak": {"start": "09:00", "end": "11:00", "reason": "cortisol peak"},
                "strength_peak": {"start": "16:00", "end": "18:00", "reason": "core temp max"},
                "focus_crash": {"start": "14:00", "end": "15:00", "reason": "circadian dip"}
            },
            "schedule_blocks": [
                {
                    "time": "09:00",
                    "duration_min": 120,
                    "activity": "Deep Work Block",
                    "type": "focus",
                    "reason": "prime time"
                }
            ],
            "alerts": [
                {"time": "14:00", "type": "warning", "message": "crash incoming"}
            ],
            "meal_recommendations": [
                {"time": "15:30", "type": "high-carb", "reason": "pre-workout glycogen"}
            ]
        }"#;

        let plan: DailyPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.biological_prime_time.focus_peak.start, "09:00");
        assert_eq!(plan.schedule_blocks[0].kind, BlockKind::Focus);
        assert_eq!(plan.alerts[0].kind, AlertKind::Warning);
        assert_eq!(plan.meal_recommendations[0].meal_type, MealType::HighCarb);
    }

    #[test]
    fn test_plan_round_trips_through_json() {
        let plan = DailyPlan {
            biological_prime_time: PrimeTime {
                focus_peak: TimedWindow {
                    start: "09:00".into(),
                    end: "11:00".into(),
                    reason: "r".into(),
                },
                strength_peak: TimedWindow {
                    start: "16:00".into(),
                    end: "18:00".into(),
                    reason: "r".into(),
                },
                focus_crash: TimedWindow {
                    start: "14:00".into(),
                    end: "15:00".into(),
                    reason: "r".into(),
                },
            },
            schedule_blocks: vec![],
            alerts: vec![Alert {
                time: "14:00".into(),
                kind: AlertKind::Tip,
                message: "m".into(),
            }],
            meal_recommendations: vec![],
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["alerts"][0]["type"], "tip");
        let back: DailyPlan = serde_json::from_value(value).unwrap();
        assert_eq!(back.alerts[0].kind, AlertKind::Tip);
    }
}
