//! Pre-loaded mock data: a simulated week of a student's life, returned by
//! `GET /api/mock/week` and seeded into the collection tables at startup.

use serde::Serialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::info;

use crate::db::{self, Collection};

#[derive(Debug, Clone, Serialize)]
pub struct MockUser {
    pub name: &'static str,
    pub age: u8,
    pub chronotype: &'static str,
    pub goal: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepLog {
    pub bedtime: &'static str,
    pub wake_time: &'static str,
    pub quality: u8,
    pub cycles_completed: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MealLog {
    pub time: &'static str,
    #[serde(rename = "type")]
    pub meal_type: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutLog {
    pub time: &'static str,
    #[serde(rename = "type")]
    pub workout_type: &'static str,
    pub muscles: Vec<&'static str>,
    pub intensity: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnergyEntry {
    pub time: &'static str,
    pub level: u8,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiPivot {
    pub original_plan: &'static str,
    pub new_plan: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MockDay {
    pub day: &'static str,
    pub date: &'static str,
    pub sleep_log: SleepLog,
    pub meals: Vec<MealLog>,
    pub workout: Option<WorkoutLog>,
    pub energy_log: Vec<EnergyEntry>,
    pub ai_schedule_result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_pivot: Option<AiPivot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MockWeek {
    pub user: MockUser,
    pub days: Vec<MockDay>,
}

/// The 5-day demo week: two good days, a short-sleep day, a hard training
/// day, and a late-night crash day with an AI pivot.
pub fn mock_week() -> MockWeek {
    MockWeek {
        user: MockUser {
            name: "Alex Chen",
            age: 21,
            chronotype: "moderate_evening",
            goal: "Balance academics with gym performance",
        },
        days: vec![
            MockDay {
                day: "Monday",
                date: "2026-02-09",
                sleep_log: SleepLog {
                    bedtime: "23:00",
                    wake_time: "07:00",
                    quality: 7,
                    cycles_completed: 5,
                },
                meals: vec![
                    MealLog { time: "08:00", meal_type: "balanced", description: "Oatmeal with banana and peanut butter" },
                    MealLog { time: "12:30", meal_type: "balanced", description: "Grilled chicken wrap with veggies" },
                    MealLog { time: "15:30", meal_type: "high-carb", description: "Sweet potato and rice (pre-workout)" },
                    MealLog { time: "18:00", meal_type: "high-protein", description: "Protein shake + salmon dinner" },
                ],
                workout: Some(WorkoutLog {
                    time: "16:00",
                    workout_type: "strength",
                    muscles: vec!["chest", "triceps", "shoulders"],
                    intensity: 8,
                }),
                energy_log: vec![
                    EnergyEntry { time: "07:00", level: 4, note: "Sleep inertia — groggy" },
                    EnergyEntry { time: "09:00", level: 8, note: "Peak focus — crushed study session" },
                    EnergyEntry { time: "14:00", level: 5, note: "Post-lunch dip" },
                    EnergyEntry { time: "16:30", level: 9, note: "Strength peak — great workout" },
                    EnergyEntry { time: "20:00", level: 6, note: "Moderate energy for evening review" },
                ],
                ai_schedule_result: "optimal",
                ai_pivot: None,
            },
            MockDay {
                day: "Tuesday",
                date: "2026-02-10",
                sleep_log: SleepLog {
                    bedtime: "01:30",
                    wake_time: "07:00",
                    quality: 4,
                    cycles_completed: 3,
                },
                meals: vec![
                    MealLog { time: "09:00", meal_type: "high-sugar", description: "Energy drink + muffin (bad choice)" },
                    MealLog { time: "13:00", meal_type: "balanced", description: "Burrito bowl" },
                    MealLog { time: "19:00", meal_type: "high-protein", description: "Steak and vegetables" },
                ],
                workout: Some(WorkoutLog {
                    time: "16:00",
                    workout_type: "strength",
                    muscles: vec!["back", "biceps"],
                    intensity: 5,
                }),
                energy_log: vec![
                    EnergyEntry { time: "07:00", level: 2, note: "Severe sleep debt — only 3 cycles" },
                    EnergyEntry { time: "09:30", level: 6, note: "Sugar spike from energy drink" },
                    EnergyEntry { time: "10:30", level: 3, note: "CRASH — reactive hypoglycemia" },
                    EnergyEntry { time: "14:00", level: 4, note: "Dragging through afternoon" },
                    EnergyEntry { time: "16:30", level: 5, note: "Subpar workout — sleep debt impacting strength" },
                ],
                ai_schedule_result: "pivoted",
                ai_pivot: Some(AiPivot {
                    original_plan: "Deep Work at 09:00, Gym at 16:00",
                    new_plan: "Light tasks until 11:00 (extended inertia), Nap at 14:00, Gym moved to 17:00",
                    reason: "Only 3 sleep cycles completed. Adenosine levels are critically high. \
                        Sleep inertia extended to ~3h. AI recommended a 20-min power nap to \
                        partially clear adenosine before training.",
                }),
            },
            MockDay {
                day: "Wednesday",
                date: "2026-02-11",
                sleep_log: SleepLog {
                    bedtime: "22:30",
                    wake_time: "07:00",
                    quality: 8,
                    cycles_completed: 5,
                },
                meals: vec![
                    MealLog { time: "07:30", meal_type: "balanced", description: "Eggs, toast, avocado" },
                    MealLog { time: "12:00", meal_type: "balanced", description: "Quinoa salad with grilled chicken" },
                    MealLog { time: "15:00", meal_type: "high-carb", description: "Banana + granola bar (pre-workout)" },
                    MealLog { time: "17:30", meal_type: "high-protein", description: "Protein shake + turkey meal prep" },
                ],
                workout: Some(WorkoutLog {
                    time: "15:30",
                    workout_type: "cardio",
                    muscles: vec!["legs", "core"],
                    intensity: 7,
                }),
                energy_log: vec![
                    EnergyEntry { time: "07:00", level: 5, note: "Good wake, mild inertia" },
                    EnergyEntry { time: "09:00", level: 9, note: "Excellent focus — cortisol peak" },
                    EnergyEntry { time: "13:00", level: 6, note: "Manageable post-lunch dip" },
                    EnergyEntry { time: "15:30", level: 7, note: "Good cardio session" },
                    EnergyEntry { time: "20:00", level: 6, note: "Relaxed evening study" },
                ],
                ai_schedule_result: "optimal",
                ai_pivot: None,
            },
            MockDay {
                day: "Thursday",
                date: "2026-02-12",
                sleep_log: SleepLog {
                    bedtime: "23:00",
                    wake_time: "06:30",
                    quality: 7,
                    cycles_completed: 4,
                },
                meals: vec![
                    MealLog { time: "07:00", meal_type: "balanced", description: "Smoothie bowl" },
                    MealLog { time: "11:30", meal_type: "balanced", description: "Sandwich with soup" },
                    MealLog { time: "14:30", meal_type: "high-carb", description: "Rice cakes with honey" },
                    MealLog { time: "17:00", meal_type: "high-protein", description: "Chicken stir fry" },
                ],
                workout: Some(WorkoutLog {
                    time: "15:00",
                    workout_type: "strength",
                    muscles: vec!["legs", "glutes"],
                    intensity: 9,
                }),
                energy_log: vec![
                    EnergyEntry { time: "06:30", level: 5, note: "Slightly early wake" },
                    EnergyEntry { time: "08:30", level: 8, note: "Strong focus block" },
                    EnergyEntry { time: "13:00", level: 5, note: "Afternoon dip" },
                    EnergyEntry { time: "15:30", level: 9, note: "Leg day PR — peak strength window" },
                    EnergyEntry { time: "19:00", level: 4, note: "Post-leg-day fatigue" },
                ],
                ai_schedule_result: "optimal",
                ai_pivot: None,
            },
            MockDay {
                day: "Friday",
                date: "2026-02-13",
                sleep_log: SleepLog {
                    bedtime: "02:00",
                    wake_time: "09:00",
                    quality: 5,
                    cycles_completed: 4,
                },
                meals: vec![
                    MealLog { time: "10:00", meal_type: "high-sugar", description: "Coffee and donut" },
                    MealLog { time: "14:00", meal_type: "balanced", description: "Poke bowl" },
                    MealLog { time: "20:00", meal_type: "balanced", description: "Pizza with friends" },
                ],
                workout: None,
                energy_log: vec![
                    EnergyEntry { time: "09:00", level: 3, note: "Late night studying — heavy sleep debt" },
                    EnergyEntry { time: "10:30", level: 5, note: "Caffeine + sugar temporary boost" },
                    EnergyEntry { time: "12:00", level: 3, note: "Crash — worse than baseline" },
                    EnergyEntry { time: "15:00", level: 5, note: "Gradually recovering" },
                    EnergyEntry { time: "20:00", level: 6, note: "Social energy boost" },
                ],
                ai_schedule_result: "pivoted",
                ai_pivot: Some(AiPivot {
                    original_plan: "Deep Work at 11:00, Gym at 16:00",
                    new_plan: "Rest day declared. Light review only. No gym — recovery prioritized. \
                        Early bedtime recommended at 22:00.",
                    reason: "Cumulative sleep debt from late-night study session. Circadian phase \
                        has shifted ~2h later. Training while sleep-deprived increases cortisol \
                        and injury risk by 60%. AI prescribed a recovery day.",
                }),
            },
        ],
    }
}

/// Seeds the collection tables with the mock student week if `users` is empty.
/// Errors bubble to the caller, which treats the whole seed as best-effort.
pub async fn seed_mock_data(pool: &PgPool) -> anyhow::Result<()> {
    let existing = db::count_documents(pool, Collection::Users).await?;
    if existing > 0 {
        info!("mock data already present — skipping seed");
        return Ok(());
    }

    let week = mock_week();
    db::insert_document(pool, Collection::Users, &serde_json::to_value(&week.user)?).await?;

    for day in &week.days {
        let sleep = dated(day.date, serde_json::to_value(&day.sleep_log)?);
        db::insert_document(pool, Collection::SleepLogs, &sleep).await?;

        for meal in &day.meals {
            let meal = dated(day.date, serde_json::to_value(meal)?);
            db::insert_document(pool, Collection::MealLogs, &meal).await?;
        }

        if let Some(workout) = &day.workout {
            let workout = dated(day.date, serde_json::to_value(workout)?);
            db::insert_document(pool, Collection::WorkoutLogs, &workout).await?;
        }
    }

    info!("seeded 5-day mock student week");
    Ok(())
}

/// Stamps a log document with the day's date before insert.
fn dated(date: &str, mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        map.insert("date".to_string(), json!(date));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_has_five_days() {
        let week = mock_week();
        assert_eq!(week.days.len(), 5);
        assert_eq!(week.user.name, "Alex Chen");
    }

    #[test]
    fn test_friday_is_a_rest_day_with_pivot() {
        let week = mock_week();
        let friday = &week.days[4];
        assert!(friday.workout.is_none());
        assert_eq!(friday.ai_schedule_result, "pivoted");
        assert!(friday.ai_pivot.is_some());
    }

    #[test]
    fn test_optimal_days_serialize_without_pivot_key() {
        let week = mock_week();
        let monday = serde_json::to_value(&week.days[0]).unwrap();
        assert!(monday.get("ai_pivot").is_none());
        assert_eq!(monday["sleep_log"]["cycles_completed"], 5);
        assert_eq!(monday["meals"][2]["type"], "high-carb");
    }

    #[test]
    fn test_dated_stamps_log_documents() {
        let value = dated("2026-02-09", json!({"time": "08:00"}));
        assert_eq!(value["date"], "2026-02-09");
        assert_eq!(value["time"], "08:00");
    }
}
