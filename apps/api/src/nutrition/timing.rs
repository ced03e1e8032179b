//! Nutrient timing — meal windows anchored to a planned workout time.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use crate::clock;
use crate::nutrition::glucose::MealType;

/// A meal window with concrete start/end times derived from the workout.
#[derive(Debug, Clone, Serialize)]
pub struct NutrientWindow {
    #[serde(with = "clock::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end: NaiveTime,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub recommendation: &'static str,
    pub science: &'static str,
}

/// A general (non-clock-anchored) meal window, described by a label.
#[derive(Debug, Clone, Serialize)]
pub struct GeneralWindow {
    pub window: &'static str,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub recommendation: &'static str,
    pub science: &'static str,
}

/// Entry in the combined day-long window list. Serializes to either shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MealWindow {
    Timed(NutrientWindow),
    General(GeneralWindow),
}

#[derive(Debug, Clone, Serialize)]
pub struct HydrationGuide {
    pub pre_workout: &'static str,
    pub during: &'static str,
    pub post: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NutrientTimingResult {
    #[serde(with = "clock::hhmm")]
    pub workout_time: NaiveTime,
    pub pre_workout: NutrientWindow,
    pub post_workout: NutrientWindow,
    pub meal_windows: Vec<MealWindow>,
    pub hydration: HydrationGuide,
}

/// Computes meal-timing windows around a workout: carbs beforehand, protein
/// afterwards, plus the fixed morning and evening windows.
pub fn compute_nutrient_timing(workout_time: NaiveTime) -> NutrientTimingResult {
    let pre_workout = NutrientWindow {
        start: workout_time - Duration::hours(2),
        end: workout_time - Duration::minutes(30),
        meal_type: MealType::HighCarb,
        recommendation: "30-50g complex carbohydrates (oats, sweet potato, whole grain bread). \
            Provides glycogen for high-intensity output.",
        science: "Muscle glycogen is the primary fuel source for resistance training and \
            high-intensity cardio. Pre-loading ensures peak performance.",
    };

    let post_workout = NutrientWindow {
        start: workout_time,
        end: workout_time + Duration::hours(1),
        meal_type: MealType::HighProtein,
        recommendation: "30-40g protein + 20-30g simple carbs (protein shake + banana). \
            Maximizes muscle protein synthesis.",
        science: "Leucine-rich protein activates mTOR pathway for muscle repair. Post-exercise \
            insulin sensitivity is elevated, making this the optimal anabolic window.",
    };

    let meal_windows = vec![
        MealWindow::General(GeneralWindow {
            window: "Morning (within 1h of waking)",
            meal_type: MealType::Balanced,
            recommendation: "Break the overnight fast with balanced macros to stabilize \
                cortisol and blood glucose.",
            science: "Cortisol is naturally high upon waking. Balanced nutrition prevents \
                cortisol-driven catabolism.",
        }),
        MealWindow::Timed(pre_workout.clone()),
        MealWindow::Timed(post_workout.clone()),
        MealWindow::General(GeneralWindow {
            window: "Evening (2-3h before bed)",
            meal_type: MealType::HighProtein,
            recommendation: "Casein-rich protein (cottage cheese, Greek yogurt) for sustained \
                overnight amino acid release.",
            science: "Casein digests slowly, providing a steady amino acid supply during the \
                overnight fasting/repair period.",
        }),
    ];

    NutrientTimingResult {
        workout_time,
        pre_workout,
        post_workout,
        meal_windows,
        hydration: HydrationGuide {
            pre_workout: "500ml water 2h before exercise",
            during: "150-250ml every 15-20 min during exercise",
            post: "1.5L per kg of body weight lost during exercise",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveTime {
        clock::parse_hhmm(s).unwrap()
    }

    #[test]
    fn test_windows_anchor_to_workout_time() {
        let result = compute_nutrient_timing(at("16:00"));
        assert_eq!(clock::format_hhmm(result.pre_workout.start), "14:00");
        assert_eq!(clock::format_hhmm(result.pre_workout.end), "15:30");
        assert_eq!(clock::format_hhmm(result.post_workout.start), "16:00");
        assert_eq!(clock::format_hhmm(result.post_workout.end), "17:00");
        assert_eq!(result.pre_workout.meal_type, MealType::HighCarb);
        assert_eq!(result.post_workout.meal_type, MealType::HighProtein);
    }

    #[test]
    fn test_meal_window_list_order() {
        let result = compute_nutrient_timing(at("16:00"));
        assert_eq!(result.meal_windows.len(), 4);
        assert!(matches!(result.meal_windows[0], MealWindow::General(_)));
        assert!(matches!(result.meal_windows[1], MealWindow::Timed(_)));
        assert!(matches!(result.meal_windows[2], MealWindow::Timed(_)));
        assert!(matches!(result.meal_windows[3], MealWindow::General(_)));
    }

    #[test]
    fn test_early_workout_wraps_pre_window() {
        let result = compute_nutrient_timing(at("01:00"));
        assert_eq!(clock::format_hhmm(result.pre_workout.start), "23:00");
    }

    #[test]
    fn test_serialized_shape_tags_meal_types() {
        let result = compute_nutrient_timing(at("16:00"));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["workout_time"], "16:00");
        assert_eq!(value["pre_workout"]["type"], "high-carb");
        assert_eq!(value["meal_windows"][0]["window"], "Morning (within 1h of waking)");
        assert_eq!(value["meal_windows"][1]["start"], "14:00");
        assert_eq!(value["hydration"]["pre_workout"], "500ml water 2h before exercise");
    }
}
