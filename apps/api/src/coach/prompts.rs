//! Prompts for the AI coach. The system prompt pins the persona and the
//! scientific vocabulary; the analyze template pins the exact JSON shape that
//! `DailyPlan` deserializes.

use crate::coach::models::CoachRequest;

pub const COACH_SYSTEM_PROMPT: &str = "You are a Chronobiology Coach — an expert in circadian rhythms, sleep science, and exercise physiology. Your role is to optimize a user's daily schedule based on their biological data.

RULES:
1. Always cite specific scientific concepts: adenosine buildup, cortisol awakening response, ultradian rhythms, sleep inertia, glycogen depletion, EPOC (Excess Post-Exercise Oxygen Consumption).
2. Predict \"Focus Crash\" windows (times when cognitive performance will drop) and \"Strength Peak\" windows (times when physical performance peaks — typically late afternoon).
3. Recommend schedule adjustments based on the user's sleep, meal, and energy data.
4. Return responses as valid JSON with the structure specified in each request.
5. Be specific with times (use 24-hour format) and explain the WHY behind each recommendation.
6. Consider the user's chronotype, sleep debt, and meal timing in all recommendations.";

const ANALYZE_PROMPT_TEMPLATE: &str = r#"Based on the following user data, generate an optimized daily schedule.

USER DATA:
- Sleep: went to bed at {bedtime}, woke up at {wake_time}
- Sleep quality: {sleep_quality}/10
- Last meal: {last_meal} at {last_meal_time}
- Current energy level: {energy_level}/10
- Current mood: {mood}
- Planned workout: {workout_type} at {workout_time}

Return a JSON object with this EXACT structure:
{
    "biological_prime_time": {
        "focus_peak": {"start": "HH:MM", "end": "HH:MM", "reason": "..."},
        "strength_peak": {"start": "HH:MM", "end": "HH:MM", "reason": "..."},
        "focus_crash": {"start": "HH:MM", "end": "HH:MM", "reason": "..."}
    },
    "schedule_blocks": [
        {
            "time": "HH:MM",
            "duration_min": 60,
            "activity": "Deep Work / High Intensity / Recovery / Light Tasks",
            "type": "focus|strength|recovery|light",
            "reason": "Scientific explanation"
        }
    ],
    "alerts": [
        {
            "time": "HH:MM",
            "type": "warning|tip|info",
            "message": "Actionable advice with scientific backing"
        }
    ],
    "meal_recommendations": [
        {
            "time": "HH:MM",
            "type": "high-carb|high-protein|balanced",
            "reason": "Why this meal type at this time"
        }
    ]
}"#;

pub fn build_analyze_prompt(request: &CoachRequest) -> String {
    ANALYZE_PROMPT_TEMPLATE
        .replace("{bedtime}", &request.bedtime)
        .replace("{wake_time}", &request.wake_time)
        .replace("{sleep_quality}", &request.sleep_quality.to_string())
        .replace("{last_meal}", &request.last_meal)
        .replace("{last_meal_time}", &request.last_meal_time)
        .replace("{energy_level}", &request.energy_level.to_string())
        .replace("{mood}", &request.mood)
        .replace("{workout_type}", request.workout_type.as_deref().unwrap_or("none"))
        .replace(
            "{workout_time}",
            request.workout_time.as_deref().unwrap_or("not scheduled"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_prompt_interpolates_all_fields() {
        let prompt = build_analyze_prompt(&CoachRequest::default());
        assert!(prompt.contains("went to bed at 23:00, woke up at 07:00"));
        assert!(prompt.contains("Sleep quality: 7/10"));
        assert!(prompt.contains("strength training at 16:00"));
        assert!(prompt.contains("\"biological_prime_time\""));
        assert!(!prompt.contains("{bedtime}"));
    }

    #[test]
    fn test_missing_workout_renders_placeholders() {
        let request = CoachRequest {
            workout_type: None,
            workout_time: None,
            ..CoachRequest::default()
        };
        let prompt = build_analyze_prompt(&request);
        assert!(prompt.contains("Planned workout: none at not scheduled"));
    }
}
