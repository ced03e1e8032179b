//! Glucose curve simulation — closed-form energy response to a meal.
//!
//! Each meal category maps to a piecewise formula around a baseline of 50.
//! The simulator samples the formula over `[0, duration_hours]` and derives
//! the peak and crash points for visualization. Pure and deterministic: no
//! I/O, no state, no failure modes for well-formed numeric input.

use serde::{Deserialize, Deserializer, Serialize};
use std::f64::consts::PI;

/// Resting energy level all curves are anchored to.
pub const BASELINE: f64 = 50.0;
pub const DEFAULT_DURATION_HOURS: f64 = 4.0;
pub const DEFAULT_SAMPLE_COUNT: usize = 48;

/// Meal category driving the curve shape.
///
/// Deserialization is lenient: any unrecognized name resolves to `Balanced`.
/// That is a silent default, not an error — unknown categories get the
/// middle-of-the-road profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MealType {
    #[serde(rename = "high-sugar")]
    HighSugar,
    #[default]
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "high-protein")]
    HighProtein,
    #[serde(rename = "high-carb")]
    HighCarb,
}

impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(MealType::from_name(&name))
    }
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::HighSugar,
        MealType::Balanced,
        MealType::HighProtein,
        MealType::HighCarb,
    ];

    /// Resolves a wire name, falling back to `Balanced` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name {
            "high-sugar" => MealType::HighSugar,
            "high-protein" => MealType::HighProtein,
            "high-carb" => MealType::HighCarb,
            _ => MealType::Balanced,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            MealType::HighSugar => "high-sugar",
            MealType::Balanced => "balanced",
            MealType::HighProtein => "high-protein",
            MealType::HighCarb => "high-carb",
        }
    }

    /// Evaluates the raw (unrounded) energy curve at `t` hours after the meal.
    pub fn energy_at(self, t: f64) -> f64 {
        match self {
            MealType::HighSugar => high_sugar(t),
            MealType::Balanced => balanced(t),
            MealType::HighProtein => high_protein(t),
            MealType::HighCarb => high_carb(t),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MealType::HighSugar => {
                "High-sugar meals cause a rapid glucose spike followed by an insulin-driven \
                 crash. You'll feel an energy burst for 20-30 min, then a significant dip \
                 below baseline due to reactive hypoglycemia."
            }
            MealType::Balanced => {
                "A balanced meal with protein, complex carbs, and healthy fats provides \
                 sustained energy over 2-3 hours. Glucose rises moderately and declines \
                 gradually without crashing."
            }
            MealType::HighProtein => {
                "High-protein meals have the slowest glucose response and longest satiety. \
                 Energy rises gradually and sustains for 3-4 hours through gluconeogenesis \
                 and stable insulin levels."
            }
            MealType::HighCarb => {
                "Complex carbohydrate meals provide moderate energy with good duration. \
                 Glycemic response is faster than protein but more sustained than simple \
                 sugars."
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Piecewise curve formulas
// ────────────────────────────────────────────────────────────────────────────
// The breakpoints and coefficients are load-bearing: chart consumers depend on
// the exact shapes, so these must not be approximated or smoothed.

/// Sharp spike then crash. Glucose rises fast, insulin overcorrects.
fn high_sugar(t: f64) -> f64 {
    if t < 0.3 {
        BASELINE + 45.0 * (t / 0.3)
    } else if t < 0.8 {
        BASELINE + 45.0 * (-3.0 * (t - 0.3)).exp()
    } else if t < 2.0 {
        // Undershoot below baseline: reactive hypoglycemia.
        BASELINE + 45.0 * (-3.0 * 0.5_f64).exp() - 15.0 * (PI * (t - 0.8) / 1.2).sin()
    } else {
        BASELINE - 5.0 + 5.0 * (1.0 - (-(t - 2.0)).exp())
    }
}

/// Gradual rise, sustained plateau, gentle decline.
fn balanced(t: f64) -> f64 {
    if t < 0.5 {
        BASELINE + 25.0 * (t / 0.5) * (1.0 - (-3.0 * t).exp())
    } else if t < 2.5 {
        BASELINE + 25.0 - 3.0 * (t - 0.5)
    } else {
        BASELINE + 25.0 - 3.0 * 2.0 - 5.0 * (t - 2.5)
    }
}

/// Slow rise, long sustained energy, very gradual decline.
fn high_protein(t: f64) -> f64 {
    let rise = 20.0 * (1.0 - (-1.5 * t).exp());
    let decline = if t > 2.0 { 3.0 * (t - 2.0) } else { 0.0 };
    BASELINE + rise - decline
}

/// Moderate spike, moderate duration. Between sugar and balanced.
fn high_carb(t: f64) -> f64 {
    if t < 0.5 {
        BASELINE + 35.0 * (t / 0.5) * (1.0 - (-4.0 * t).exp())
    } else if t < 1.5 {
        BASELINE + 35.0 - 10.0 * (t - 0.5)
    } else {
        BASELINE + 35.0 - 10.0 - 8.0 * (t - 1.5)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// One point on the sampled curve. `time_offset_hours` is rounded to two
/// decimals, `energy_level` to one.
#[derive(Debug, Clone, Serialize)]
pub struct MealCurveSample {
    pub time_offset_hours: f64,
    pub label: String,
    pub energy_level: f64,
}

/// The peak or crash point of a curve.
#[derive(Debug, Clone, Serialize)]
pub struct CurveExtremum {
    pub label: String,
    pub energy_level: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlucoseCurveResult {
    pub meal_type: MealType,
    pub duration_hours: f64,
    pub samples: Vec<MealCurveSample>,
    pub peak: CurveExtremum,
    pub crash: CurveExtremum,
    pub description: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Simulation
// ────────────────────────────────────────────────────────────────────────────

/// Samples the energy curve for a meal type at `sample_count + 1` evenly
/// spaced points over `[0, duration_hours]`, inclusive of both ends.
///
/// Preconditions: `duration_hours > 0`, `sample_count >= 1`. Callers validate;
/// the simulator itself never fails for well-formed numeric input.
pub fn compute_curve(
    meal_type: MealType,
    duration_hours: f64,
    sample_count: usize,
) -> GlucoseCurveResult {
    let mut samples = Vec::with_capacity(sample_count + 1);
    for i in 0..=sample_count {
        let t = (i as f64 / sample_count as f64) * duration_hours;
        samples.push(MealCurveSample {
            time_offset_hours: round_to(t, 2),
            label: time_label(t),
            energy_level: round_to(meal_type.energy_at(t), 1),
        });
    }

    let peak = find_peak(&samples);
    let crash = find_crash(&samples);

    GlucoseCurveResult {
        meal_type,
        duration_hours,
        samples,
        peak,
        crash,
        description: meal_type.description(),
    }
}

/// Maximum-energy sample; ties go to the earliest index (strict `>` scan).
fn find_peak(samples: &[MealCurveSample]) -> CurveExtremum {
    let mut best = &samples[0];
    for sample in &samples[1..] {
        if sample.energy_level > best.energy_level {
            best = sample;
        }
    }
    CurveExtremum {
        label: best.label.clone(),
        energy_level: best.energy_level,
    }
}

/// Minimum-energy sample; ties go to the earliest index (strict `<` scan).
fn find_crash(samples: &[MealCurveSample]) -> CurveExtremum {
    let mut best = &samples[0];
    for sample in &samples[1..] {
        if sample.energy_level < best.energy_level {
            best = sample;
        }
    }
    CurveExtremum {
        label: best.label.clone(),
        energy_level: best.energy_level,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Human-readable offset label: "Now", "+45m", "+2h", "+1h30m".
fn time_label(t: f64) -> String {
    let hours = t.trunc() as u32;
    let minutes = ((t - f64::from(hours)) * 60.0) as u32;
    match (hours, minutes) {
        (0, 0) => "Now".to_string(),
        (0, m) => format!("+{m}m"),
        (h, 0) => format!("+{h}h"),
        (h, m) => format!("+{h}h{m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_and_time_axis() {
        for meal_type in MealType::ALL {
            let result = compute_curve(meal_type, 4.0, 48);
            assert_eq!(result.samples.len(), 49);
            assert!((result.samples[0].time_offset_hours - 0.0).abs() < 1e-9);
            assert!((result.samples[48].time_offset_hours - 4.0).abs() < 1e-9);
            for pair in result.samples.windows(2) {
                assert!(pair[1].time_offset_hours >= pair[0].time_offset_hours);
            }
        }
    }

    #[test]
    fn test_high_sugar_peaks_at_95_at_point_three_hours() {
        // At exactly t=0.3 the decay branch applies with exp(0) = 1.
        assert!((MealType::HighSugar.energy_at(0.3) - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_sugar_undershoots_baseline() {
        let result = compute_curve(MealType::HighSugar, 4.0, 48);
        let undershoot = result.samples.iter().any(|s| {
            s.time_offset_hours > 0.8 && s.time_offset_hours <= 2.0 && s.energy_level < BASELINE
        });
        assert!(undershoot, "expected a sample below baseline in (0.8, 2.0]");
    }

    #[test]
    fn test_high_sugar_recovery_branch_at_two_hours() {
        // At exactly t=2.0 the recovery branch applies, not the undershoot.
        assert!((MealType::HighSugar.energy_at(2.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_peak_and_crash_bound_all_samples() {
        for meal_type in MealType::ALL {
            let result = compute_curve(meal_type, 4.0, 48);
            for sample in &result.samples {
                assert!(result.peak.energy_level >= sample.energy_level);
                assert!(result.crash.energy_level <= sample.energy_level);
            }
        }
    }

    #[test]
    fn test_extremum_ties_break_to_earliest_index() {
        let samples = vec![
            MealCurveSample {
                time_offset_hours: 0.0,
                label: "Now".to_string(),
                energy_level: 50.0,
            },
            MealCurveSample {
                time_offset_hours: 1.0,
                label: "+1h".to_string(),
                energy_level: 70.0,
            },
            MealCurveSample {
                time_offset_hours: 2.0,
                label: "+2h".to_string(),
                energy_level: 70.0,
            },
            MealCurveSample {
                time_offset_hours: 3.0,
                label: "+3h".to_string(),
                energy_level: 50.0,
            },
        ];
        assert_eq!(find_peak(&samples).label, "+1h");
        assert_eq!(find_crash(&samples).label, "Now");
    }

    #[test]
    fn test_high_protein_has_no_decline_before_two_hours() {
        let at_one = MealType::HighProtein.energy_at(1.0);
        let at_two = MealType::HighProtein.energy_at(2.0);
        assert!(at_two > at_one, "rise continues while decline is clamped");
    }

    #[test]
    fn test_energy_rounded_to_one_decimal() {
        let result = compute_curve(MealType::Balanced, 4.0, 48);
        for sample in &result.samples {
            let scaled = sample.energy_level * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_unknown_meal_type_defaults_to_balanced() {
        assert_eq!(MealType::from_name("keto"), MealType::Balanced);
        assert_eq!(MealType::from_name(""), MealType::Balanced);
        let parsed: MealType = serde_json::from_str("\"seafood\"").unwrap();
        assert_eq!(parsed, MealType::Balanced);
    }

    #[test]
    fn test_known_meal_type_wire_names_round_trip() {
        for meal_type in MealType::ALL {
            assert_eq!(MealType::from_name(meal_type.wire_name()), meal_type);
            let json = serde_json::to_string(&meal_type).unwrap();
            let parsed: MealType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, meal_type);
        }
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(time_label(0.0), "Now");
        assert_eq!(time_label(0.5), "+30m");
        assert_eq!(time_label(1.0), "+1h");
        assert_eq!(time_label(1.25), "+1h15m");
        assert_eq!(time_label(2.75), "+2h45m");
    }

    #[test]
    fn test_single_sample_duration() {
        // Smallest valid sample_count still yields both endpoints.
        let result = compute_curve(MealType::Balanced, 1.0, 1);
        assert_eq!(result.samples.len(), 2);
        assert_eq!(result.samples[1].label, "+1h");
    }
}
