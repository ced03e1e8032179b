//! Schedule planners — pluggable, trait-based backends producing a `DailyPlan`.
//!
//! Default: `RuleBasedPlanner` (pure-Rust, deterministic, keyed off the wake
//! hour). When a Gemini API key is configured, `PlannerStack` tries the
//! `GeminiPlanner` first and falls back to the rule-based plan on any error,
//! so the endpoint never depends on the external service being reachable.
//!
//! `AppState` holds an `Arc<dyn SchedulePlanner>`, built at startup.

use async_trait::async_trait;
use tracing::warn;

use crate::coach::models::{
    Alert, AlertKind, BlockKind, CoachRequest, DailyPlan, MealRecommendation, PrimeTime,
    ScheduleBlock, TimedWindow,
};
use crate::coach::prompts::{build_analyze_prompt, COACH_SYSTEM_PROMPT};
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// The planner trait. Implement this to swap backends without touching the
/// endpoint, handler, or caller code.
#[async_trait]
pub trait SchedulePlanner: Send + Sync {
    async fn plan(&self, request: &CoachRequest) -> Result<DailyPlan, AppError>;

    /// Backend name, for logging and transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiPlanner — primary backend
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiPlanner {
    llm: LlmClient,
}

impl GeminiPlanner {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SchedulePlanner for GeminiPlanner {
    async fn plan(&self, request: &CoachRequest) -> Result<DailyPlan, AppError> {
        let prompt = build_analyze_prompt(request);
        self.llm
            .call_json::<DailyPlan>(&prompt, COACH_SYSTEM_PROMPT)
            .await
            .map_err(|e| AppError::Llm(format!("schedule generation failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedPlanner — deterministic fallback
// ────────────────────────────────────────────────────────────────────────────

pub struct RuleBasedPlanner;

#[async_trait]
impl SchedulePlanner for RuleBasedPlanner {
    async fn plan(&self, request: &CoachRequest) -> Result<DailyPlan, AppError> {
        Ok(rule_based_plan(request))
    }

    fn backend(&self) -> &'static str {
        "rule-based"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PlannerStack — primary with deterministic fallback
// ────────────────────────────────────────────────────────────────────────────

pub struct PlannerStack {
    primary: Option<GeminiPlanner>,
    fallback: RuleBasedPlanner,
}

impl PlannerStack {
    pub fn from_config(config: &Config) -> Self {
        let primary = config
            .gemini_api_key
            .clone()
            .map(|key| GeminiPlanner::new(LlmClient::new(key)));
        Self {
            primary,
            fallback: RuleBasedPlanner,
        }
    }
}

#[async_trait]
impl SchedulePlanner for PlannerStack {
    async fn plan(&self, request: &CoachRequest) -> Result<DailyPlan, AppError> {
        let Some(primary) = &self.primary else {
            return self.fallback.plan(request).await;
        };
        match primary.plan(request).await {
            Ok(plan) => Ok(plan),
            Err(e) => {
                warn!("AI planner unavailable, using rule-based fallback: {e}");
                self.fallback.plan(request).await
            }
        }
    }

    fn backend(&self) -> &'static str {
        match self.primary {
            Some(_) => "gemini+fallback",
            None => "rule-based",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule-based plan
// ────────────────────────────────────────────────────────────────────────────

/// Builds the deterministic daily plan. Schedule anchors shift with the wake
/// hour; gym-related entries stay pinned to the late-afternoon strength peak.
pub fn rule_based_plan(request: &CoachRequest) -> DailyPlan {
    // A malformed wake time degrades to the demo default of 07:00.
    let wake_h: i64 = request
        .wake_time
        .split(':')
        .next()
        .and_then(|h| h.trim().parse().ok())
        .unwrap_or(7);

    let biological_prime_time = PrimeTime {
        focus_peak: TimedWindow {
            start: clock(wake_h + 2, 0),
            end: clock(wake_h + 4, 0),
            reason: "Cortisol awakening response peaks ~2h post-wake, boosting alertness \
                and cognitive function. Adenosine levels are still low, maximizing focus \
                capacity."
                .to_string(),
        },
        strength_peak: TimedWindow {
            start: "16:00".to_string(),
            end: "18:00".to_string(),
            reason: "Core body temperature reaches its daily maximum in late afternoon, \
                increasing muscle flexibility, reaction time, and strength output by 5-10%."
                .to_string(),
        },
        focus_crash: TimedWindow {
            start: clock(wake_h + 7, 0),
            end: clock(wake_h + 8, 0),
            reason: "Post-lunch circadian dip combined with rising adenosine levels creates \
                a natural alertness trough. This aligns with the post-prandial somnolence \
                window."
                .to_string(),
        },
    };

    let schedule_blocks = vec![
        block(clock(wake_h, 0), 30, "Light Movement & Hydration", BlockKind::Recovery,
            "Sleep inertia lasts 15-30 min post-wake. Light activity accelerates cortisol \
             rise and clears residual adenosine."),
        block(clock(wake_h + 1, 0), 60, "Breakfast & Planning", BlockKind::Light,
            "Breaking the overnight fast stabilizes blood glucose. Planning tasks leverage \
             rising but not-yet-peak cortisol."),
        block(clock(wake_h + 2, 0), 120, "Deep Work Block", BlockKind::Focus,
            "Peak biological prime time — cortisol and dopamine align for maximum sustained \
             attention. Protect this window from interruptions."),
        block(clock(wake_h + 4, 0), 30, "Active Break", BlockKind::Recovery,
            "Ultradian rhythm suggests 90-120 min focus cycles. Movement increases BDNF and \
             restores attentional resources."),
        block(clock(wake_h + 5, 0), 90, "Secondary Focus Block", BlockKind::Focus,
            "Still within the elevated cortisol window. Good for collaborative or creative \
             tasks as rigid focus begins tapering."),
        block(clock(wake_h + 7, 0), 60, "Light Tasks / Admin", BlockKind::Light,
            "Circadian dip period. Handle emails, errands, or low-demand tasks. Fighting \
             this dip wastes willpower."),
        block("16:00".to_string(), 90, "High Intensity Training", BlockKind::Strength,
            "Core body temp peaks, maximizing muscle performance. Testosterone-to-cortisol \
             ratio is optimal. Risk of injury is lowest."),
        block("18:00".to_string(), 60, "Post-Workout Recovery & Dinner", BlockKind::Recovery,
            "30-60 min post-exercise anabolic window. High-protein meal supports muscle \
             protein synthesis via mTOR pathway activation."),
        block("20:00".to_string(), 90, "Light Study / Review", BlockKind::Light,
            "Evening review leverages memory consolidation processes. Avoid intense \
             learning — save that for the morning prime time."),
        block("21:30".to_string(), 60, "Wind Down", BlockKind::Recovery,
            "Dim lights to support melatonin secretion onset. Blue light exposure now \
             delays circadian phase by up to 90 minutes."),
    ];

    let alerts = vec![
        Alert {
            time: clock(wake_h + 7, 0),
            kind: AlertKind::Warning,
            message: "Focus Crash incoming! Adenosine buildup + post-lunch circadian dip. \
                Take a 20-min nap or walk outside for sunlight exposure to reset alertness."
                .to_string(),
        },
        Alert {
            time: "15:30".to_string(),
            kind: AlertKind::Tip,
            message: "Pre-workout nutrition window: consume 30-50g complex carbs now for \
                optimal glycogen availability during your 4 PM strength peak."
                .to_string(),
        },
        Alert {
            time: "20:00".to_string(),
            kind: AlertKind::Info,
            message: "Evening cortisol is dropping — ideal for reflective review but not \
                new intensive learning. Consolidation, not acquisition."
                .to_string(),
        },
    ];

    let meal_recommendations = vec![
        meal(clock(wake_h + 1, 0), "balanced",
            "Post-fast meal: combine protein + complex carbs + healthy fats. Stabilizes \
             blood glucose for the upcoming focus block."),
        meal(clock(wake_h + 5, 30), "balanced",
            "Pre-dip meal: balanced macros prevent sharp glucose spikes that worsen the \
             afternoon circadian trough."),
        meal("15:30".to_string(), "high-carb",
            "Pre-workout carb loading: glycogen is the primary fuel for high-intensity \
             exercise. 30-50g complex carbs 30-60 min pre-training."),
        meal("18:00".to_string(), "high-protein",
            "Post-workout anabolic window: 30-40g protein within 60 min triggers maximal \
             muscle protein synthesis via leucine-mediated mTOR activation."),
    ];

    DailyPlan {
        biological_prime_time,
        schedule_blocks,
        alerts,
        meal_recommendations,
    }
}

fn clock(hour: i64, minute: u32) -> String {
    format!("{:02}:{:02}", hour.rem_euclid(24), minute)
}

fn block(
    time: String,
    duration_min: u32,
    activity: &str,
    kind: BlockKind,
    reason: &str,
) -> ScheduleBlock {
    ScheduleBlock {
        time,
        duration_min,
        activity: activity.to_string(),
        kind,
        reason: reason.to_string(),
    }
}

fn meal(time: String, meal_type: &str, reason: &str) -> MealRecommendation {
    MealRecommendation {
        time,
        meal_type: crate::nutrition::glucose::MealType::from_name(meal_type),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::glucose::MealType;

    #[test]
    fn test_prime_time_tracks_wake_hour() {
        let plan = rule_based_plan(&CoachRequest::default());
        let prime = &plan.biological_prime_time;
        assert_eq!(prime.focus_peak.start, "09:00");
        assert_eq!(prime.focus_peak.end, "11:00");
        assert_eq!(prime.strength_peak.start, "16:00");
        assert_eq!(prime.focus_crash.start, "14:00");
        assert_eq!(prime.focus_crash.end, "15:00");
    }

    #[test]
    fn test_plan_shape() {
        let plan = rule_based_plan(&CoachRequest::default());
        assert_eq!(plan.schedule_blocks.len(), 10);
        assert_eq!(plan.alerts.len(), 3);
        assert_eq!(plan.meal_recommendations.len(), 4);
        assert_eq!(plan.schedule_blocks[2].kind, BlockKind::Focus);
        assert_eq!(plan.schedule_blocks[2].duration_min, 120);
        assert_eq!(plan.alerts[0].kind, AlertKind::Warning);
        assert_eq!(plan.meal_recommendations[2].meal_type, MealType::HighCarb);
        assert_eq!(plan.meal_recommendations[3].meal_type, MealType::HighProtein);
    }

    #[test]
    fn test_late_wake_wraps_past_midnight() {
        let request = CoachRequest {
            wake_time: "23:00".to_string(),
            ..CoachRequest::default()
        };
        let plan = rule_based_plan(&request);
        assert_eq!(plan.biological_prime_time.focus_peak.start, "01:00");
        assert_eq!(plan.biological_prime_time.focus_crash.start, "06:00");
    }

    #[test]
    fn test_malformed_wake_time_degrades_to_default() {
        let request = CoachRequest {
            wake_time: "not a time".to_string(),
            ..CoachRequest::default()
        };
        let plan = rule_based_plan(&request);
        // Same anchors as a 07:00 wake.
        assert_eq!(plan.biological_prime_time.focus_peak.start, "09:00");
    }

    #[test]
    fn test_half_hour_meal_anchor() {
        let plan = rule_based_plan(&CoachRequest::default());
        assert_eq!(plan.meal_recommendations[1].time, "12:30");
    }

    #[tokio::test]
    async fn test_stack_without_key_uses_fallback() {
        let config = Config {
            database_url: String::new(),
            gemini_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
        };
        let stack = PlannerStack::from_config(&config);
        assert_eq!(stack.backend(), "rule-based");
        let plan = stack.plan(&CoachRequest::default()).await.unwrap();
        assert_eq!(plan.schedule_blocks.len(), 10);
    }
}
