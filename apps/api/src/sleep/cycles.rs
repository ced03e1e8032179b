//! Sleep cycle calculator — bedtime options, inertia window, study window,
//! and a per-cycle stage breakdown for the timeline visualization.
//!
//! All arithmetic is wall-clock time-of-day; `NaiveTime` wraps across
//! midnight, so a 07:00 wake correctly yields bedtimes the previous evening.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use crate::clock;

pub const CYCLE_MINUTES: i64 = 90;
/// Average time to fall asleep, added on top of the cycles themselves.
pub const SLEEP_ONSET_MINUTES: i64 = 14;
/// Hours of reduced performance after waking.
pub const INERTIA_HOURS: i64 = 2;
pub const MIN_CYCLES: u32 = 3;
pub const MAX_CYCLES: u32 = 6;

const LIGHT_SLEEP: &str = "Light Sleep (N1/N2)";
const DEEP_SLEEP: &str = "Deep Sleep (N3)";
const REM_SLEEP: &str = "REM Sleep";

const INERTIA_WARNING: &str = "Cognitive performance is reduced during sleep inertia. \
    Avoid important decisions or complex tasks.";
const STUDY_WINDOW_REASON: &str = "Post-inertia cortisol peak aligns with maximum cognitive \
    performance. This is your Biological Prime Time for learning.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Minimum,
    Good,
    Optimal,
}

impl SleepQuality {
    pub fn for_cycles(cycles: u32) -> Self {
        if cycles >= 5 {
            SleepQuality::Optimal
        } else if cycles == 4 {
            SleepQuality::Good
        } else {
            SleepQuality::Minimum
        }
    }
}

/// One candidate bedtime for a given number of full sleep cycles.
#[derive(Debug, Clone, Serialize)]
pub struct BedtimeOption {
    #[serde(with = "clock::hhmm")]
    pub bedtime: NaiveTime,
    pub cycle_count: u32,
    pub sleep_duration_hours: f64,
    pub quality_label: SleepQuality,
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepStage {
    pub stage_name: &'static str,
    pub duration_minutes: u32,
    #[serde(with = "clock::hhmm")]
    pub start: NaiveTime,
}

/// One 90-minute cycle on the visualization timeline. `cycle_index` is 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct SleepCycleBlock {
    pub cycle_index: u32,
    #[serde(with = "clock::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end: NaiveTime,
    pub stages: Vec<SleepStage>,
    pub is_rem_heavy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InertiaWindow {
    #[serde(with = "clock::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end: NaiveTime,
    pub duration_hours: i64,
    pub warning: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyWindow {
    #[serde(with = "clock::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end: NaiveTime,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepPlanResult {
    #[serde(with = "clock::hhmm")]
    pub wake_time: NaiveTime,
    pub bedtime_options: Vec<BedtimeOption>,
    pub inertia_window: InertiaWindow,
    pub best_study_window: StudyWindow,
    pub cycle_visualization: Vec<SleepCycleBlock>,
}

/// Computes the full sleep plan for a wake time.
///
/// Options are ordered from most cycles (6) down to fewest (3):
/// `bedtime = wake − n·90min − 14min`, wrapping across midnight. The
/// visualization is built from the option with the most cycles.
pub fn compute_sleep_plan(wake_time: NaiveTime) -> SleepPlanResult {
    let mut bedtime_options = Vec::with_capacity((MAX_CYCLES - MIN_CYCLES + 1) as usize);
    for cycles in (MIN_CYCLES..=MAX_CYCLES).rev() {
        let asleep = Duration::minutes(i64::from(cycles) * CYCLE_MINUTES);
        let onset = Duration::minutes(SLEEP_ONSET_MINUTES);
        bedtime_options.push(BedtimeOption {
            bedtime: wake_time - asleep - onset,
            cycle_count: cycles,
            sleep_duration_hours: f64::from(cycles) * CYCLE_MINUTES as f64 / 60.0,
            quality_label: SleepQuality::for_cycles(cycles),
        });
    }

    let inertia_end = wake_time + Duration::hours(INERTIA_HOURS);
    let inertia_window = InertiaWindow {
        start: wake_time,
        end: inertia_end,
        duration_hours: INERTIA_HOURS,
        warning: INERTIA_WARNING,
    };

    // Best study window starts the moment inertia clears.
    let best_study_window = StudyWindow {
        start: inertia_end,
        end: inertia_end + Duration::hours(2),
        reason: STUDY_WINDOW_REASON,
    };

    let cycle_visualization = build_cycle_blocks(wake_time, bedtime_options[0].cycle_count);

    SleepPlanResult {
        wake_time,
        bedtime_options,
        inertia_window,
        best_study_window,
        cycle_visualization,
    }
}

/// Builds the per-cycle stage timeline, counting back `total_cycles` cycles
/// from the wake time (sleep onset, not bedtime — the 14-minute latency is
/// spent awake).
fn build_cycle_blocks(wake_time: NaiveTime, total_cycles: u32) -> Vec<SleepCycleBlock> {
    let sleep_onset = wake_time - Duration::minutes(i64::from(total_cycles) * CYCLE_MINUTES);

    (0..total_cycles)
        .map(|i| {
            let start = sleep_onset + Duration::minutes(i64::from(i) * CYCLE_MINUTES);
            let end = start + Duration::minutes(CYCLE_MINUTES);

            // REM proportion increases in the second half of the night.
            let is_rem_heavy = i >= total_cycles / 2;
            let (deep_minutes, rem_minutes) = if is_rem_heavy { (15, 30) } else { (25, 20) };

            // Stage starts are fixed offsets (0/45/70), matching the
            // first-half allocation even in REM-heavy cycles.
            let stages = vec![
                SleepStage {
                    stage_name: LIGHT_SLEEP,
                    duration_minutes: 45,
                    start,
                },
                SleepStage {
                    stage_name: DEEP_SLEEP,
                    duration_minutes: deep_minutes,
                    start: start + Duration::minutes(45),
                },
                SleepStage {
                    stage_name: REM_SLEEP,
                    duration_minutes: rem_minutes,
                    start: start + Duration::minutes(70),
                },
            ];

            SleepCycleBlock {
                cycle_index: i + 1,
                start,
                end,
                stages,
                is_rem_heavy,
            }
        })
        .collect()
}
