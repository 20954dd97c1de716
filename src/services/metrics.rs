//! Raw signal extraction and batch-relative normalization.
//!
//! Every metric is min-max scaled against the current batch only;
//! absolute values carry no meaning across calls. Urgency and effort are
//! inverted after scaling (sooner deadlines and smaller efforts score
//! higher) and carry documented edge-case boosts.

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::models::ResolvedTask;

/// Days-until-due substituted for tasks with no parseable due date:
/// far enough out to read as "effectively never due."
pub const NO_DUE_DATE_DAYS: f64 = 3650.0;

/// Window over which the overdue boost ramps up to its maximum.
const OVERDUE_WINDOW_DAYS: f64 = 30.0;

/// Maximum urgency boost for overdue tasks.
const OVERDUE_BOOST_MAX: f64 = 0.5;

/// Effort at or below this many hours counts as a quick win.
const QUICK_WIN_THRESHOLD_HOURS: f64 = 1.0;

/// Flat bonus added to the effort metric of quick wins.
const QUICK_WIN_BONUS: f64 = 0.1;

/// Raw per-task signals before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSignals {
    /// Days until the due date (negative when overdue), or
    /// [`NO_DUE_DATE_DAYS`] when there is none.
    pub urgency_days: f64,
    /// Stated importance.
    pub importance: f64,
    /// Estimated effort in hours.
    pub effort_hours: f64,
    /// Fan-in: how many dependency mentions point at this task.
    pub dependents: f64,
}

/// The four normalized metrics of one task, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSet {
    /// Deadline pressure: higher means due sooner (or overdue).
    pub urgency: f64,
    /// Stated importance relative to the batch.
    pub importance: f64,
    /// Quick-win appeal: higher means less effort.
    pub effort: f64,
    /// Blocking impact: higher means more tasks are unblocked by this one.
    pub dependencies: f64,
}

/// Parse a `YYYY-MM-DD` due date, degrading to `None` on any failure.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(due_date = raw, "unparseable due date, treating as no due date");
            None
        }
    }
}

/// Extract the raw signals of one task as of `today`.
pub fn extract_signals(task: &ResolvedTask, dependents: u32, today: NaiveDate) -> RawSignals {
    let urgency_days = task
        .due_date
        .as_deref()
        .and_then(parse_due_date)
        .map_or(NO_DUE_DATE_DAYS, |due| (due - today).num_days() as f64);

    RawSignals {
        urgency_days,
        importance: task.importance as f64,
        effort_hours: task.estimated_hours,
        dependents: f64::from(dependents),
    }
}

/// Min-max scale `value` into `[0, 1]`; a degenerate batch (all values
/// equal) maps everything to 1.0.
fn scale(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        (value - min) / (max - min)
    }
}

fn bounds(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// Normalize a batch of raw signals into per-task metric sets.
///
/// Order is preserved. An empty batch yields an empty result.
pub fn normalize_batch(signals: &[RawSignals]) -> Vec<MetricSet> {
    if signals.is_empty() {
        return Vec::new();
    }

    let (min_days, max_days) = bounds(signals.iter().map(|s| s.urgency_days));
    let (min_imp, max_imp) = bounds(signals.iter().map(|s| s.importance));
    let (min_eff, max_eff) = bounds(signals.iter().map(|s| s.effort_hours));
    let (min_dep, max_dep) = bounds(signals.iter().map(|s| s.dependents));
    let deps_degenerate = (max_dep - min_dep).abs() < f64::EPSILON;

    signals
        .iter()
        .map(|s| {
            let mut urgency = 1.0 - scale(s.urgency_days, min_days, max_days);
            if s.urgency_days < 0.0 {
                let boost = (s.urgency_days.abs() / OVERDUE_WINDOW_DAYS).min(1.0);
                urgency = (urgency + OVERDUE_BOOST_MAX * boost).min(1.0);
            }

            let importance = scale(s.importance, min_imp, max_imp);

            let mut effort = 1.0 - scale(s.effort_hours, min_eff, max_eff);
            if s.effort_hours <= QUICK_WIN_THRESHOLD_HOURS {
                effort = (effort + QUICK_WIN_BONUS).min(1.0);
            }

            // Degenerate fan-in batches split on positivity instead of
            // collapsing to 1.0: a task nobody depends on must not score
            // as a blocker.
            let dependencies = if deps_degenerate {
                if s.dependents > 0.0 {
                    1.0
                } else {
                    0.0
                }
            } else {
                scale(s.dependents, min_dep, max_dep)
            };

            MetricSet {
                urgency,
                importance,
                effort,
                dependencies,
            }
        })
        .collect()
}
