//! Scaling-policy document (untrusted input).
//!
//! Schedule and rule entries are stored as `RawValue` to enable lazy parsing
//! downstream: the broker counts entries against plan limits and forwards the
//! payload verbatim; structural validation of the entries themselves belongs
//! to the schema layer, not here.

use serde::Deserialize;
use serde_json::value::RawValue;

/// User-submitted autoscaling policy.
///
/// Every watched collection is optional; absent (or `null`) means "nothing to
/// check for that field". Unknown fields are tolerated on purpose.
#[derive(Debug, Deserialize)]
pub struct ScalingPolicy {
    /// Baseline instance floor.
    #[serde(default)]
    pub instance_min_count: Option<u32>,
    /// Baseline instance ceiling.
    #[serde(default)]
    pub instance_max_count: Option<u32>,
    /// Optional schedule block (recurring + specific-date).
    #[serde(default)]
    pub schedules: Option<Schedules>,
    /// Optional dynamic scaling rules, stored as raw JSON (lazy parsing).
    #[serde(default)]
    pub scaling_rules: Option<Vec<Box<RawValue>>>,
}

/// Schedule block of a scaling policy.
#[derive(Debug, Deserialize)]
pub struct Schedules {
    /// Olson timezone name the schedules are expressed in.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Recurring (day-of-week/day-of-month) schedule entries.
    #[serde(default)]
    pub recurring_schedule: Option<Vec<Box<RawValue>>>,
    /// One-off date-range schedule entries.
    #[serde(default)]
    pub specific_date: Option<Vec<Box<RawValue>>>,
}

impl ScalingPolicy {
    /// Number of recurring-schedule entries, or `None` when the field is absent.
    pub fn recurring_schedule_len(&self) -> Option<usize> {
        self.schedules
            .as_ref()
            .and_then(|s| s.recurring_schedule.as_ref())
            .map(Vec::len)
    }

    /// Number of specific-date entries, or `None` when the field is absent.
    pub fn specific_date_len(&self) -> Option<usize> {
        self.schedules
            .as_ref()
            .and_then(|s| s.specific_date.as_ref())
            .map(Vec::len)
    }

    /// Number of scaling rules, or `None` when the field is absent.
    pub fn scaling_rules_len(&self) -> Option<usize> {
        self.scaling_rules.as_ref().map(Vec::len)
    }
}
