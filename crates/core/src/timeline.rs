//! Progress timeline builder: converts a date-ordered list of progress
//! updates into milestone-annotated entries.

use serde::Serialize;

use crate::types::{DateOnly, DbId};

/// Minimum percentage jump that flags an update as a milestone.
pub const MILESTONE_JUMP: i32 = 10;

/// One progress update as read from the store, ordered by date ascending.
#[derive(Debug, Clone)]
pub struct ProgressPoint {
    pub id: DbId,
    pub date: DateOnly,
    pub description: String,
    pub progress_percent: i32,
    pub images: Vec<String>,
}

/// A timeline entry: the update plus its change relative to the previous
/// entry and the milestone flag.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub id: DbId,
    pub date: DateOnly,
    pub description: String,
    pub progress_percent: i32,
    pub progress_change: i32,
    pub images: Vec<String>,
    pub is_milestone: bool,
}

/// Build the timeline for updates already ordered by date ascending.
///
/// The first entry has no prior baseline, so its change equals its own
/// percentage. An entry is a milestone when its jump is at least
/// [`MILESTONE_JUMP`] or it reaches 100%.
pub fn build_timeline(updates: Vec<ProgressPoint>) -> Vec<TimelineEntry> {
    let mut previous_percent: Option<i32> = None;
    updates
        .into_iter()
        .map(|update| {
            let progress_change = match previous_percent {
                Some(prev) => update.progress_percent - prev,
                None => update.progress_percent,
            };
            previous_percent = Some(update.progress_percent);
            TimelineEntry {
                is_milestone: progress_change >= MILESTONE_JUMP
                    || update.progress_percent == 100,
                id: update.id,
                date: update.date,
                description: update.description,
                progress_percent: update.progress_percent,
                progress_change,
                images: update.images,
            }
        })
        .collect()
}

/// The milestone subset of a timeline, preserving chronological order.
pub fn milestones(timeline: &[TimelineEntry]) -> Vec<TimelineEntry> {
    timeline
        .iter()
        .filter(|entry| entry.is_milestone)
        .cloned()
        .collect()
}
