//! Statistics aggregation: project stats rollups and the shared
//! categorical/monthly breakdown used by document and issue statistics.

use indexmap::IndexMap;
use serde::Serialize;

use crate::status::{BudgetType, IssueStatus, TaskStatus};
use crate::types::DateOnly;

// ---------------------------------------------------------------------------
// Rounding helper
// ---------------------------------------------------------------------------

/// `round(part / total * 100)` as an integer percentage; 0 when `total` is 0.
///
/// Used for task completion rate and issue resolution rate.
pub fn rate_percent(part: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as i64
}

// ---------------------------------------------------------------------------
// Project stats
// ---------------------------------------------------------------------------

/// Per-status task counts plus completion rate for one project.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskBreakdown {
    pub total: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub pending: i64,
    pub completion_rate: i64,
}

/// Count tasks by status and derive the completion rate.
pub fn task_breakdown(statuses: impl IntoIterator<Item = TaskStatus>) -> TaskBreakdown {
    let mut breakdown = TaskBreakdown::default();
    for status in statuses {
        breakdown.total += 1;
        match status {
            TaskStatus::Completed => breakdown.completed += 1,
            TaskStatus::InProgress => breakdown.in_progress += 1,
            TaskStatus::Pending => breakdown.pending += 1,
        }
    }
    breakdown.completion_rate = rate_percent(breakdown.completed, breakdown.total);
    breakdown
}

/// Budgeted vs. actual totals over a project's budget line items.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub budgeted: f64,
    pub actual: f64,
    /// `actual - budgeted`; positive means overspend.
    pub variance: f64,
}

/// Sum budget line items, separated by type before summing.
pub fn budget_totals(items: impl IntoIterator<Item = (BudgetType, f64)>) -> BudgetTotals {
    let mut totals = BudgetTotals::default();
    for (budget_type, amount) in items {
        match budget_type {
            BudgetType::Budgeted => totals.budgeted += amount,
            BudgetType::Actual => totals.actual += amount,
        }
    }
    totals.variance = totals.actual - totals.budgeted;
    totals
}

/// Issue counts by status for one project.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub total: i64,
    pub open: i64,
    pub resolved: i64,
}

/// Count issues by status.
pub fn issue_counts(statuses: impl IntoIterator<Item = IssueStatus>) -> IssueCounts {
    let mut counts = IssueCounts::default();
    for status in statuses {
        counts.total += 1;
        match status {
            IssueStatus::Open => counts.open += 1,
            IssueStatus::Resolved => counts.resolved += 1,
            IssueStatus::InReview => {}
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Breakdown stats (documents, issues)
// ---------------------------------------------------------------------------

/// Categorical and monthly breakdown over a set of entities.
///
/// Both maps preserve first-encountered insertion order, which also fixes
/// the `most_common` tie-break: on equal counts the category seen first in
/// the input wins.
#[derive(Debug, Serialize)]
pub struct BreakdownStats {
    pub total: i64,
    pub by_category: IndexMap<String, i64>,
    pub by_month: IndexMap<String, i64>,
    pub most_common: Option<String>,
}

/// The `YYYY-MM` bucket key for a date.
pub fn month_key(date: DateOnly) -> String {
    date.format("%Y-%m").to_string()
}

/// Group entities by a categorical field and by month.
///
/// `entries` yields `(category, month_key)` pairs; callers derive the month
/// key from whichever date field applies via [`month_key`].
pub fn breakdown(entries: impl IntoIterator<Item = (String, String)>) -> BreakdownStats {
    let mut by_category: IndexMap<String, i64> = IndexMap::new();
    let mut by_month: IndexMap<String, i64> = IndexMap::new();
    let mut total = 0;

    for (category, month) in entries {
        total += 1;
        *by_category.entry(category).or_insert(0) += 1;
        *by_month.entry(month).or_insert(0) += 1;
    }

    // Strict > keeps the first-encountered category on ties.
    let most_common = by_category
        .iter()
        .fold(None::<(&String, i64)>, |best, (category, &count)| {
            match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((category, count)),
            }
        })
        .map(|(category, _)| category.clone());

    BreakdownStats {
        total,
        by_category,
        by_month,
        most_common,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> DateOnly {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- rate_percent --

    #[test]
    fn rate_is_zero_for_empty_total() {
        assert_eq!(rate_percent(0, 0), 0);
    }

    #[test]
    fn rate_rounds_to_nearest_integer() {
        assert_eq!(rate_percent(1, 3), 33);
        assert_eq!(rate_percent(2, 3), 67);
        assert_eq!(rate_percent(1, 2), 50);
    }

    // -- task_breakdown --

    #[test]
    fn task_breakdown_counts_by_status() {
        let breakdown = task_breakdown([
            TaskStatus::Completed,
            TaskStatus::Completed,
            TaskStatus::InProgress,
            TaskStatus::Pending,
        ]);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.completed, 2);
        assert_eq!(breakdown.in_progress, 1);
        assert_eq!(breakdown.pending, 1);
        assert_eq!(breakdown.completion_rate, 50);
    }

    #[test]
    fn task_breakdown_of_no_tasks_has_zero_rate() {
        let breakdown = task_breakdown([]);
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.completion_rate, 0);
    }

    // -- budget_totals --

    #[test]
    fn budget_totals_separate_by_type_before_summing() {
        let totals = budget_totals([
            (BudgetType::Budgeted, 100.0),
            (BudgetType::Actual, 60.0),
            (BudgetType::Budgeted, 50.0),
        ]);
        assert_eq!(totals.budgeted, 150.0);
        assert_eq!(totals.actual, 60.0);
        assert_eq!(totals.variance, -90.0);
    }

    #[test]
    fn positive_variance_means_overspend() {
        let totals = budget_totals([(BudgetType::Budgeted, 40.0), (BudgetType::Actual, 55.0)]);
        assert_eq!(totals.variance, 15.0);
    }

    // -- issue_counts --

    #[test]
    fn issue_counts_track_open_and_resolved() {
        let counts = issue_counts([
            IssueStatus::Open,
            IssueStatus::Open,
            IssueStatus::InReview,
            IssueStatus::Resolved,
        ]);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.open, 2);
        assert_eq!(counts.resolved, 1);
    }

    // -- breakdown --

    #[test]
    fn breakdown_groups_by_category_and_month() {
        let stats = breakdown([
            ("pdf".to_string(), month_key(date(2025, 1, 10))),
            ("image".to_string(), month_key(date(2025, 1, 22))),
            ("pdf".to_string(), month_key(date(2025, 2, 3))),
        ]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_category["pdf"], 2);
        assert_eq!(stats.by_category["image"], 1);
        assert_eq!(stats.by_month["2025-01"], 2);
        assert_eq!(stats.by_month["2025-02"], 1);
        assert_eq!(stats.most_common.as_deref(), Some("pdf"));
    }

    #[test]
    fn most_common_tie_break_is_first_encountered() {
        let stats = breakdown([
            ("image".to_string(), "2025-03".to_string()),
            ("pdf".to_string(), "2025-03".to_string()),
            ("pdf".to_string(), "2025-04".to_string()),
            ("image".to_string(), "2025-04".to_string()),
        ]);
        assert_eq!(stats.most_common.as_deref(), Some("image"));
    }

    #[test]
    fn empty_breakdown_has_no_mode() {
        let stats = breakdown([]);
        assert_eq!(stats.total, 0);
        assert!(stats.most_common.is_none());
    }

    #[test]
    fn month_key_is_zero_padded() {
        assert_eq!(month_key(date(2025, 3, 1)), "2025-03");
        assert_eq!(month_key(date(2025, 11, 30)), "2025-11");
    }
}
