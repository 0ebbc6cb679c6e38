//! Status and category enums shared across the data model.
//!
//! Each enum maps 1:1 onto a TEXT column constrained by a CHECK clause in
//! the schema; `as_str` returns the exact stored value and `FromStr`
//! accepts it back. Wire names are the same `snake_case` strings.

use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The exact string stored in the database and sent on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $val ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok(Self::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        concat!("Invalid ", $label, ": {}"),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    ProjectStatus ("project status") {
        Planning = "planning",
        InProgress = "in_progress",
        Completed = "completed",
        OnHold = "on_hold",
        Cancelled = "cancelled",
    }
}

define_status_enum! {
    /// Task lifecycle status.
    TaskStatus ("task status") {
        Pending = "pending",
        InProgress = "in_progress",
        Completed = "completed",
    }
}

define_status_enum! {
    /// Issue lifecycle status. Issues start "open"; transitions happen only
    /// via explicit status updates, never automatically.
    IssueStatus ("issue status") {
        Open = "open",
        InReview = "in_review",
        Resolved = "resolved",
    }
}

define_status_enum! {
    /// Whether a budget line item records planned or incurred spend.
    /// Aggregation must separate by this before summing.
    BudgetType ("budget type") {
        Budgeted = "budgeted",
        Actual = "actual",
    }
}

define_status_enum! {
    /// Which kind of parent a progress update is attached to.
    ParentKind ("parent kind") {
        Project = "project",
        Task = "task",
    }
}
