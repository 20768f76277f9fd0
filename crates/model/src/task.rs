//! The Task type and task sorting.
//!
//! Tasks are the only user-created records in the portal. Their date fields
//! are serialized as RFC 3339 strings so a persisted task list can be revived
//! losslessly on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::TaskId;

/// A user-created to-do item with an optional completion timestamp.
///
/// `date_finished` doubles as the completion flag: `Some(_)` means done.
/// Field names stay camelCase at rest so a snapshot written by an earlier
/// portal build loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_finished: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_finished(&self) -> bool {
        self.date_finished.is_some()
    }
}

/// A partial update for a task's editable fields.
///
/// `None` leaves the field unchanged. The completion timestamp is not part
/// of the patch; it is flipped through its own store operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    /// `Some("")` clears the description.
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

// =============================================================================
// Sorting
// =============================================================================

/// Which task column to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSortKey {
    Name,
    #[default]
    Date,
    DateFinished,
}

impl std::str::FromStr for TaskSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(TaskSortKey::Name),
            "date" => Ok(TaskSortKey::Date),
            "finished" | "date-finished" => Ok(TaskSortKey::DateFinished),
            other => Err(format!(
                "unknown sort key '{other}', expected 'name', 'date', or 'finished'"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort tasks in place by the given key and direction.
///
/// Names compare case-insensitively. When sorting by completion date,
/// unfinished tasks compare greater than every finished one, so ascending
/// order lists all finished tasks first.
pub fn sort_tasks(tasks: &mut [Task], key: TaskSortKey, direction: SortDirection) {
    tasks.sort_by(|a, b| {
        let ordering = match key {
            TaskSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            TaskSortKey::Date => a.date.cmp(&b.date),
            TaskSortKey::DateFinished => match (a.date_finished, b.date_finished) {
                (None, None) => std::cmp::Ordering::Equal,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (Some(_), None) => std::cmp::Ordering::Less,
                (Some(x), Some(y)) => x.cmp(&y),
            },
        };

        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
