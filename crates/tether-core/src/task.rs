use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A to-do entry as it is kept in memory and in the `todo-tasks` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub links: Vec<String>,

    #[serde(default)]
    pub completed: bool,

    #[serde(with = "iso_date_serde")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: i64, title: String, links: Vec<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            links,
            completed: false,
            created_at,
        }
    }
}

/// Incomplete tasks first, newest (highest id) first within each group.
pub fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.id.cmp(&a.id))
}

pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(display_order);
}

/// Millisecond timestamp of `now`, bumped past the highest id in use.
///
/// When the highest id is `i64::MAX` there is nothing above it, so the
/// largest free id at or below the clock is used instead.
pub fn next_task_id(tasks: &[Task], now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    let highest = match tasks.iter().map(|task| task.id).max() {
        Some(highest) if highest >= candidate => highest,
        _ => return candidate,
    };
    if let Some(next) = highest.checked_add(1) {
        return next;
    }

    warn!(highest, "no task id left above the highest one");
    let used: BTreeSet<i64> = tasks.iter().map(|task| task.id).collect();
    (i64::MIN..=candidate)
        .rev()
        .find(|id| !used.contains(id))
        .unwrap_or(i64::MIN)
}

/// `2024-01-01T00:00:00.000Z` on write; any RFC 3339 timestamp on read.
pub mod iso_date_serde {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
