// task/mod.rs — Task entity and timestamp formatting.

use chrono::Local;
use serde::Serialize;

/// A single tracked task.
///
/// Timestamps are minute-resolution local-time strings (`YYYY-MM-DD HH:mm`).
/// `created_at` never changes after creation; `updated_at` is refreshed on
/// every state toggle, so `created_at <= updated_at` always holds
/// (lexicographic order matches chronological order for this format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Done (`true`) / not done (`false`).
    pub state: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Current local time at minute resolution.
pub fn full_date() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}
