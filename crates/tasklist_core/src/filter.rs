use crate::model::Task;
use serde::{Deserialize, Serialize};

/// Coarse view selection applied when no search is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Active,
    Completed,
    All,
}

/// The two mutually exclusive viewing states. In search mode the tab
/// selection is ignored entirely, not merely disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Tab(Tab),
    Search(String),
}

/// Derives the viewing state from the trimmed search text: non-empty text
/// means search mode, anything else (including whitespace-only input)
/// falls back to the tab.
pub fn view_mode(tab: Tab, search_text: &str) -> ViewMode {
    let trimmed = search_text.trim();
    if trimmed.is_empty() {
        ViewMode::Tab(tab)
    } else {
        ViewMode::Search(trimmed.to_string())
    }
}

/// Ordered subsequence of tasks to display for the given tab and search
/// text. Pure: never mutates the collection, preserves insertion order,
/// and identical inputs always yield identical output.
pub fn visible_tasks(tasks: &[Task], tab: Tab, search_text: &str) -> Vec<Task> {
    match view_mode(tab, search_text) {
        ViewMode::Search(query) => search_matches(tasks, &query),
        ViewMode::Tab(tab) => tab_matches(tasks, tab),
    }
}

fn tab_matches(tasks: &[Task], tab: Tab) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match tab {
            Tab::Active => !task.completed,
            Tab::Completed => task.completed,
            Tab::All => true,
        })
        .cloned()
        .collect()
}

fn search_matches(tasks: &[Task], query: &str) -> Vec<Task> {
    if is_date_query(query) {
        let wanted = normalize_date(query);
        tasks
            .iter()
            .filter(|task| normalize_date(&task.created_date) == wanted)
            .cloned()
            .collect()
    } else {
        let needle = query.to_lowercase();
        tasks
            .iter()
            .filter(|task| task.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

/// Recognizes queries shaped like a locale date: one-or-two digits, a
/// slash, one-or-two digits, a slash, four digits. Anything else (partial
/// dates included) is treated as a text query.
fn is_date_query(query: &str) -> bool {
    let parts: Vec<&str> = query.split('/').collect();
    if parts.len() != 3 {
        return false;
    }

    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit());
    all_digits(parts[0])
        && all_digits(parts[1])
        && all_digits(parts[2])
        && parts[0].len() <= 2
        && parts[1].len() <= 2
        && parts[2].len() == 4
}

/// Strips leading zeros from each slash component so `"11/09/2025"` and
/// `"11/9/2025"` compare equal. An all-zero component collapses to `"0"`.
fn normalize_date(value: &str) -> String {
    value
        .split('/')
        .map(|part| {
            let stripped = part.trim_start_matches('0');
            if stripped.is_empty() { "0" } else { stripped }
        })
        .collect::<Vec<_>>()
        .join("/")
}
