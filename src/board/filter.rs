//! Keyword search over tasks.

use crate::task::domain::Task;

/// Returns the tasks whose title or description contains `keyword`,
/// ignoring case, in their original order.
///
/// A keyword that is empty after trimming matches every task. The result is
/// a view; the tasks themselves are untouched.
///
/// # Examples
///
/// ```
/// use taskboard::board::filter_tasks;
///
/// assert!(filter_tasks(&[], "anything").is_empty());
/// ```
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], keyword: &str) -> Vec<&'a Task> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.iter().collect();
    }
    tasks.iter().filter(|task| task.mentions(&needle)).collect()
}
