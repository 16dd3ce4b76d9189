use crate::domain::task::{Priority, Task};

/// Active view mode, as picked from the filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
    Priority(Priority),
}

impl Filter {
    /// Every selector, in tab order.
    pub const ALL: [Filter; 6] = [
        Filter::All,
        Filter::Active,
        Filter::Completed,
        Filter::Priority(Priority::High),
        Filter::Priority(Priority::Medium),
        Filter::Priority(Priority::Low),
    ];

    /// Parses an external selector string; unknown values fall back to
    /// `All` rather than erroring.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            "high" => Filter::Priority(Priority::High),
            "medium" => Filter::Priority(Priority::Medium),
            "low" => Filter::Priority(Priority::Low),
            _ => Filter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
            Filter::Priority(p) => p.label(),
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
            Filter::Priority(p) => task.priority == p,
        }
    }
}

/// Filters then orders tasks for display: incomplete before completed,
/// then by priority rank within each completion group. The sort is stable,
/// so ties keep the filtered input's relative order.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    visible.sort_by_key(|t| (t.completed, t.priority.rank()));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(text: &str, priority: Priority, completed: bool) -> Task {
        let mut task = Task::new(text, priority);
        task.completed = completed;
        task
    }

    #[test]
    fn unknown_selector_falls_back_to_all() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("Active"), Filter::Active);
        assert_eq!(Filter::parse("high"), Filter::Priority(Priority::High));
        assert_eq!(Filter::parse("done"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
    }

    #[test]
    fn cycling_visits_every_selector_and_wraps() {
        let mut filter = Filter::All;
        for expected in Filter::ALL.iter().skip(1) {
            filter = filter.next();
            assert_eq!(filter, *expected);
        }
        assert_eq!(filter.next(), Filter::All);
    }

    #[test]
    fn active_and_completed_partition_all() {
        let tasks = vec![
            task("a", Priority::High, false),
            task("b", Priority::Medium, true),
            task("c", Priority::Low, false),
            task("d", Priority::Low, true),
        ];

        let all = visible_tasks(&tasks, Filter::All);
        let active = visible_tasks(&tasks, Filter::Active);
        let completed = visible_tasks(&tasks, Filter::Completed);

        assert_eq!(active.len() + completed.len(), all.len());
        assert!(active.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        for t in all {
            let subset = if t.completed { &completed } else { &active };
            assert!(subset.iter().any(|s| s.id == t.id));
        }
    }

    #[test]
    fn priority_filter_keeps_only_that_tier() {
        let tasks = vec![
            task("a", Priority::High, false),
            task("b", Priority::Medium, true),
            task("c", Priority::High, true),
        ];

        let high = visible_tasks(&tasks, Filter::Priority(Priority::High));
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|t| t.priority == Priority::High));
    }

    #[test]
    fn sort_splits_completion_then_ranks_priority() {
        let tasks = vec![
            task("done low", Priority::Low, true),
            task("open low", Priority::Low, false),
            task("done high", Priority::High, true),
            task("open medium", Priority::Medium, false),
            task("open high", Priority::High, false),
        ];

        let visible = visible_tasks(&tasks, Filter::All);
        let texts: Vec<&str> = visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            ["open high", "open medium", "open low", "done high", "done low"]
        );

        for pair in visible.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                !a.completed && b.completed
                    || a.completed == b.completed && a.priority.rank() <= b.priority.rank()
            );
        }
    }

    #[test]
    fn stable_sort_preserves_insertion_order_on_ties() {
        let tasks = vec![
            task("first", Priority::Medium, false),
            task("second", Priority::Medium, false),
            task("third", Priority::Medium, false),
        ];

        let visible = visible_tasks(&tasks, Filter::All);
        let texts: Vec<&str> = visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn sort_applies_to_every_selector() {
        let tasks = vec![
            task("low done", Priority::Low, true),
            task("high done", Priority::High, true),
        ];

        let completed = visible_tasks(&tasks, Filter::Completed);
        let texts: Vec<&str> = completed.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["high done", "low done"]);
    }

    #[test]
    fn high_sorts_before_low_when_both_open() {
        // Collection is newest first: "Call mom" was added after "Buy milk".
        let tasks = vec![
            task("Call mom", Priority::Low, false),
            task("Buy milk", Priority::High, false),
        ];

        let visible = visible_tasks(&tasks, Filter::All);
        let texts: Vec<&str> = visible.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Buy milk", "Call mom"]);
    }
}
