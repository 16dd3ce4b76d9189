use crate::domain::task::{Priority, Task};
use crate::usecase::filter::Filter;

/// Badge counts over the full, unfiltered collection. Completion state and
/// priority tier each partition the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TaskCounts {
    /// The badge value for a filter tab.
    pub fn for_filter(self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
            Filter::Priority(Priority::High) => self.high,
            Filter::Priority(Priority::Medium) => self.medium,
            Filter::Priority(Priority::Low) => self.low,
        }
    }
}

pub fn counts(tasks: &[Task]) -> TaskCounts {
    let mut counts = TaskCounts {
        all: tasks.len(),
        ..TaskCounts::default()
    };
    for task in tasks {
        if task.completed {
            counts.completed += 1;
        } else {
            counts.active += 1;
        }
        match task.priority {
            Priority::High => counts.high += 1,
            Priority::Medium => counts.medium += 1,
            Priority::Low => counts.low += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_counts_zero() {
        assert_eq!(counts(&[]), TaskCounts::default());
    }

    #[test]
    fn one_per_tier_with_medium_completed() {
        let mut tasks = vec![
            Task::new("a", Priority::High),
            Task::new("b", Priority::Medium),
            Task::new("c", Priority::Low),
        ];
        tasks[1].completed = true;

        let counts = counts(&tasks);
        assert_eq!(
            counts,
            TaskCounts {
                all: 3,
                active: 2,
                completed: 1,
                high: 1,
                medium: 1,
                low: 1,
            }
        );
    }

    #[test]
    fn completion_and_priority_partition_the_set() {
        let mut tasks = Vec::new();
        for (i, priority) in [Priority::High, Priority::Low, Priority::Low, Priority::Medium]
            .into_iter()
            .enumerate()
        {
            let mut task = Task::new(format!("t{i}"), priority);
            task.completed = i % 2 == 0;
            tasks.push(task);
        }

        let counts = counts(&tasks);
        assert_eq!(counts.active + counts.completed, counts.all);
        assert_eq!(counts.high + counts.medium + counts.low, counts.all);
    }

    #[test]
    fn badge_lookup_matches_fields() {
        let tasks = vec![
            Task::new("a", Priority::High),
            Task::new("b", Priority::High),
        ];

        let counts = counts(&tasks);
        assert_eq!(counts.for_filter(Filter::All), 2);
        assert_eq!(counts.for_filter(Filter::Active), 2);
        assert_eq!(counts.for_filter(Filter::Completed), 0);
        assert_eq!(counts.for_filter(Filter::Priority(Priority::High)), 2);
        assert_eq!(counts.for_filter(Filter::Priority(Priority::Medium)), 0);
    }
}
