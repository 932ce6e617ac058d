//! Column definitions and the sorted projection of the store.

use crate::task::Task;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Task,
    Submitted,
    Status,
    Assignee,
    Url,
    Submitter,
    Priority,
    DueDate,
    Extract,
    AddNew,
}

impl Column {
    pub const ALL: [Column; 11] = [
        Column::Id,
        Column::Task,
        Column::Submitted,
        Column::Status,
        Column::Assignee,
        Column::Url,
        Column::Submitter,
        Column::Priority,
        Column::DueDate,
        Column::Extract,
        Column::AddNew,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "#",
            Column::Task => "Task Request",
            Column::Submitted => "Submitted",
            Column::Status => "Status",
            Column::Assignee => "Assignee",
            Column::Url => "URL",
            Column::Submitter => "Submitter",
            Column::Priority => "Priority",
            Column::DueDate => "Due Date",
            Column::Extract => "Est",
            Column::AddNew => "",
        }
    }

    fn text(self, task: &Task) -> &str {
        match self {
            Column::Task => &task.task,
            Column::Submitted => &task.submitted,
            Column::Status => &task.status,
            Column::Assignee => &task.assignee,
            Column::Url => &task.url,
            Column::Submitter => &task.submitter,
            Column::Priority => &task.priority,
            Column::DueDate => &task.due_date,
            Column::Id | Column::Extract | Column::AddNew => "",
        }
    }

    /// Numeric columns compare as numbers; everything else byte-wise.
    /// Date strings are not parsed.
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Column::Id => a.id.cmp(&b.id),
            Column::Extract => a.extract.cmp(&b.extract),
            Column::AddNew => Ordering::Equal,
            _ => self.text(a).cmp(self.text(b)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSort {
    pub column: Column,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    entries: Vec<ColumnSort>,
}

impl SortSpec {
    #[cfg(test)]
    pub fn entries(&self) -> &[ColumnSort] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn direction_of(&self, column: Column) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.direction)
    }

    /// Header-click semantics: none -> ascending -> descending -> none.
    /// A different column replaces the current spec.
    pub fn toggle(&mut self, column: Column) {
        let next = match self.direction_of(column) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.entries.clear();
        if let Some(direction) = next {
            self.entries.push(ColumnSort { column, direction });
        }
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.entries.iter().fold(Ordering::Equal, |acc, entry| {
            acc.then_with(|| {
                let ord = entry.column.compare(a, b);
                match entry.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            })
        })
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> SortedView<'a> {
        let mut order: Vec<usize> = (0..tasks.len()).collect();
        // stable: ties stay in insertion order for either direction
        order.sort_by(|&a, &b| self.compare(&tasks[a], &tasks[b]));
        SortedView { tasks, order }
    }
}

/// Rows in display order. Borrowing the store, `iter` can be restarted freely.
#[derive(Debug, Clone)]
pub struct SortedView<'a> {
    tasks: &'a [Task],
    order: Vec<usize>,
}

impl<'a> SortedView<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Task> + '_ {
        let tasks = self.tasks;
        self.order.iter().map(move |&i| &tasks[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_store::TaskStore;
    use rstest::rstest;

    fn ids(view: &SortedView<'_>) -> Vec<u32> {
        view.iter().map(|t| t.id).collect()
    }

    fn seed() -> Vec<Task> {
        TaskStore::initialize().unwrap().tasks().to_vec()
    }

    #[test]
    fn toggle_cycles_through_three_states() {
        let mut spec = SortSpec::default();
        spec.toggle(Column::Id);
        assert_eq!(spec.direction_of(Column::Id), Some(SortDirection::Ascending));
        spec.toggle(Column::Id);
        assert_eq!(spec.direction_of(Column::Id), Some(SortDirection::Descending));
        spec.toggle(Column::Id);
        assert!(spec.is_empty());
    }

    #[test]
    fn other_column_replaces_current_sort() {
        let mut spec = SortSpec::default();
        spec.toggle(Column::Id);
        spec.toggle(Column::Id);
        spec.toggle(Column::Status);
        assert_eq!(
            spec.entries(),
            &[ColumnSort {
                column: Column::Status,
                direction: SortDirection::Ascending
            }]
        );
    }

    #[test]
    fn id_ascending_then_back_to_unsorted() {
        let tasks = seed();
        let mut spec = SortSpec::default();
        spec.toggle(Column::Id);
        assert_eq!(ids(&spec.apply(&tasks)), vec![1, 2, 3, 4, 5]);
        spec.toggle(Column::Id);
        spec.toggle(Column::Id);
        assert_eq!(ids(&spec.apply(&tasks)), vec![1, 2, 3, 4, 5]);
        assert!(spec.is_empty());
    }

    #[rstest]
    #[case(Column::Extract, 2, vec![1, 4, 3, 2, 5])]
    #[case(Column::Extract, 1, vec![5, 2, 3, 4, 1])]
    #[case(Column::Priority, 1, vec![2, 5, 1, 3, 4])]
    #[case(Column::Status, 1, vec![5, 4, 1, 3, 2])]
    #[case(Column::Id, 2, vec![5, 4, 3, 2, 1])]
    fn sorts_by_column_type(
        #[case] column: Column,
        #[case] clicks: usize,
        #[case] expected: Vec<u32>,
    ) {
        let tasks = seed();
        let mut spec = SortSpec::default();
        for _ in 0..clicks {
            spec.toggle(column);
        }
        assert_eq!(ids(&spec.apply(&tasks)), expected);
    }

    #[test]
    fn date_strings_sort_lexicographically() {
        let tasks = seed();
        let mut spec = SortSpec::default();
        spec.toggle(Column::DueDate);
        // "10-12-2024" < "15-01-2024" < "20-11-2024" < "30-01-2024" < "30-10-2024"
        assert_eq!(ids(&spec.apply(&tasks)), vec![3, 4, 1, 5, 2]);
    }

    #[test]
    fn ties_keep_insertion_order_both_ways() {
        let tasks = seed();
        let mut spec = SortSpec::default();
        spec.toggle(Column::AddNew);
        assert_eq!(ids(&spec.apply(&tasks)), vec![1, 2, 3, 4, 5]);
        spec.toggle(Column::AddNew);
        assert_eq!(ids(&spec.apply(&tasks)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn view_is_restartable() {
        let tasks = seed();
        let view = SortSpec::default().apply(&tasks);
        assert_eq!(ids(&view), ids(&view));
        assert_eq!(view.iter().count(), 5);
    }
}
