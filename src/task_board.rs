use crate::error::Result;
use crate::shell::{Tab, ToolbarAction};
use crate::sort::{Column, SortSpec, SortedView};
use crate::task::Task;
use crate::task_store::TaskStore;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// Owns the task store and every piece of view state that acts on it.
#[derive(Debug, Default)]
pub struct TaskBoard {
    store: TaskStore,
    sort: SortSpec,
    active_tab: Tab,
    draft: String,
}

impl TaskBoard {
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(TaskStore::initialize()?))
    }

    pub fn with_store(store: TaskStore) -> Self {
        Self {
            store,
            sort: SortSpec::default(),
            active_tab: Tab::default(),
            draft: String::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Rows as displayed. The active tab is not applied as a filter.
    pub fn rows(&self) -> SortedView<'_> {
        self.sort.apply(self.store.tasks())
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    pub fn toggle_sort(&mut self, column: Column) {
        self.sort.toggle(column);
        debug!(column = column.header(), direction = ?self.sort.direction_of(column), "sort changed");
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        info!(tab = tab.label(), "tab changed");
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[cfg(test)]
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn push_draft(&mut self, ch: char) {
        self.draft.push(ch);
    }

    pub fn pop_draft(&mut self) {
        self.draft.pop();
    }

    /// Commit the draft as a new task dated today.
    pub fn add_task(&mut self) -> Option<u32> {
        self.add_task_on(Local::now().date_naive())
    }

    pub fn add_task_on(&mut self, today: NaiveDate) -> Option<u32> {
        let id = self.store.add_task(&self.draft, today)?.id;
        info!(id, description = %self.draft, "task added");
        self.draft.clear();
        Some(id)
    }

    /// Toolbar buttons only leave a trace.
    pub fn trigger(&self, action: ToolbarAction) {
        info!(action = action.label(), "toolbar action clicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a subscriber that records every event as text.
    fn traced(f: impl FnOnce()) -> String {
        let log = SharedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn board() -> TaskBoard {
        TaskBoard::new().unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn displayed_ids(board: &TaskBoard) -> Vec<u32> {
        board.rows().iter().map(|t| t.id).collect()
    }

    #[test]
    fn starts_with_seed_and_default_view_state() {
        let board = board();
        assert_eq!(board.tasks().len(), 5);
        assert!(board.sort_spec().is_empty());
        assert_eq!(board.active_tab(), Tab::AllOrders);
        assert_eq!(board.draft(), "");
    }

    #[test]
    fn committing_draft_appends_and_clears() {
        let mut board = board();
        board.set_draft("Book venue");
        assert_eq!(board.add_task_on(today()), Some(6));
        assert_eq!(board.draft(), "");
        let last = board.tasks().last().unwrap();
        assert_eq!(last.task, "Book venue");
        assert_eq!(last.submitted, "16-10-2026");
    }

    #[test]
    fn blank_draft_is_a_no_op() {
        let mut board = board();
        board.set_draft("   ");
        assert_eq!(board.add_task_on(today()), None);
        assert_eq!(board.tasks().len(), 5);
        assert_eq!(board.draft(), "   ");
    }

    #[test]
    fn typing_edits_the_draft() {
        let mut board = board();
        for ch in "abc".chars() {
            board.push_draft(ch);
        }
        board.pop_draft();
        assert_eq!(board.draft(), "ab");
    }

    #[test]
    fn new_rows_join_the_sorted_view() {
        let mut board = board();
        board.toggle_sort(Column::Id);
        board.toggle_sort(Column::Id);
        board.set_draft("Newest");
        board.add_task_on(today());
        assert_eq!(displayed_ids(&board), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn tabs_never_filter_rows() {
        let mut board = board();
        board.toggle_sort(Column::Extract);
        let before = displayed_ids(&board);
        for tab in Tab::ALL {
            board.select_tab(tab);
            assert_eq!(board.active_tab().label(), tab.label());
            assert_eq!(displayed_ids(&board), before);
        }
    }

    #[test]
    fn toolbar_actions_leave_state_alone() {
        let board = board();
        for action in ToolbarAction::LEFT.into_iter().chain(ToolbarAction::RIGHT) {
            board.trigger(action);
        }
        assert_eq!(displayed_ids(&board), vec![1, 2, 3, 4, 5]);
        assert_eq!(board.active_tab(), Tab::AllOrders);
    }

    #[test]
    fn added_task_is_traced_with_its_description() {
        let mut board = board();
        board.set_draft("Book venue");
        let log = traced(|| {
            board.add_task_on(today());
        });
        assert!(log.contains("task added"));
        assert!(log.contains("Book venue"));
    }

    #[test]
    fn blank_draft_leaves_no_trace() {
        let mut board = board();
        board.set_draft("  ");
        let log = traced(|| {
            board.add_task_on(today());
        });
        assert!(log.is_empty(), "unexpected output: {log}");
    }

    #[test]
    fn tab_and_toolbar_clicks_are_traced() {
        let mut board = board();
        let log = traced(|| {
            board.select_tab(Tab::Reviewed);
            board.trigger(ToolbarAction::Export);
        });
        assert!(log.contains("tab changed"));
        assert!(log.contains("Reviewed"));
        assert!(log.contains("toolbar action clicked"));
        assert!(log.contains("Export"));
    }
}
