//! Static chrome around the table: breadcrumbs, toolbar, section header, tabs.

pub const BREADCRUMBS: [&str; 3] = ["Workspace", "Folder 2", "Spreadsheet 3"];
pub const SEARCH_PLACEHOLDER: &str = "Search within sheet";
pub const AVATAR: &str = "JD";
pub const SECTION_TITLE: &str = "Q3 Financial Overview";
pub const SECTION_CHIPS: [&str; 2] = ["ABC Corp", "Answer"];
pub const SECTION_LABEL: &str = "Answer Question";
pub const DRAFT_PLACEHOLDER: &str = "Add a task";

/// Blank rows after the data, the first of which hosts the draft input.
pub const TRAILING_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    AllOrders,
    Pending,
    Reviewed,
    Arrived,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::AllOrders, Tab::Pending, Tab::Reviewed, Tab::Arrived];

    pub fn label(self) -> &'static str {
        match self {
            Tab::AllOrders => "All Orders",
            Tab::Pending => "Pending",
            Tab::Reviewed => "Reviewed",
            Tab::Arrived => "Arrived",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    HideFields,
    Sort,
    Filter,
    CellView,
    Import,
    Export,
    Share,
    NewAction,
}

impl ToolbarAction {
    pub const LEFT: [ToolbarAction; 4] = [
        ToolbarAction::HideFields,
        ToolbarAction::Sort,
        ToolbarAction::Filter,
        ToolbarAction::CellView,
    ];

    pub const RIGHT: [ToolbarAction; 4] = [
        ToolbarAction::Import,
        ToolbarAction::Export,
        ToolbarAction::Share,
        ToolbarAction::NewAction,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::HideFields => "Hide Fields",
            ToolbarAction::Sort => "Sort",
            ToolbarAction::Filter => "Filter",
            ToolbarAction::CellView => "Cell View",
            ToolbarAction::Import => "Import",
            ToolbarAction::Export => "Export",
            ToolbarAction::Share => "Share",
            ToolbarAction::NewAction => "New Action",
        }
    }

    pub fn shortcut(self) -> char {
        match self {
            ToolbarAction::HideFields => 'h',
            ToolbarAction::Sort => 'o',
            ToolbarAction::Filter => 'f',
            ToolbarAction::CellView => 'c',
            ToolbarAction::Import => 'I',
            ToolbarAction::Export => 'E',
            ToolbarAction::Share => 'S',
            ToolbarAction::NewAction => 'n',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::LEFT
            .into_iter()
            .chain(Self::RIGHT)
            .find(|action| action.shortcut() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_start_on_all_orders_and_wrap() {
        assert_eq!(Tab::default(), Tab::AllOrders);
        assert_eq!(Tab::Arrived.next(), Tab::AllOrders);
        assert_eq!(Tab::AllOrders.previous(), Tab::Arrived);
        assert_eq!(Tab::Reviewed.index(), 2);
    }

    #[test]
    fn every_toolbar_action_has_a_unique_shortcut() {
        for action in ToolbarAction::LEFT.into_iter().chain(ToolbarAction::RIGHT) {
            assert_eq!(ToolbarAction::from_shortcut(action.shortcut()), Some(action));
        }
        assert_eq!(ToolbarAction::from_shortcut('z'), None);
    }
}
