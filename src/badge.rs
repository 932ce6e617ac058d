//! Value-to-style mapping for the status and priority badge cells.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Complete,
    InProgress,
    NeedToStart,
    Blocked,
    Other,
}

impl StatusBadge {
    pub fn from_value(status: &str) -> Self {
        match status {
            "complete" => StatusBadge::Complete,
            "in-progress" => StatusBadge::InProgress,
            "need to start" => StatusBadge::NeedToStart,
            "blocked" => StatusBadge::Blocked,
            _ => StatusBadge::Other,
        }
    }

    pub fn style(self) -> Style {
        match self {
            StatusBadge::Complete => Style::default().fg(Color::Green),
            StatusBadge::InProgress => Style::default().fg(Color::Yellow),
            StatusBadge::NeedToStart => Style::default().fg(Color::Blue).bg(Color::DarkGray),
            StatusBadge::Blocked => Style::default().fg(Color::Red),
            StatusBadge::Other => Style::default().fg(Color::Gray),
        }
    }
}

/// Matching is case-sensitive: "low" and "Low" both fall through to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBadge {
    High,
    Medium,
    Other,
}

impl PriorityBadge {
    pub fn from_value(priority: &str) -> Self {
        match priority {
            "High" => PriorityBadge::High,
            "Medium" => PriorityBadge::Medium,
            _ => PriorityBadge::Other,
        }
    }

    pub fn style(self) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        match self {
            PriorityBadge::High => base.fg(Color::Red),
            PriorityBadge::Medium => base.fg(Color::Yellow),
            PriorityBadge::Other => base.fg(Color::Blue),
        }
    }
}
