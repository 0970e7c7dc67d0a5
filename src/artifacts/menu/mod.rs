//! Menu selections
//!
//! Input tokens map to actions through static lookup tables. Anything not in
//! a table is an invalid choice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    FullSync,
    JustCommit,
    StartNewProject,
    CloneRepository,
    PullChanges,
    ResetChanges,
    ShowStatus,
    Navigate,
    Exit,
}

pub const MENU_ACTIONS: phf::Map<&'static str, MenuAction> = phf::phf_map! {
    "1" => MenuAction::FullSync,
    "2" => MenuAction::JustCommit,
    "3" => MenuAction::StartNewProject,
    "4" => MenuAction::CloneRepository,
    "5" => MenuAction::PullChanges,
    "6" => MenuAction::ResetChanges,
    "7" => MenuAction::ShowStatus,
    "8" => MenuAction::Navigate,
    "0" => MenuAction::Exit,
};

/// Entries in display order.
pub const MENU_ENTRIES: [(&str, &str); 9] = [
    ("1", "🚀 Full sync (add + commit + push)"),
    ("2", "💾 Just commit (add + commit)"),
    ("3", "🆕 Start new project (init + commit)"),
    ("4", "📥 Clone repository"),
    ("5", "🔄 Pull changes"),
    ("6", "↩️  Reset changes"),
    ("7", "📊 Show status"),
    ("8", "📁 Navigate to directory"),
    ("0", "🚪 Exit"),
];

impl MenuAction {
    pub fn parse(choice: &str) -> Option<Self> {
        MENU_ACTIONS.get(choice.trim()).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetChoice {
    HardReset,
    CleanUntracked,
    Both,
    Cancel,
}

pub const RESET_CHOICES: phf::Map<&'static str, ResetChoice> = phf::phf_map! {
    "1" => ResetChoice::HardReset,
    "2" => ResetChoice::CleanUntracked,
    "3" => ResetChoice::Both,
    "0" => ResetChoice::Cancel,
};

pub const RESET_ENTRIES: [(&str, &str); 4] = [
    ("1", "Reset file changes (git reset --hard)"),
    ("2", "Remove untracked files (git clean -fd)"),
    ("3", "Do both"),
    ("0", "Cancel"),
];

impl ResetChoice {
    pub fn parse(choice: &str) -> Option<Self> {
        RESET_CHOICES.get(choice.trim()).copied()
    }
}
