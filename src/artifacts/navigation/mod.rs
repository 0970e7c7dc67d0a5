//! Navigation menu model
//!
//! Keys `1` to `4` are quick links under the home directory. Subdirectories
//! of the working directory are numbered from [`SUBDIRECTORY_OFFSET`].

use std::path::{Path, PathBuf};

pub const SUBDIRECTORY_OFFSET: usize = 5;
pub const MAX_SUBDIRECTORIES: usize = 10;

const QUICK_LINKS: [(&str, &str, &str); 4] = [
    ("1", "~/personal", "personal"),
    ("2", "~/university", "university"),
    ("3", "~/ (Home)", ""),
    ("4", "~/Documents", "Documents"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub key: &'static str,
    pub label: &'static str,
    pub path: PathBuf,
}

pub fn quick_links(home: &Path) -> Vec<QuickLink> {
    QUICK_LINKS
        .into_iter()
        .map(|(key, label, relative)| QuickLink {
            key,
            label,
            path: if relative.is_empty() {
                home.to_path_buf()
            } else {
                home.join(relative)
            },
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationChoice {
    Cancel,
    Parent,
    Custom,
    QuickLink(usize),
    Subdirectory(usize),
    Invalid,
}

impl NavigationChoice {
    pub fn parse(choice: &str) -> Self {
        match choice.trim() {
            "0" => NavigationChoice::Cancel,
            ".." => NavigationChoice::Parent,
            "c" => NavigationChoice::Custom,
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                match digits.parse::<usize>() {
                    Ok(n) if (1..SUBDIRECTORY_OFFSET).contains(&n) => {
                        NavigationChoice::QuickLink(n - 1)
                    }
                    Ok(n) if n >= SUBDIRECTORY_OFFSET => {
                        NavigationChoice::Subdirectory(n - SUBDIRECTORY_OFFSET)
                    }
                    _ => NavigationChoice::Invalid,
                }
            }
            _ => NavigationChoice::Invalid,
        }
    }
}

/// Expands a leading `~` to `home`. Other paths are returned as typed.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (path, Some(home)) if path.starts_with("~/") => home.join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}
