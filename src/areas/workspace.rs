use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GITIGNORE: &str = ".gitignore";
const DEFAULT_GITIGNORE: &str = "# Python
__pycache__/
*.py[cod]
*$py.class
.venv/
venv/
ENV/

# IDE
.vscode/
.idea/

# OS
.DS_Store
Thumbs.db
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdirectory {
    pub name: String,
    pub path: PathBuf,
    pub is_repository: bool,
}

/// Filesystem view of the session's working directory.
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    /// Visible child directories, sorted by name.
    pub fn list_subdirectories(&self) -> anyhow::Result<Vec<Subdirectory>> {
        let mut subdirectories = Vec::new();

        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .with_context(|| format!("Failed to list directory {}", self.path.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            // follows symlinks, unlike the entry's own file type
            if name.starts_with('.') || !entry.path().is_dir() {
                continue;
            }

            subdirectories.push(Subdirectory {
                is_repository: entry.path().join(".git").is_dir(),
                path: entry.path().to_path_buf(),
                name,
            });
        }

        Ok(subdirectories)
    }

    /// Writes the default ignore file unless one exists. Returns whether it wrote.
    pub fn write_default_gitignore(&self) -> anyhow::Result<bool> {
        let path = self.path.join(GITIGNORE);
        if path.exists() {
            return Ok(false);
        }

        std::fs::write(&path, DEFAULT_GITIGNORE)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        Ok(true)
    }
}
