//! Locating the cave definition on disk.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const DATA_DIR: &str = "cave_engine/data";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Every directory that may hold the data files, most likely first.
fn candidate_roots() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(DATA_DIR), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join(DATA_DIR));
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(DATA_DIR));
            candidates.push(parent.join("data"));
        }
    }

    // the copy shipped with the crate sources
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
    candidates
}

fn detect_data_root() -> PathBuf {
    candidate_roots()
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_cave_is_found() {
        assert!(data_path("cave.ron").is_file());
    }

    #[test]
    fn workspace_layout_is_probed_first() {
        assert_eq!(candidate_roots()[0], PathBuf::from(DATA_DIR));
    }
}
