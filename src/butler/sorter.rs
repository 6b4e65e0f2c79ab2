//! Sorting the files of a folder into per-category subfolders.
//!
//! Only regular files directly inside the folder are touched. Each is classified by
//! extension, a subfolder is created for every category that actually occurs, and the
//! file is moved into it. Subdirectories and ignored names stay where they are.

use crate::error::{ButlerError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Images,
    Documents,
    Videos,
    Other,
}

impl Category {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("jpg" | "png" | "gif") => Category::Images,
            Some("doc" | "docx" | "pdf") => Category::Documents,
            Some("mp4" | "avi" | "mov") => Category::Videos,
            _ => Category::Other,
        }
    }

    pub fn folder_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Videos => "Videos",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

/// File names moved into each category folder.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SortReport {
    pub moved: BTreeMap<Category, Vec<String>>,
}

impl SortReport {
    pub fn file_count(&self) -> usize {
        self.moved.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }
}

pub fn sort_directory(dir: &Path, ignored: &[String]) -> Result<SortReport> {
    if !dir.is_dir() {
        return Err(ButlerError::InvalidPath(dir.to_path_buf()));
    }

    let mut report = SortReport::default();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %entry.path().display(), "skipping file with non UTF-8 name");
            continue;
        };
        if ignored.iter().any(|ignored| ignored == &name) {
            debug!(file = %name, "ignored");
            continue;
        }
        let category = Category::from_path(&entry.path());
        report.moved.entry(category).or_default().push(name);
    }

    for category in report.moved.keys() {
        let target = dir.join(category.folder_name());
        if target.exists() && !target.is_dir() {
            return Err(ButlerError::InvalidPath(target));
        }
    }

    for (category, files) in report.moved.iter_mut() {
        files.sort();
        let target = dir.join(category.folder_name());
        fs::create_dir_all(&target)?;
        for name in files.iter() {
            fs::rename(dir.join(name), target.join(name))?;
        }
        debug!(category = %category, count = files.len(), "moved files");
    }

    Ok(report)
}
