//! # Static Assets
//!
//! Scale images for the manikin dimensions and the application icon.
//!
//! Assets are looked up by file name under an assets directory. A missing
//! file never fails the flow: it resolves to a textual placeholder that the
//! presentation layer shows instead of the image.

use std::path::{Path, PathBuf};

/// Default assets directory, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "Sources";

/// File name of the application icon.
pub const APP_ICON: &str = "logo.ico";

/// Outcome of resolving an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// The file exists at this path.
    Found(PathBuf),
    /// The file is missing; show this text instead.
    Missing(String),
}

impl Asset {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// What a text-only front end prints for this asset.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Found(path) => format!("[Imagen: {}]", path.display()),
            Self::Missing(placeholder) => placeholder.clone(),
        }
    }
}

/// Resolves asset file names against a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    root: PathBuf,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS_DIR)
    }
}

impl AssetCatalog {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a file name, degrading to a placeholder when it is absent.
    #[must_use]
    pub fn resolve(&self, file_name: &str) -> Asset {
        let path = self.root.join(file_name);
        if path.is_file() {
            Asset::Found(path)
        } else {
            Asset::Missing(placeholder(file_name))
        }
    }

    /// Resolve the application icon.
    #[must_use]
    pub fn icon(&self) -> Asset {
        self.resolve(APP_ICON)
    }
}

/// Placeholder text for a missing asset.
#[must_use]
pub fn placeholder(file_name: &str) -> String {
    format!("[Falta imagen: {file_name}]")
}
