//! Output folder computation.
//!
//! Pure string/path construction: nothing here touches the filesystem, so
//! every function can be unit tested without I/O.

use std::path::{Path, PathBuf};

/// Computes where generated api and model files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    output_folder: PathBuf,
    source_folder: Option<String>,
    api_package: String,
    model_package: String,
}

impl PathResolver {
    pub fn new(
        output_folder: impl Into<PathBuf>,
        source_folder: Option<String>,
        api_package: impl Into<String>,
        model_package: impl Into<String>,
    ) -> Self {
        Self {
            output_folder: output_folder.into(),
            source_folder,
            api_package: api_package.into(),
            model_package: model_package.into(),
        }
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    pub fn source_folder(&self) -> Option<&str> {
        self.source_folder.as_deref()
    }

    pub fn api_package(&self) -> &str {
        &self.api_package
    }

    pub fn model_package(&self) -> &str {
        &self.model_package
    }

    /// Folder for generated api files.
    pub fn api_file_folder(&self) -> PathBuf {
        self.package_folder(&self.api_package)
    }

    /// Folder for generated model files.
    pub fn model_file_folder(&self) -> PathBuf {
        self.package_folder(&self.model_package)
    }

    /// Destination of a supporting file under the output folder.
    pub fn supporting_file_path(&self, folder: &str, filename: &str) -> PathBuf {
        let mut path = self.output_folder.clone();
        path.extend(relative_segments(folder));
        path.extend(relative_segments(filename));
        path
    }

    /// `output[/source]/seg1/seg2/...` for a `.`-separated package.
    fn package_folder(&self, package: &str) -> PathBuf {
        let mut path = self.output_folder.clone();
        if let Some(source) = &self.source_folder {
            path.extend(relative_segments(source));
        }
        path.extend(package.split('.').filter(|s| !s.is_empty()));
        path
    }
}

/// Path segments of `folder` that stay below the folder they are joined to.
///
/// Roots, prefixes, `.` and `..` are dropped, so an absolute or escaping
/// folder can never replace or leave the output folder.
fn relative_segments(folder: &str) -> impl Iterator<Item = &str> {
    folder
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != "." && *s != ".." && !s.contains(':'))
}
