//! Package loading: parses every source file of a package directory into declaration trees.

use std::{
    ffi::OsStr,
    fmt, fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::error::LoadError;

/// Location and naming of a package to load.
#[derive(Debug, Clone)]
pub struct PackageSource {
    /// Directory containing the package source files.
    pub dir: PathBuf,
    /// Path prefix under which generated code refers to the package, e.g. `ngap`.
    pub import_path: String,
    /// Name of the package (i.e., the module holding the declarations), e.g. `ngap_type`.
    pub name: String,
}

/// Parsed source file of a package.
pub struct SourceFile {
    path: PathBuf,
    syntax: syn::File,
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SourceFile")
            .field("path", &self.path)
            .field("items", &self.syntax.items.len())
            .finish()
    }
}

impl SourceFile {
    fn parse(path: PathBuf, text: &str) -> Result<Self, LoadError> {
        match syn::parse_file(text) {
            Ok(syntax) => Ok(Self { path, syntax }),
            Err(source) => {
                let start = source.span().start();
                Err(LoadError::Parse {
                    path,
                    line: start.line,
                    column: start.column,
                    source,
                })
            }
        }
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declaration tree of the file.
    pub fn syntax(&self) -> &syn::File {
        &self.syntax
    }
}

/// Parsed declarations of a single package. Files are kept in a stable (file name) order.
#[derive(Debug)]
pub struct PackageHandle {
    import_path: String,
    name: String,
    files: Vec<SourceFile>,
}

impl PackageHandle {
    /// Builds a package from in-memory sources, given as `(path, text)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the sources is not valid Rust, or if there are no sources.
    /// In the latter case, [`LoadError::Empty`] names the package instead of a directory.
    pub fn from_sources<I>(
        import_path: impl Into<String>,
        name: impl Into<String>,
        sources: I,
    ) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (PathBuf, String)>,
    {
        let name = name.into();
        let files = sources
            .into_iter()
            .map(|(path, text)| SourceFile::parse(path, &text))
            .collect::<Result<Vec<_>, _>>()?;
        if files.is_empty() {
            return Err(LoadError::Empty {
                dir: PathBuf::from(name),
            });
        }
        Ok(Self {
            import_path: import_path.into(),
            name,
            files,
        })
    }

    /// Path prefix of the package in generated code.
    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed files in iteration order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }
}

/// Loads all `*.rs` files located directly in the package directory.
///
/// # Errors
///
/// Fails if the directory cannot be read, contains no Rust sources, or if any source
/// fails to parse. Partially loaded packages are never returned.
pub fn load(source: &PackageSource) -> Result<PackageHandle, LoadError> {
    let dir = &source.dir;
    fs::metadata(dir).map_err(|err| LoadError::Io {
        path: dir.clone(),
        source: err,
    })?;

    let mut sources = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(OsStr::to_str) != Some("rs")
        {
            continue;
        }
        let text = fs::read_to_string(path).map_err(|err| LoadError::Io {
            path: path.to_owned(),
            source: err,
        })?;
        sources.push((path.to_owned(), text));
    }

    if sources.is_empty() {
        return Err(LoadError::Empty { dir: dir.clone() });
    }
    let package = PackageHandle::from_sources(&source.import_path, &source.name, sources)?;
    tracing::info!(
        package = package.name(),
        files = package.files().len(),
        "Loaded package `{}` from {}",
        package.name(),
        dir.display()
    );
    Ok(package)
}
