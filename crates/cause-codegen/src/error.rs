//! Errors produced by the generation pipeline.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure to load a package from its source directory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Package directory or one of its files could not be read.
    #[error("cannot read `{}`", .path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Directory traversal failed.
    #[error("cannot list package directory")]
    Walk(#[from] walkdir::Error),
    /// A source file is not valid Rust.
    #[error("cannot parse `{}` at {line}:{column}", .path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// 1-based line of the parse error.
        line: usize,
        /// 0-based column of the parse error.
        column: usize,
        /// Parser diagnostic.
        #[source]
        source: syn::Error,
    },
    /// The directory contains no Rust source files.
    #[error("no Rust source files found in `{}`", .dir.display())]
    Empty {
        /// Package directory, or the package name for in-memory sources.
        dir: PathBuf,
    },
}

/// Fatal error of a generation run. Every variant names the stage it was raised by.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Package loader could not build a complete view of the package.
    #[error("failed to load package `{package}`")]
    PackageLoad {
        /// Package name as configured.
        package: String,
        /// Cause of the failure.
        #[source]
        source: LoadError,
    },
    /// No top-level declaration with the requested name exists in the package.
    #[error("no type `{type_name}` declared in package `{package}`")]
    TypeNotFound {
        /// Requested type name.
        type_name: String,
        /// Package that was searched.
        package: String,
    },
    /// Located declaration is not a plain struct with named fields.
    #[error("cannot cast type `{type_name}` to a struct: {reason}")]
    StructCast {
        /// Name of the offending type.
        type_name: String,
        /// What the declaration turned out to be.
        reason: &'static str,
    },
    /// Struct declares no fields referencing other types through a pointer.
    #[error("no variant fields found in struct `{struct_name}`")]
    NoFieldsFound {
        /// Name of the struct.
        struct_name: String,
    },
    /// A name collected from declarations cannot be spliced into the template.
    #[error("cannot use `{fragment}` as {expected} in the generated code")]
    TemplateParse {
        /// Offending text.
        fragment: String,
        /// Syntactic element the text was supposed to form.
        expected: &'static str,
        /// Parser diagnostic.
        #[source]
        source: syn::Error,
    },
    /// Rendered template does not form a valid source file.
    #[error("generated code for `{struct_name}` is not valid Rust")]
    TemplateExec {
        /// Name of the struct the code was generated for.
        struct_name: String,
        /// Parser diagnostic.
        #[source]
        source: syn::Error,
    },
    /// Output file could not be created.
    #[error("cannot create output file `{}`", .path.display())]
    FileCreate {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Output file was created, but writing its contents failed.
    #[error("cannot write output file `{}`", .path.display())]
    FileWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// `rustfmt` could not be found or rejected the output file.
    #[error("cannot format `{}`: {reason}", .path.display())]
    Format {
        /// Output path.
        path: PathBuf,
        /// Human-readable reason.
        reason: String,
    },
}

impl GenerateError {
    pub(crate) fn template_parse(
        fragment: impl Into<String>,
        expected: &'static str,
        source: syn::Error,
    ) -> Self {
        Self::TemplateParse {
            fragment: fragment.into(),
            expected,
            source,
        }
    }
}
