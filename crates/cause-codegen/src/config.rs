//! Generator configuration.

use std::path::{Path, PathBuf};

/// Formatting applied to the generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Formatting {
    /// Token stream is written as-is.
    #[default]
    Tokens,
    /// Written file is formatted in place by `rustfmt` found on `PATH`.
    Rustfmt,
}

/// Configuration of a single generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory containing the source files of the analyzed package.
    pub source_dir: PathBuf,
    /// Path prefix under which generated code refers to the package.
    pub import_path: String,
    /// Name of the analyzed package (module).
    pub package_name: String,
    /// Name of the discriminated union struct.
    pub struct_name: String,
    /// Name of the discriminant field of the struct.
    pub discriminant_field: String,
    /// Name of the value field in variant types.
    pub value_field: String,
    /// Path of the generated file.
    pub output: PathBuf,
    /// Formatting of the generated file.
    pub formatting: Formatting,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(Self::DEFAULT_PACKAGE_NAME),
            import_path: Self::DEFAULT_IMPORT_PATH.to_owned(),
            package_name: Self::DEFAULT_PACKAGE_NAME.to_owned(),
            struct_name: Self::DEFAULT_STRUCT_NAME.to_owned(),
            discriminant_field: Self::DEFAULT_DISCRIMINANT_FIELD.to_owned(),
            value_field: Self::DEFAULT_VALUE_FIELD.to_owned(),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            formatting: Formatting::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default import path of the analyzed package.
    pub const DEFAULT_IMPORT_PATH: &'static str = "ngap";
    /// Default package name.
    pub const DEFAULT_PACKAGE_NAME: &'static str = "ngap_type";
    /// Default union struct name.
    pub const DEFAULT_STRUCT_NAME: &'static str = "Cause";
    /// Default discriminant field name.
    pub const DEFAULT_DISCRIMINANT_FIELD: &'static str = "present";
    /// Default value field name.
    pub const DEFAULT_VALUE_FIELD: &'static str = "value";
    /// Default output file name.
    pub const DEFAULT_OUTPUT: &'static str = "cause_error_str.rs";

    /// Creates a default configuration reading the package from `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the import path of the package.
    #[must_use]
    pub fn with_import_path(mut self, import_path: impl Into<String>) -> Self {
        self.import_path = import_path.into();
        self
    }

    /// Sets the package name.
    #[must_use]
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    /// Sets the union struct name.
    #[must_use]
    pub fn with_struct_name(mut self, struct_name: impl Into<String>) -> Self {
        self.struct_name = struct_name.into();
        self
    }

    /// Sets the discriminant field name.
    #[must_use]
    pub fn with_discriminant_field(mut self, field: impl Into<String>) -> Self {
        self.discriminant_field = field.into();
        self
    }

    /// Sets the value field name.
    #[must_use]
    pub fn with_value_field(mut self, field: impl Into<String>) -> Self {
        self.value_field = field.into();
        self
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets output formatting.
    #[must_use]
    pub fn with_formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = formatting;
        self
    }

    /// Path of the generated file.
    pub fn output(&self) -> &Path {
        &self.output
    }
}
