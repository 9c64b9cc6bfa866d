//! Build-time generator of diagnostic lookup functions for discriminated unions.
//!
//! # Overview
//!
//! Protocol type crates generated from ASN.1 definitions (such as NGAP) represent `CHOICE` types
//! as a struct with an integer discriminant and one pointer field per alternative:
//!
//! ```
//! # #![allow(non_upper_case_globals)]
//! pub struct Cause {
//!     pub present: i32,
//!     pub transport: Option<Box<CauseTransport>>,
//!     pub nas: Option<Box<CauseNas>>,
//! }
//!
//! pub const CausePresentTransport: i32 = 1;
//! pub const CausePresentNas: i32 = 2;
//!
//! pub struct CauseTransport {
//!     pub value: i64,
//! }
//!
//! pub const CauseTransportPresentTransportResourceUnavailable: i64 = 0;
//! pub const CauseTransportPresentUnspecified: i64 = 1;
//! # pub struct CauseNas { pub value: i64 }
//! ```
//!
//! This crate reads such declarations from source files and generates functions mapping a union
//! value to a human-readable label, like `"Transport : Unspecified"`. The generated file contains
//! a private function per variant (e.g., `cause_transport_error_str`) and a public dispatch
//! function (`cause_error_str`) taking `Option<&Cause>`.
//!
//! Generation is a linear pipeline; every stage lives in its own module:
//!
//! 1. [`loader`] parses all source files of the package.
//! 2. [`locator`] finds the union struct and variant types.
//! 3. [`fields`] extracts variant fields of the union.
//! 4. [`constants`] harvests constants declared next to each variant type.
//! 5. [`mapping`] turns constants into labels using a [`NamingConvention`].
//! 6. [`emitter`] renders and writes the generated code.
//!
//! # Examples
//!
//! Generating code from a `build.rs` script:
//!
//! ```no_run
//! use cause_codegen::{Generator, GeneratorConfig};
//!
//! # fn main() -> Result<(), cause_codegen::GenerateError> {
//! let out_dir = std::env::var_os("OUT_DIR").unwrap_or_default();
//! let config = GeneratorConfig::new("src/ngap_type")
//!     .with_import_path("crate")
//!     .with_output(std::path::Path::new(&out_dir).join("cause_error_str.rs"));
//! let output = Generator::new(config).run()?;
//! println!("cargo:rerun-if-changed=src/ngap_type");
//! # drop(output);
//! # Ok(())
//! # }
//! ```

// Linter settings.
#![warn(missing_debug_implementations, missing_docs, bare_trait_objects)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::path::PathBuf;

pub use crate::{
    config::{Formatting, GeneratorConfig},
    convention::{NamingConvention, PresentMarker},
    error::{GenerateError, LoadError},
    mapping::{CauseField, EnumMapping, GenerationUnit},
};
use crate::{
    fields::StructType,
    loader::{PackageHandle, PackageSource},
};

mod config;
pub mod constants;
pub mod convention;
pub mod emitter;
mod error;
pub mod fields;
pub mod loader;
pub mod locator;
pub mod mapping;

/// Code generator wiring all pipeline stages together.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    convention: Box<dyn NamingConvention>,
}

impl Generator {
    /// Creates a generator with the default [`PresentMarker`] naming convention.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            convention: Box::<PresentMarker>::default(),
        }
    }

    /// Replaces the naming convention.
    #[must_use]
    pub fn with_convention(mut self, convention: impl NamingConvention + 'static) -> Self {
        self.convention = Box::new(convention);
        self
    }

    /// Returns the configuration of this generator.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the generation unit for the configured struct from an already loaded package.
    ///
    /// # Errors
    ///
    /// Propagates errors from locating the struct and its variant types, and from extracting
    /// variant fields.
    pub fn generation_unit(&self, package: &PackageHandle) -> Result<GenerationUnit, GenerateError> {
        let config = &self.config;
        let declaration = locator::locate(package, &config.struct_name)?;
        let struct_type = StructType::cast(&declaration)?;
        if !struct_type.has_field(&config.discriminant_field) {
            tracing::warn!(
                struct_name = struct_type.name(),
                field = %config.discriminant_field,
                "Struct `{}` has no discriminant field `{}`; generated code will not compile",
                struct_type.name(),
                config.discriminant_field
            );
        }

        let variants = struct_type.variant_fields()?;
        let mut fields = Vec::with_capacity(variants.len());
        for variant in variants {
            let constants = constants::harvest(package, &variant.target)?;
            fields.push(mapping::synthesize(
                self.convention.as_ref(),
                variant,
                &constants,
            ));
        }

        Ok(GenerationUnit {
            import_path: package.import_path().to_owned(),
            package_name: package.name().to_owned(),
            struct_name: struct_type.name().to_owned(),
            discriminant_field: config.discriminant_field.clone(),
            value_field: config.value_field.clone(),
            fields,
        })
    }

    /// Runs the entire pipeline and returns the path of the generated file. The file is not
    /// created if any stage before writing fails.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the pipeline stages fails.
    pub fn run(&self) -> Result<PathBuf, GenerateError> {
        let config = &self.config;
        let source = PackageSource {
            dir: config.source_dir.clone(),
            import_path: config.import_path.clone(),
            name: config.package_name.clone(),
        };
        let package = loader::load(&source).map_err(|err| GenerateError::PackageLoad {
            package: config.package_name.clone(),
            source: err,
        })?;

        let unit = self.generation_unit(&package)?;
        let code = emitter::render(&unit)?;
        let output = config.output();
        emitter::write_output(output, &code)?;
        if config.formatting == Formatting::Rustfmt {
            emitter::format_in_place(output)?;
        }

        tracing::info!(
            output = %output.display(),
            struct_name = %unit.struct_name,
            variants = unit.fields.len(),
            "Generated lookup functions for `{}.{}`",
            unit.package_name,
            unit.struct_name
        );
        Ok(output.to_owned())
    }
}
