//! CLI generating diagnostic lookup functions for a discriminated union.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cause_codegen::{Formatting, Generator, GeneratorConfig};

/// Generates `<struct>_error_str` lookup functions from Rust type declarations.
#[derive(Debug, Parser)]
#[command(name = "cause-codegen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory with source files of the package declaring the union.
    source_dir: PathBuf,
    /// Path prefix under which generated code refers to the package.
    #[arg(long, default_value = GeneratorConfig::DEFAULT_IMPORT_PATH)]
    import_path: String,
    /// Name of the package (module) declaring the union.
    #[arg(long = "package", default_value = GeneratorConfig::DEFAULT_PACKAGE_NAME)]
    package_name: String,
    /// Name of the discriminated union struct.
    #[arg(long = "struct", default_value = GeneratorConfig::DEFAULT_STRUCT_NAME)]
    struct_name: String,
    /// Name of the discriminant field of the union struct.
    #[arg(long, default_value = GeneratorConfig::DEFAULT_DISCRIMINANT_FIELD)]
    discriminant: String,
    /// Name of the value field in variant types.
    #[arg(long, default_value = GeneratorConfig::DEFAULT_VALUE_FIELD)]
    value_field: String,
    /// Path of the generated file.
    #[arg(short, long, default_value = GeneratorConfig::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Format the generated file with `rustfmt` found on `PATH`.
    #[arg(long)]
    rustfmt: bool,
}

impl From<Args> for GeneratorConfig {
    fn from(args: Args) -> Self {
        let formatting = if args.rustfmt {
            Formatting::Rustfmt
        } else {
            Formatting::Tokens
        };
        GeneratorConfig::new(args.source_dir)
            .with_import_path(args.import_path)
            .with_package_name(args.package_name)
            .with_struct_name(args.struct_name)
            .with_discriminant_field(args.discriminant)
            .with_value_field(args.value_field)
            .with_output(args.output)
            .with_formatting(formatting)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let source_dir = args.source_dir.clone();
    let generator = Generator::new(args.into());
    generator
        .run()
        .with_context(|| format!("cannot generate code from `{}`", source_dir.display()))?;
    Ok(())
}
