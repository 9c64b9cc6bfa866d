//! Harvesting of constant declarations tied to variant types.

use std::path::{Path, PathBuf};

use syn::Item;

use crate::{error::GenerateError, loader::PackageHandle, locator::locate};

/// Top-level constant declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDeclaration {
    /// Constant name.
    pub name: String,
    /// File declaring the constant.
    pub file: PathBuf,
}

/// Collects names of all top-level `const` items in the file declaring `type_name`,
/// in declaration order. Values and type annotations are not inspected.
///
/// An empty result is valid; it means that the variant has no known values.
///
/// # Errors
///
/// Returns [`GenerateError::TypeNotFound`] if `type_name` is not declared in the package.
pub fn harvest(
    package: &PackageHandle,
    type_name: &str,
) -> Result<Vec<ConstantDeclaration>, GenerateError> {
    let declaration = locate(package, type_name)?;
    let file = declaration.file;
    let constants = constants_in(&file.syntax().items, file.path());
    tracing::debug!(
        type_name,
        count = constants.len(),
        "Harvested constants for `{type_name}` from {}",
        file.path().display()
    );
    Ok(constants)
}

fn constants_in(items: &[Item], file: &Path) -> Vec<ConstantDeclaration> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Const(item) => Some(ConstantDeclaration {
                name: item.ident.to_string(),
                file: file.to_owned(),
            }),
            _ => None,
        })
        .collect()
}
