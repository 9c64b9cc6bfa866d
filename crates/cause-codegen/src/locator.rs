//! Lookup of top-level type declarations in a loaded package.

use syn::{Item, ItemStruct, Type};

use crate::{
    error::GenerateError,
    loader::{PackageHandle, SourceFile},
};

/// Underlying type expression of a declaration.
#[derive(Debug, Clone, Copy)]
pub enum TypeShape<'a> {
    /// `struct` declaration.
    Struct(&'a ItemStruct),
    /// `enum` declaration.
    Enum,
    /// `union` declaration.
    Union,
    /// `type` alias together with the aliased type.
    Alias(&'a Type),
}

/// Type declaration located in one of the package files.
#[derive(Debug, Clone)]
pub struct TypeDeclaration<'a> {
    /// Declared type name.
    pub name: String,
    /// File containing the declaration.
    pub file: &'a SourceFile,
    /// Underlying type.
    pub shape: TypeShape<'a>,
}

fn declared_type(item: &Item) -> Option<(&syn::Ident, TypeShape<'_>)> {
    match item {
        Item::Struct(item) => Some((&item.ident, TypeShape::Struct(item))),
        Item::Enum(item) => Some((&item.ident, TypeShape::Enum)),
        Item::Union(item) => Some((&item.ident, TypeShape::Union)),
        Item::Type(item) => Some((&item.ident, TypeShape::Alias(&item.ty))),
        _ => None,
    }
}

/// Returns the first top-level declaration of `type_name`, scanning files in package order.
///
/// # Errors
///
/// Returns [`GenerateError::TypeNotFound`] if no file declares the type.
pub fn locate<'a>(
    package: &'a PackageHandle,
    type_name: &str,
) -> Result<TypeDeclaration<'a>, GenerateError> {
    let found = package.files().iter().find_map(|file| {
        file.syntax().items.iter().find_map(|item| {
            let (ident, shape) = declared_type(item)?;
            (ident == type_name).then_some((file, shape))
        })
    });

    let Some((file, shape)) = found else {
        return Err(GenerateError::TypeNotFound {
            type_name: type_name.to_owned(),
            package: package.name().to_owned(),
        });
    };
    tracing::debug!(
        type_name,
        file = %file.path().display(),
        "Located declaration of `{type_name}`"
    );
    Ok(TypeDeclaration {
        name: type_name.to_owned(),
        file,
        shape,
    })
}
