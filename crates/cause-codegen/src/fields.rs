//! Struct field extraction and classification of union variant fields.

use std::fmt;

use syn::{GenericArgument, PathArguments, Type, TypePath};

use crate::{
    error::GenerateError,
    locator::{TypeDeclaration, TypeShape},
};

/// Smart pointer providing a single level of indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// `Box<T>`
    Box,
    /// `Rc<T>`
    Rc,
    /// `Arc<T>`
    Arc,
}

impl Pointer {
    fn from_ident(ident: &syn::Ident) -> Option<Self> {
        if ident == "Box" {
            Some(Self::Box)
        } else if ident == "Rc" {
            Some(Self::Rc)
        } else if ident == "Arc" {
            Some(Self::Arc)
        } else {
            None
        }
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Box => "Box",
            Self::Rc => "Rc",
            Self::Arc => "Arc",
        })
    }
}

/// How a variant field refers to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indirection {
    /// Pointer that is always present, e.g. `Box<T>`.
    Direct(Pointer),
    /// Nullable pointer, e.g. `Option<Box<T>>`.
    Optional(Pointer),
}

/// Shape of a declared field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Type referenced by value, e.g. `i32` or `Option<Vec<u8>>`.
    Value,
    /// Single-level indirection to a named type.
    Indirect {
        /// Name of the referenced type.
        target: String,
        /// Kind of indirection.
        indirection: Indirection,
    },
    /// Anything else: references, slices, tuples, pointers to unnamed or generic types.
    Other,
}

impl FieldShape {
    /// Classifies a field type.
    pub fn classify(ty: &Type) -> Self {
        let Type::Path(path) = ty else {
            return Self::Other;
        };
        if let Some(inner) = single_type_argument(path, |ident| ident == "Option") {
            return match pointee(inner) {
                Some((pointer, Some(target))) => Self::Indirect {
                    target,
                    indirection: Indirection::Optional(pointer),
                },
                Some((_, None)) => Self::Other,
                None if matches!(inner, Type::Path(_)) => Self::Value,
                None => Self::Other,
            };
        }
        match pointee(ty) {
            Some((pointer, Some(target))) => Self::Indirect {
                target,
                indirection: Indirection::Direct(pointer),
            },
            Some((_, None)) => Self::Other,
            None => Self::Value,
        }
    }
}

/// Returns the only generic type argument of `path` if its last segment satisfies `pred`.
fn single_type_argument(path: &TypePath, pred: impl Fn(&syn::Ident) -> bool) -> Option<&Type> {
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if !pred(&segment.ident) {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    }
}

/// If `ty` is a smart pointer, returns its kind and the pointee name (if the pointee is
/// a plain named type).
fn pointee(ty: &Type) -> Option<(Pointer, Option<String>)> {
    let Type::Path(path) = ty else {
        return None;
    };
    let pointer = Pointer::from_ident(&path.path.segments.last()?.ident)?;
    let inner = single_type_argument(path, |ident| Pointer::from_ident(ident).is_some())?;
    Some((pointer, named_type(inner)))
}

fn named_type(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1
    {
        return None;
    }
    let segment = &path.path.segments[0];
    matches!(segment.arguments, PathArguments::None).then(|| segment.ident.to_string())
}

/// Named struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as written (may be a raw identifier such as `r#type`).
    pub name: String,
    /// Classified field type.
    pub shape: FieldShape,
}

/// Field referring to another named type through a single indirection. Every such field
/// is treated as a variant of the discriminated union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantField {
    /// Field name as written.
    pub name: String,
    /// Name of the referenced type.
    pub target: String,
    /// Kind of indirection.
    pub indirection: Indirection,
}

impl VariantField {
    /// Field name without the raw identifier prefix.
    pub fn plain_name(&self) -> &str {
        self.name.strip_prefix("r#").unwrap_or(&self.name)
    }
}

/// Struct declaration with its fields in declaration order.
#[derive(Debug, Clone)]
pub struct StructType {
    name: String,
    fields: Vec<Field>,
}

impl StructType {
    /// Casts a declaration to a struct.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::StructCast`] if the declaration is not a non-generic struct
    /// with named fields. Unit structs are accepted as structs without fields.
    pub fn cast(declaration: &TypeDeclaration<'_>) -> Result<Self, GenerateError> {
        let cast_error = |reason| GenerateError::StructCast {
            type_name: declaration.name.clone(),
            reason,
        };

        let item = match declaration.shape {
            TypeShape::Struct(item) => item,
            TypeShape::Enum => return Err(cast_error("type is declared as an enum")),
            TypeShape::Union => return Err(cast_error("type is declared as a union")),
            TypeShape::Alias(_) => return Err(cast_error("type is declared as a type alias")),
        };
        if !item.generics.params.is_empty() {
            return Err(cast_error("generic structs are not supported"));
        }
        let fields = match &item.fields {
            syn::Fields::Named(named) => named
                .named
                .iter()
                .filter_map(|field| {
                    let name = field.ident.as_ref()?.to_string();
                    Some(Field {
                        name,
                        shape: FieldShape::classify(&field.ty),
                    })
                })
                .collect(),
            // Same as `struct Cause {}`
            syn::Fields::Unit => Vec::new(),
            syn::Fields::Unnamed(_) => return Err(cast_error("struct has no named fields")),
        };
        Ok(Self {
            name: declaration.name.clone(),
            fields,
        })
    }

    /// Struct name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All named fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Checks whether the struct declares a field with the specified name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Returns variant fields in declaration order, skipping fields of any other shape.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NoFieldsFound`] if the struct has no variant fields.
    pub fn variant_fields(&self) -> Result<Vec<VariantField>, GenerateError> {
        let mut variants = Vec::new();
        for field in &self.fields {
            match &field.shape {
                FieldShape::Indirect {
                    target,
                    indirection,
                } => variants.push(VariantField {
                    name: field.name.clone(),
                    target: target.clone(),
                    indirection: *indirection,
                }),
                shape => {
                    tracing::debug!(
                        struct_name = %self.name,
                        field = %field.name,
                        ?shape,
                        "Skipping field `{}.{}`: not a pointer to a named type",
                        self.name,
                        field.name
                    );
                }
            }
        }

        if variants.is_empty() {
            return Err(GenerateError::NoFieldsFound {
                struct_name: self.name.clone(),
            });
        }
        Ok(variants)
    }
}
