//! Synthesis of constant-to-label mappings and the data model consumed by the emitter.

use crate::{
    constants::ConstantDeclaration, convention::NamingConvention, fields::VariantField,
};

/// Association between an enumerated constant and its diagnostic label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMapping {
    /// Constant name, e.g. `CauseTransportPresentUnspecified`.
    pub constant: String,
    /// Generated label, e.g. `Transport : Unspecified`.
    pub label: String,
}

/// Variant field together with everything needed to emit its lookup function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseField {
    /// Underlying variant field.
    pub variant: VariantField,
    /// Human-readable variant label, e.g. `RadioNetwork`.
    pub label: String,
    /// Known values of the variant; may be empty.
    pub mappings: Vec<EnumMapping>,
    /// Name of the discriminant constant selecting this variant. Not verified to exist.
    pub present_constant: String,
}

/// Complete input of the code emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationUnit {
    /// Path prefix of the package in generated code, e.g. `ngap`.
    pub import_path: String,
    /// Package name, e.g. `ngap_type`.
    pub package_name: String,
    /// Name of the discriminated union struct.
    pub struct_name: String,
    /// Name of the discriminant field, e.g. `present`.
    pub discriminant_field: String,
    /// Name of the value field in variant types, e.g. `value`.
    pub value_field: String,
    /// Variant fields in struct declaration order. Never empty.
    pub fields: Vec<CauseField>,
}

/// Builds a [`CauseField`] for `variant` from the constants harvested for its type.
///
/// Constants for which `convention` returns no label are dropped with a warning.
pub fn synthesize(
    convention: &dyn NamingConvention,
    variant: VariantField,
    constants: &[ConstantDeclaration],
) -> CauseField {
    let label = convention.variant_label(variant.plain_name());
    let present_constant = convention.present_constant(&label);

    let mappings = constants
        .iter()
        .filter_map(|constant| {
            let mapping = convention.mapping_label(&label, &constant.name);
            if mapping.is_none() {
                tracing::warn!(
                    constant = %constant.name,
                    variant = %label,
                    file = %constant.file.display(),
                    "Constant `{}` does not follow the naming convention; dropping it from `{label}` mappings",
                    constant.name
                );
            }
            Some(EnumMapping {
                constant: constant.name.clone(),
                label: mapping?,
            })
        })
        .collect();

    CauseField {
        variant,
        label,
        mappings,
        present_constant,
    }
}
