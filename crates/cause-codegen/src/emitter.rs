//! Rendering of lookup functions and writing them to the output file.

use std::{
    collections::HashSet,
    fs::File,
    io::Write as _,
    path::Path,
    process::{Command, Stdio},
};

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens as _};
use syn::Ident;

use crate::{
    convention::to_snake_case,
    error::GenerateError,
    fields::Indirection,
    mapping::{CauseField, GenerationUnit},
};

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by cause-codegen; DO NOT EDIT.\n";
/// Label returned by per-variant functions for unknown or missing values.
pub const UNKNOWN_CAUSE: &str = "unknown cause";
const UNKNOWN_ERROR: &str = "Unknown error";

fn ident(fragment: &str) -> Result<Ident, GenerateError> {
    syn::parse_str(fragment)
        .map_err(|err| GenerateError::template_parse(fragment, "an identifier", err))
}

/// Identifiers shared by all functions rendered for a unit.
struct Context {
    package: syn::Path,
    struct_ident: Ident,
    struct_snake: String,
    value_field: Ident,
}

impl Context {
    fn new(unit: &GenerationUnit) -> Result<Self, GenerateError> {
        let package_path = format!("{}::{}", unit.import_path, unit.package_name);
        let package = syn::parse_str(&package_path)
            .map_err(|err| GenerateError::template_parse(package_path, "a module path", err))?;
        Ok(Self {
            package,
            struct_ident: ident(&unit.struct_name)?,
            struct_snake: to_snake_case(&unit.struct_name),
            value_field: ident(&unit.value_field)?,
        })
    }

    fn field_fn(&self, field: &CauseField) -> Result<Ident, GenerateError> {
        let name = format!(
            "{}_{}_error_str",
            self.struct_snake,
            to_snake_case(field.variant.plain_name())
        );
        ident(&name)
    }

    /// Parameter of the dispatch function: the struct name in snake case, as a raw identifier
    /// if it is a keyword (e.g., `r#type` for `Type`).
    fn dispatch_param(&self) -> Ident {
        let snake = &self.struct_snake;
        syn::parse_str(snake)
            .or_else(|_| syn::parse_str(&format!("r#{snake}")))
            .unwrap_or_else(|_| Ident::new("value", Span::call_site()))
    }

    /// Checks that no two fields produce the same function or dispatch constant.
    fn check_collisions(&self, unit: &GenerationUnit) -> Result<(), GenerateError> {
        let mut fn_names = HashSet::new();
        let mut present_constants = HashSet::new();
        for field in &unit.fields {
            let fn_name = self.field_fn(field)?;
            let message = if !fn_names.insert(fn_name.to_string()) {
                format!("duplicate function `{fn_name}` for field `{}`", field.variant.name)
            } else if !present_constants.insert(field.present_constant.as_str()) {
                format!(
                    "duplicate discriminant `{}` for field `{}`",
                    field.present_constant, field.variant.name
                )
            } else {
                continue;
            };
            return Err(GenerateError::TemplateExec {
                struct_name: unit.struct_name.clone(),
                source: syn::Error::new(Span::call_site(), message),
            });
        }
        Ok(())
    }

    fn render_field(&self, field: &CauseField) -> Result<TokenStream, GenerateError> {
        let Self {
            package,
            value_field,
            ..
        } = self;
        let fn_name = self.field_fn(field)?;
        let target = ident(&field.variant.target)?;

        if field.mappings.is_empty() {
            let label = format!("{} : {UNKNOWN_ERROR}", field.label);
            return Ok(quote! {
                fn #fn_name(_variant: Option<&#package::#target>) -> &'static str {
                    #label
                }
            });
        }

        let arms = field
            .mappings
            .iter()
            .map(|mapping| {
                let constant = ident(&mapping.constant)?;
                let label = &mapping.label;
                Ok(quote!(#package::#constant => #label,))
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;
        Ok(quote! {
            fn #fn_name(variant: Option<&#package::#target>) -> &'static str {
                let Some(variant) = variant else {
                    return #UNKNOWN_CAUSE;
                };
                match variant.#value_field {
                    #(#arms)*
                    _ => #UNKNOWN_CAUSE,
                }
            }
        })
    }

    fn render_dispatch(&self, unit: &GenerationUnit) -> Result<TokenStream, GenerateError> {
        let Self {
            package,
            struct_ident,
            ..
        } = self;
        let fn_name = ident(&format!("{}_error_str", self.struct_snake))?;
        let param = self.dispatch_param();
        let discriminant = ident(&unit.discriminant_field)?;
        let unknown = format!("unknown {}.{}", unit.package_name, unit.struct_name);

        let arms = unit
            .fields
            .iter()
            .map(|field| {
                let present = ident(&field.present_constant)?;
                let field_fn = self.field_fn(field)?;
                let field_ident = ident(&field.variant.name)?;
                let access = match field.variant.indirection {
                    Indirection::Optional(_) => quote!(#param.#field_ident.as_deref()),
                    Indirection::Direct(_) => quote!(Some(&*#param.#field_ident)),
                };
                Ok(quote!(#package::#present => #field_fn(#access),))
            })
            .collect::<Result<Vec<_>, GenerateError>>()?;

        Ok(quote! {
            pub fn #fn_name(#param: Option<&#package::#struct_ident>) -> &'static str {
                let Some(#param) = #param else {
                    return #unknown;
                };
                match #param.#discriminant {
                    #(#arms)*
                    _ => #unknown,
                }
            }
        })
    }
}

/// Renders lookup functions for `unit`: one function per variant field, in field order,
/// followed by the public dispatch function.
///
/// # Errors
///
/// Returns [`GenerateError::TemplateParse`] if a name from the unit cannot be used as
/// an identifier or path, and [`GenerateError::TemplateExec`] if the rendered code
/// is not a valid Rust file or if several fields map to the same function or discriminant.
pub fn render(unit: &GenerationUnit) -> Result<String, GenerateError> {
    let context = Context::new(unit)?;
    context.check_collisions(unit)?;
    let field_fns = unit
        .fields
        .iter()
        .map(|field| context.render_field(field))
        .collect::<Result<Vec<_>, _>>()?;
    let dispatch = context.render_dispatch(unit)?;

    let tokens = quote! {
        #(#field_fns)*
        #dispatch
    };
    let file: syn::File =
        syn::parse2(tokens).map_err(|err| GenerateError::TemplateExec {
            struct_name: unit.struct_name.clone(),
            source: err,
        })?;
    Ok(format!("{HEADER}{}\n", file.to_token_stream()))
}

/// Creates (or truncates) the file at `path` and writes `contents` to it. The file
/// is closed before returning on every path.
///
/// # Errors
///
/// Returns [`GenerateError::FileCreate`] or [`GenerateError::FileWrite`] on I/O failures.
pub fn write_output(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let mut file = File::create(path).map_err(|err| GenerateError::FileCreate {
        path: path.to_owned(),
        source: err,
    })?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|err| GenerateError::FileWrite {
            path: path.to_owned(),
            source: err,
        })
}

/// Formats the file at `path` in place using `rustfmt` from `PATH`.
///
/// # Errors
///
/// Returns [`GenerateError::Format`] if `rustfmt` cannot be found, cannot be spawned,
/// or exits with a failure.
pub fn format_in_place(path: &Path) -> Result<(), GenerateError> {
    let format_error = |reason: String| GenerateError::Format {
        path: path.to_owned(),
        reason,
    };

    let rustfmt = which::which("rustfmt")
        .map_err(|err| format_error(format!("rustfmt not found on path: {err}")))?;
    let output = Command::new(&rustfmt)
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|err| format_error(format!("cannot spawn `{}`: {err}", rustfmt.display())))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format_error(format!(
            "rustfmt exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    tracing::debug!(path = %path.display(), "Formatted generated file with rustfmt");
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        fields::{Pointer, VariantField},
        mapping::EnumMapping,
    };

    fn cause_field(name: &str, target: &str, mappings: &[&str]) -> CauseField {
        let label = crate::convention::to_upper_camel_case(name);
        CauseField {
            variant: VariantField {
                name: name.to_owned(),
                target: target.to_owned(),
                indirection: Indirection::Optional(Pointer::Box),
            },
            mappings: mappings
                .iter()
                .map(|&value| EnumMapping {
                    constant: format!("{target}Present{value}"),
                    label: format!("{label} : {value}"),
                })
                .collect(),
            present_constant: format!("CausePresent{label}"),
            label,
        }
    }

    fn unit(fields: Vec<CauseField>) -> GenerationUnit {
        GenerationUnit {
            import_path: "ngap".to_owned(),
            package_name: "ngap_type".to_owned(),
            struct_name: "Cause".to_owned(),
            discriminant_field: "present".to_owned(),
            value_field: "value".to_owned(),
            fields,
        }
    }

    fn item_fns(code: &str) -> Vec<syn::ItemFn> {
        let file = syn::parse_file(code).unwrap();
        file.items
            .into_iter()
            .map(|item| match item {
                syn::Item::Fn(item) => item,
                other => panic!("unexpected item: {other:?}"),
            })
            .collect()
    }

    #[test]
    fn rendering_lookup_functions() {
        let unit = unit(vec![
            cause_field("transport", "CauseTransport", &["X", "Y"]),
            cause_field("nas", "CauseNas", &[]),
        ]);
        let code = render(&unit).unwrap();
        assert!(code.starts_with(HEADER), "{code}");

        let fns = item_fns(&code);
        let names: Vec<_> = fns.iter().map(|item| item.sig.ident.to_string()).collect();
        assert_eq!(
            names,
            [
                "cause_transport_error_str",
                "cause_nas_error_str",
                "cause_error_str"
            ]
        );
        assert_matches!(fns[0].vis, syn::Visibility::Inherited);
        assert_matches!(fns[2].vis, syn::Visibility::Public(_));

        assert!(code.contains("ngap :: ngap_type :: CauseTransportPresentX => \"Transport : X\""));
        assert!(code.contains("ngap :: ngap_type :: CauseTransportPresentY => \"Transport : Y\""));
        assert!(code.contains("_ => \"unknown cause\""));
        assert!(code.contains("\"Nas : Unknown error\""));
        assert!(code.contains(
            "ngap :: ngap_type :: CausePresentTransport => cause_transport_error_str (cause . transport . as_deref ())"
        ));
        assert!(code.contains("_ => \"unknown ngap_type.Cause\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let unit = unit(vec![
            cause_field("radio_network", "CauseRadioNetwork", &["Unspecified"]),
            cause_field("misc", "CauseMisc", &["HardwareFailure", "Unspecified"]),
        ]);
        assert_eq!(render(&unit).unwrap(), render(&unit).unwrap());
    }

    #[test]
    fn direct_variants_are_wrapped() {
        let mut field = cause_field("protocol", "CauseProtocol", &["Unspecified"]);
        field.variant.indirection = Indirection::Direct(Pointer::Arc);
        let code = render(&unit(vec![field])).unwrap();
        assert!(
            code.contains("cause_protocol_error_str (Some (& * cause . protocol))"),
            "{code}"
        );
    }

    #[test]
    fn invalid_names_are_template_parse_errors() {
        let mut unit = unit(vec![cause_field("misc", "CauseMisc", &[])]);
        unit.import_path = "not a path".to_owned();
        let err = render(&unit).unwrap_err();
        assert_matches!(
            err,
            GenerateError::TemplateParse { fragment, expected: "a module path", .. }
                if fragment == "not a path::ngap_type"
        );

        let mut field = cause_field("misc", "CauseMisc", &["X"]);
        field.mappings[0].constant = "3Invalid".to_owned();
        let err = render(&self::unit(vec![field])).unwrap_err();
        assert_matches!(
            err,
            GenerateError::TemplateParse { fragment, expected: "an identifier", .. }
                if fragment == "3Invalid"
        );
    }

    #[test]
    fn colliding_fields_are_rejected() {
        let unit = unit(vec![
            cause_field("radio_network", "CauseRadioNetwork", &["Unspecified"]),
            cause_field("RadioNetwork", "CauseRadioNetworkExt", &[]),
        ]);
        let err = render(&unit).unwrap_err();
        assert_matches!(
            &err,
            GenerateError::TemplateExec { struct_name, .. } if struct_name == "Cause"
        );
        let GenerateError::TemplateExec { source, .. } = err else {
            unreachable!();
        };
        assert!(
            source
                .to_string()
                .contains("duplicate function `cause_radio_network_error_str`"),
            "{source}"
        );

        let mut field = cause_field("misc", "CauseMisc", &[]);
        field.present_constant = "CausePresentTransport".to_owned();
        let unit = self::unit(vec![cause_field("transport", "CauseTransport", &[]), field]);
        let err = render(&unit).unwrap_err();
        let GenerateError::TemplateExec { source, .. } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(
            source
                .to_string()
                .contains("duplicate discriminant `CausePresentTransport`"),
            "{source}"
        );
    }

    #[test]
    fn keyword_struct_names_use_raw_parameter() {
        let mut unit = unit(vec![cause_field("misc", "CauseMisc", &["X"])]);
        unit.struct_name = "Type".to_owned();
        let code = render(&unit).unwrap();

        let fns = item_fns(&code);
        assert_eq!(fns[0].sig.ident, "type_misc_error_str");
        assert_eq!(fns[1].sig.ident, "type_error_str");
        assert!(code.contains("r#type : Option < & ngap :: ngap_type :: Type >"), "{code}");
        assert!(code.contains("match r#type . present"), "{code}");
        assert!(code.contains("_ => \"unknown ngap_type.Type\""), "{code}");
    }

    #[test]
    fn writing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rs");
        std::fs::write(&path, "stale contents that are longer than new ones").unwrap();
        write_output(&path, "fn main() {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fn main() {}\n");

        let err = write_output(&dir.path().join("missing/out.rs"), "").unwrap_err();
        assert_matches!(err, GenerateError::FileCreate { .. });
    }
}
