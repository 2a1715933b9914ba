use syn::{Lit, LitBool};

/// Parsed struct-level `#[attributes(...)]` configuration.
///
/// Both entry points can be renamed with a string value or omitted with
/// `false`; `true` keeps the default.
pub struct StructConfig {
    /// Name of the generated mass-assignment wrapper. `None` omits it.
    pub update: Option<syn::Ident>,
    /// Name of the generated table-export associated fn. `None` omits it.
    pub define: Option<syn::Ident>,
}

impl Default for StructConfig {
    fn default() -> Self {
        Self {
            update: Some(syn::Ident::new(
                "update_attributes",
                proc_macro2::Span::call_site(),
            )),
            define: None,
        }
    }
}

/// Extract `#[attributes(update = ..., define = ...)]` from the struct.
pub fn parse_struct_config(attrs: &[syn::Attribute]) -> syn::Result<StructConfig> {
    let mut config = StructConfig::default();
    for attr in attrs {
        if !attr.path().is_ident("attributes") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("update") {
                config.update = parse_entry_point(&meta, "update_attributes")?;
                Ok(())
            } else if meta.path.is_ident("define") {
                config.define = parse_entry_point(&meta, "define_attributes")?;
                Ok(())
            } else {
                Err(meta.error(
                    "unknown option: expected `update` or `define` in #[attributes(...)]",
                ))
            }
        })?;
    }
    Ok(config)
}

/// Parse one entry-point configuration value: a string renames the method,
/// `false` omits it, `true` keeps the default name.
fn parse_entry_point(
    meta: &syn::meta::ParseNestedMeta<'_>,
    default: &str,
) -> syn::Result<Option<syn::Ident>> {
    let value = meta.value()?;
    let lit: Lit = value.parse()?;
    match &lit {
        Lit::Str(name) => {
            let ident: syn::Ident = name
                .parse()
                .map_err(|_| syn::Error::new_spanned(name, "method name must be an identifier"))?;
            Ok(Some(ident))
        }
        Lit::Bool(LitBool { value: false, .. }) => Ok(None),
        Lit::Bool(LitBool { value: true, .. }) => {
            Ok(Some(syn::Ident::new(default, proc_macro2::Span::call_site())))
        }
        other => Err(syn::Error::new_spanned(
            other,
            "expected a method name string or `false`",
        )),
    }
}

/// One `#[attr]` field, in declaration order.
pub struct AttrField {
    pub name: syn::Ident,
    pub getter: bool,
    pub setter: bool,
    pub query: bool,
    pub transform: Option<syn::Path>,
}

/// Classification of a struct field during the derive walk.
pub enum ParsedField {
    /// Declares an attribute; accessors are generated for it.
    Attr(Box<AttrField>),
    /// The backing `Slots` storage field.
    Slots(syn::Ident),
    /// Untouched by the derive.
    Plain,
}

/// Parse a single field's `#[attr(...)]` / `#[slots]` attributes.
pub fn parse_field(field: &syn::Field) -> syn::Result<ParsedField> {
    let name = field.ident.clone().expect("named field");
    let attr_meta = field.attrs.iter().find(|a| a.path().is_ident("attr"));
    let slots_meta = field.attrs.iter().find(|a| a.path().is_ident("slots"));

    if let Some(slots) = slots_meta {
        if attr_meta.is_some() {
            return Err(syn::Error::new_spanned(
                slots,
                "a field cannot be both #[attr] and #[slots]",
            ));
        }
        return Ok(ParsedField::Slots(name));
    }

    let Some(attr) = attr_meta else {
        return Ok(ParsedField::Plain);
    };

    let mut parsed = AttrField {
        name,
        getter: true,
        setter: true,
        query: false,
        transform: None,
    };

    // bare `#[attr]` keeps the defaults
    if matches!(attr.meta, syn::Meta::Path(_)) {
        return Ok(ParsedField::Attr(Box::new(parsed)));
    }

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("getter") {
            parsed.getter = parse_flag(&meta)?;
            Ok(())
        } else if meta.path.is_ident("setter") {
            parsed.setter = parse_flag(&meta)?;
            Ok(())
        } else if meta.path.is_ident("query") {
            parsed.query = parse_flag(&meta)?;
            Ok(())
        } else if meta.path.is_ident("transform") {
            let value = meta.value()?;
            let path: syn::Path = value.parse()?;
            parsed.transform = Some(path);
            Ok(())
        } else {
            Err(meta.error(
                "unknown option: expected `getter`, `setter`, `query`, or `transform` \
                 in #[attr(...)]",
            ))
        }
    })?;

    Ok(ParsedField::Attr(Box::new(parsed)))
}

/// A bare flag means `true`; `flag = <bool>` sets it explicitly.
fn parse_flag(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<bool> {
    if meta.input.peek(syn::Token![=]) {
        let value = meta.value()?;
        let lit: LitBool = value.parse()?;
        Ok(lit.value)
    } else {
        Ok(true)
    }
}
