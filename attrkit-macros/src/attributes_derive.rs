use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::crate_path::attrkit_core_path;
use crate::derive_parsing::{parse_field, parse_struct_config, AttrField, ParsedField};

pub fn expand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match generate(&input) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let vis = &input.vis;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "#[derive(Attributes)] only works on structs with named fields:\n\
                     \n  #[derive(Attributes, Default)]\n  struct Character {\n      \
                     #[attr] name: Attr,\n      #[slots] slots: Slots,\n  }",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "#[derive(Attributes)] only works on structs — enums and unions are not supported",
            ))
        }
    };

    let config = parse_struct_config(&input.attrs)?;

    let mut attr_fields: Vec<AttrField> = Vec::new();
    let mut slots_field: Option<syn::Ident> = None;

    for field in fields {
        match parse_field(field)? {
            ParsedField::Attr(parsed) => attr_fields.push(*parsed),
            ParsedField::Slots(ident) => {
                if slots_field.is_some() {
                    return Err(syn::Error::new_spanned(
                        field,
                        "only one #[slots] field is allowed",
                    ));
                }
                slots_field = Some(ident);
            }
            ParsedField::Plain => {}
        }
    }

    let Some(slots_field) = slots_field else {
        return Err(syn::Error::new_spanned(
            name,
            "#[derive(Attributes)] requires a #[slots] field to back attribute storage:\n\
             \n  #[derive(Attributes, Default)]\n  struct Character {\n      \
             #[attr] name: Attr,\n      #[slots] slots: Slots,\n  }",
        ))
    };

    let krate = attrkit_core_path();

    // Attribute table, built in declaration order on first use.
    let defines = attr_fields.iter().map(|field| {
        let name_str = field.name.to_string();
        let getter = field.getter;
        let setter = field.setter;
        let query = field.query;
        let options = quote! {
            #krate::AttrOptions { getter: #getter, setter: #setter, query: #query }
        };
        match &field.transform {
            Some(path) => quote! {
                set.define_with(#name_str, #options, #path)
                    .expect("field identifier is a valid attribute name");
            },
            None => quote! {
                set.define(#name_str, #options)
                    .expect("field identifier is a valid attribute name");
            },
        }
    });

    // Concrete accessors, emitted ahead of time from the same flags.
    let accessors = attr_fields.iter().map(|field| {
        let field_name = &field.name;
        let name_str = field.name.to_string();
        let mut methods = TokenStream2::new();

        if field.getter {
            if field.query {
                let is_name = format_ident!("is_{}", field_name);
                methods.extend(quote! {
                    #vis fn #is_name(&self) -> bool {
                        #krate::Attributes::query(self, #name_str)
                            .expect("accessor generated for a defined attribute")
                    }
                });
            } else {
                methods.extend(quote! {
                    #vis fn #field_name(&self) -> #krate::AttrValue {
                        #krate::Attributes::read(self, #name_str)
                            .expect("accessor generated for a defined attribute")
                    }
                });
            }
        }

        if field.setter {
            let set_name = format_ident!("set_{}", field_name);
            methods.extend(quote! {
                #vis fn #set_name(&mut self, value: impl ::std::convert::Into<#krate::AttrValue>) {
                    #krate::Attributes::write(self, #name_str, value)
                        .expect("accessor generated for a defined attribute")
                }
            });
        }

        methods
    });

    let update_method = config.update.map(|method| {
        quote! {
            #vis fn #method<M: #krate::IntoAttrMap>(
                &mut self,
                mapping: M,
            ) -> ::std::result::Result<&mut Self, #krate::AttrError> {
                #krate::Attributes::update_attributes(self, mapping)
            }
        }
    });

    let define_method = config.define.map(|method| {
        quote! {
            /// A copy of this type's attribute table, for runtime extension.
            #vis fn #method() -> #krate::AttributeSet {
                <Self as #krate::Attributes>::attribute_set().clone()
            }
        }
    });

    // Declaring fields hold no data; touch them in a live method so the
    // field-level dead_code lint does not fire on user structs.
    let marker_reads = attr_fields.iter().map(|field| {
        let field_name = &field.name;
        quote! { let _ = &self.#field_name; }
    });

    Ok(quote! {
        impl #krate::Attributes for #name {
            fn attribute_set() -> &'static #krate::AttributeSet {
                static SET: ::std::sync::OnceLock<#krate::AttributeSet> =
                    ::std::sync::OnceLock::new();
                SET.get_or_init(|| {
                    let mut set = #krate::AttributeSet::new();
                    #(#defines)*
                    set
                })
            }

            fn slots(&self) -> &#krate::Slots {
                #(#marker_reads)*
                &self.#slots_field
            }

            fn slots_mut(&mut self) -> &mut #krate::Slots {
                &mut self.#slots_field
            }
        }

        impl #name {
            #(#accessors)*
            #update_method
            #define_method
        }
    })
}
