//! `Reflect` impl generation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Visibility};

use crate::attrs::{ContainerAttrs, FieldTags};

pub fn derive_reflect(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect cannot be derived for generic types",
        ));
    }

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect cannot be derived for enums",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect cannot be derived for unions",
            ));
        }
    };

    let fields = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect requires named fields",
            ));
        }
    };

    let container = ContainerAttrs::from_attrs(&input.attrs)?;
    let ident = &input.ident;
    let name = container.name.unwrap_or_else(|| ident.to_string());

    let mut field_infos = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let field_name = field_ident.unraw().to_string();
        let ty = &field.ty;
        let public = matches!(field.vis, Visibility::Public(_));
        let tags = FieldTags::from_attrs(&field.attrs)?
            .tags
            .into_iter()
            .map(|(key, value)| quote!(.tag(#key, #value)));

        field_infos.push(quote! {
            ::gql_auto::FieldInfo::new(#field_name, <#ty as ::gql_auto::Reflect>::type_info)
                .public(#public)
                #(#tags)*
        });
    }

    let custom = match (container.custom, container.resolver) {
        (true, true) => quote!(.with_custom(::gql_auto::CustomMapping::resolved::<Self>())),
        (true, false) => quote!(.with_custom(::gql_auto::CustomMapping::typed::<Self>())),
        _ => TokenStream::new(),
    };

    Ok(quote! {
        #[automatically_derived]
        impl ::gql_auto::Reflect for #ident {
            fn type_info() -> ::gql_auto::TypeInfo {
                ::gql_auto::TypeInfo::record(#name, ::std::vec![#(#field_infos),*])
                    #custom
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expanded(input: &DeriveInput) -> String {
        derive_reflect(input).unwrap().to_string().replace(' ', "")
    }

    #[test]
    fn test_expands_named_struct() {
        let input: DeriveInput = parse_quote! {
            #[graphql(name = "Human")]
            struct Person {
                #[graphql("!")]
                pub name: String,
                age: u32,
                pub r#type: String,
            }
        };
        let tokens = expanded(&input);
        assert!(tokens.contains("record(\"Human\""));
        assert!(tokens.contains("FieldInfo::new(\"name\""));
        assert!(tokens.contains("FieldInfo::new(\"type\""));
        assert!(tokens.contains(".public(false)"));
        assert!(tokens.contains(".tag(\"graphql\",\"!\")"));
    }

    #[test]
    fn test_custom_mapping() {
        let input: DeriveInput = parse_quote! {
            #[graphql(custom, resolver)]
            struct Money {
                pub cents: i64,
            }
        };
        assert!(expanded(&input).contains("CustomMapping::resolved::<Self>()"));
    }

    #[test]
    fn test_rejects_unsupported_shapes() {
        let inputs: Vec<DeriveInput> = vec![
            parse_quote!(enum Kind { A, B }),
            parse_quote!(struct Pair(i32, i32);),
            parse_quote!(struct Wrapper<T> { pub value: T }),
            parse_quote!(struct Borrowed<'a> { pub value: &'a str }),
        ];
        for input in inputs {
            assert!(derive_reflect(&input).is_err());
        }
    }

    #[test]
    fn test_unit_struct_is_an_empty_record() {
        let input: DeriveInput = parse_quote!(struct Empty;);
        assert!(derive_reflect(&input).is_ok());
    }
}
