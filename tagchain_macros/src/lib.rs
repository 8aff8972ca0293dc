extern crate proc_macro;

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, Error};

struct Attributes {
    name: Option<syn::LitStr>,
}

impl Parse for Attributes {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Attributes { name: None });
        }

        let key: syn::Ident = input.parse()?;
        if key != "name" {
            return Err(Error::new_spanned(
                key,
                "expected `name = \"...\"` or no arguments",
            ));
        }
        input.parse::<syn::Token![=]>()?;

        Ok(Attributes {
            name: Some(input.parse()?),
        })
    }
}

/// Tag of a variant: the value of its `#[tag = "..."]` attribute, or else its identifier.
fn variant_tag(variant: &syn::Variant) -> syn::Result<syn::LitStr> {
    let mut tag = None;
    for attr in variant.attrs.iter().filter(|attr| attr.path.is_ident("tag")) {
        if tag.is_some() {
            return Err(Error::new_spanned(attr, "duplicate `#[tag]` attribute"));
        }
        match attr.parse_meta()? {
            syn::Meta::NameValue(syn::MetaNameValue {
                lit: syn::Lit::Str(lit),
                ..
            }) => tag = Some(lit),
            meta => return Err(Error::new_spanned(meta, "expected `#[tag = \"...\"]`")),
        }
    }

    Ok(tag.unwrap_or_else(|| {
        syn::LitStr::new(&variant.ident.to_string(), variant.ident.span())
    }))
}

/// Transform the input enum into a closed tag family.
///
/// Given an input of the form:
/// ```ignore
/// #[family(name = "A")]
/// pub enum FamilyA {
///     A1,
///     #[tag = "a-two"]
///     A2,
/// }
/// ```
/// this function will generate
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// pub enum FamilyA {
///     A1,
///     A2,
/// }
/// impl ::tagchain::Variant for FamilyA {
///     fn tag(&self) -> &'static str {
///         match self {
///             Self::A1 => "A1",
///             Self::A2 => "a-two",
///         }
///     }
///     fn family(&self) -> &'static str {
///         <Self as ::tagchain::Family>::NAME
///     }
/// }
/// impl ::tagchain::Family for FamilyA {
///     const NAME: &'static str = "A";
///     const CANDIDATES: &'static [Self] = &[Self::A1, Self::A2];
/// }
/// ```
fn family_impl(attr: Attributes, mut item_enum: syn::ItemEnum) -> syn::Result<TokenStream> {
    if !item_enum.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &item_enum.generics,
            "a family enum cannot have generic parameters",
        ));
    }
    if item_enum.variants.is_empty() {
        return Err(Error::new_spanned(
            &item_enum.ident,
            "a family must declare at least one variant",
        ));
    }

    // Variant identifiers and their tags, in declaration order. Candidates are
    // searched in exactly this order.
    let mut variant_idents = Vec::with_capacity(item_enum.variants.len());
    let mut variant_tags = Vec::with_capacity(item_enum.variants.len());
    let mut seen_tags: HashMap<String, syn::Ident> = HashMap::new();

    for variant in item_enum.variants.iter_mut() {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(Error::new_spanned(
                &variant.fields,
                format!("variant `{}` must be a unit variant", variant.ident),
            ));
        }

        let tag = variant_tag(variant)?;
        let tag_value = tag.value();
        if tag_value.is_empty() {
            return Err(Error::new_spanned(tag, "a tag cannot be empty"));
        }
        if let Some(previous) = seen_tags.insert(tag_value.clone(), variant.ident.clone()) {
            return Err(Error::new_spanned(
                tag,
                format!(
                    "duplicate tag \"{}\", already used by variant `{}`",
                    tag_value, previous
                ),
            ));
        }

        variant.attrs.retain(|attr| !attr.path.is_ident("tag"));
        variant_idents.push(variant.ident.clone());
        variant_tags.push(tag);
    }

    let enum_ident = &item_enum.ident;
    let family_name = attr
        .name
        .unwrap_or_else(|| syn::LitStr::new(&enum_ident.to_string(), enum_ident.span()));

    let out = quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #item_enum

        impl ::tagchain::Variant for #enum_ident {
            fn tag(&self) -> &'static str {
                match self {
                    #(Self::#variant_idents => #variant_tags,)*
                }
            }

            fn family(&self) -> &'static str {
                <Self as ::tagchain::Family>::NAME
            }
        }

        impl ::tagchain::Family for #enum_ident {
            const NAME: &'static str = #family_name;
            const CANDIDATES: &'static [Self] = &[#(Self::#variant_idents),*];
        }
    };

    Ok(out)
}

/// Turn an enum of unit variants into a closed family of tagged variants.
///
/// Each variant is tagged with its identifier unless it carries a
/// `#[tag = "..."]` attribute. The family is named after the enum unless
/// `#[family(name = "...")]` is given. The macro derives `Debug`, `Clone`,
/// `Copy`, `PartialEq`, `Eq` and `Hash`, so do not derive those yourself.
#[proc_macro_attribute]
pub fn family(
    attr: proc_macro::TokenStream,
    item_stream: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = syn::parse_macro_input!(attr as Attributes);
    let item = syn::parse_macro_input!(item_stream as syn::ItemEnum);

    family_impl(attr, item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
