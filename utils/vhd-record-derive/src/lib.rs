//! # Record Derive
//!
//! This crate provides the `Record` derive macro. It turns a plain struct
//! with named fields into a fixed-layout binary record: the field order is
//! the wire order, each field's type selects its width, and attributes
//! supply defaults and mark padding.
//!
//! The generated code refers to the `vhd_record` crate, which re-exports the
//! macro behind its `derive` feature. Use it from there.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Expr, Fields, Ident, Type, parse_macro_input, spanned::Spanned};

/// Derive a fixed-layout binary record from a struct declaration.
///
/// Every named field except the dirty flag becomes one entry of the
/// record's descriptor table, in declaration order. The field type picks
/// the binary width: `u8`, `u16`, `u32`, `u64`, `[u8; N]`, `Option<T>` of
/// those for values only known after a read, and `Padding<N>` for
/// reserved spans.
///
/// Container attributes:
/// - `#[record(endian = big)]` or `#[record(endian = little)]` (default `big`)
/// - `#[record(validate = method)]`: `fn method(&self) -> Result<(), ValidationError>`,
///   run after every successful decode
///
/// Field attributes:
/// - `#[record(default = expr)]`: value used by `Default`; without it the
///   field is computed at read time and starts as `Default::default()`
/// - `#[record(padding)]`: consumed during decode, never surfaced
/// - `#[record(dirty)]`: the `bool` holding the change-tracking flag (exactly one)
///
/// For each named field the macro emits a getter, `set_<field>(&mut self, value) -> &mut Self`
/// and `const with_<field>(mut self, value) -> Self`; both setters mark the record dirty.
///
/// # Example
///
/// ```ignore
/// use vhd_record::{Padding, Record};
///
/// #[derive(Debug, Clone, Copy, Record)]
/// #[record(endian = little)]
/// struct Entry {
///     #[record(default = *b"ENT0")]
///     magic: [u8; 4],
///     length: Option<u32>,
///     #[record(padding)]
///     reserved: Padding<8>,
///     #[record(dirty)]
///     dirty: bool,
/// }
///
/// let mut e = Entry::default();
/// assert!(!e.is_dirty());
/// e.set_length(Some(7));
/// assert!(e.is_dirty());
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct RecordField {
    ident: Ident,
    ty: Type,
    default: Option<Expr>,
    padding: bool,
}

struct ContainerAttrs {
    little_endian: bool,
    validate: Option<Ident>,
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let named = match data {
        Data::Struct(s) => match s.fields {
            Fields::Named(n) => n.named,
            Fields::Unnamed(u) => {
                return Err(syn::Error::new(
                    u.span(),
                    "Record only supports named fields",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new(
                    ident.span(),
                    "Record does not apply to unit structs",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                ident.span(),
                "Record can only be derived for structs",
            ));
        }
    };

    let container = parse_container_attrs(&attrs)?;

    let mut fields = Vec::new();
    let mut dirty: Option<Ident> = None;
    for field in named {
        let Some(fname) = field.ident.clone() else {
            continue;
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.dirty {
            if dirty.is_some() {
                return Err(syn::Error::new(
                    fname.span(),
                    "only one field may be marked #[record(dirty)]",
                ));
            }
            dirty = Some(fname);
            continue;
        }
        if attrs.padding && attrs.default.is_some() {
            return Err(syn::Error::new(
                fname.span(),
                "padding fields cannot declare a default",
            ));
        }
        fields.push(RecordField {
            ident: fname,
            ty: field.ty,
            default: attrs.default,
            padding: attrs.padding,
        });
    }

    let Some(dirty) = dirty else {
        return Err(syn::Error::new(
            ident.span(),
            "Record requires one `bool` field marked #[record(dirty)]",
        ));
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let name_lit = ident.to_string();
    let endianness = if container.little_endian {
        quote!(::vhd_record::Endianness::Little)
    } else {
        quote!(::vhd_record::Endianness::Big)
    };

    let descriptors = fields.iter().map(descriptor_tokens);
    let names = fields
        .iter()
        .filter(|f| !f.padding)
        .map(|f| f.ident.to_string());

    let decode_lets = fields.iter().map(|f| {
        let fname = &f.ident;
        let ty = &f.ty;
        quote! {
            let #fname = <#ty as ::vhd_record::FieldType>::decode(decoder)?;
        }
    });
    let field_idents: Vec<&Ident> = fields.iter().map(|f| &f.ident).collect();

    let validate = container.validate.as_ref().map_or_else(
        || quote!(::core::result::Result::Ok(())),
        |method| quote!(self.#method()),
    );

    let value_entries = fields.iter().filter(|f| !f.padding).map(|f| {
        let fname = &f.ident;
        let ty = &f.ty;
        let lit = fname.to_string();
        quote! {
            (#lit, <#ty as ::vhd_record::FieldType>::to_value(self.#fname))
        }
    });

    let default_inits = fields.iter().map(|f| {
        let fname = &f.ident;
        f.default.as_ref().map_or_else(
            || quote!(#fname: ::core::default::Default::default()),
            |expr| quote!(#fname: #expr),
        )
    });

    let eq_terms: Vec<TokenStream2> = fields
        .iter()
        .filter(|f| !f.padding)
        .map(|f| {
            let fname = &f.ident;
            quote!(self.#fname == other.#fname)
        })
        .collect();
    let eq_body = if eq_terms.is_empty() {
        quote!(true)
    } else {
        quote!(#(#eq_terms)&&*)
    };

    let accessors = fields.iter().filter(|f| !f.padding).map(|f| {
        let fname = &f.ident;
        let ty = &f.ty;
        let set_name = format_ident!("set_{}", fname);
        let with_name = format_ident!("with_{}", fname);
        let get_doc = format!("Current value of `{fname}`.");
        let set_doc = format!("Assign `{fname}` and mark the record dirty.");

        quote! {
            #[doc = #get_doc]
            #[inline]
            #[must_use]
            pub const fn #fname(&self) -> #ty {
                self.#fname
            }

            #[doc = #set_doc]
            #[inline]
            pub const fn #set_name(&mut self, value: #ty) -> &mut Self {
                self.#fname = value;
                self.#dirty = true;
                self
            }

            #[doc = #set_doc]
            #[inline]
            #[must_use]
            pub const fn #with_name(mut self, value: #ty) -> Self {
                self.#fname = value;
                self.#dirty = true;
                self
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::vhd_record::Record for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name_lit;
            const ENDIANNESS: ::vhd_record::Endianness = #endianness;
            const FIELDS: &'static [::vhd_record::FieldDescriptor] = &[#(#descriptors),*];
            const NAMES: &'static [&'static str] = &[#(#names),*];

            fn decode_fields(
                decoder: &mut ::vhd_record::Decoder<'_>,
            ) -> ::vhd_record::Result<Self> {
                #(#decode_lets)*
                ::core::result::Result::Ok(Self {
                    #(#field_idents,)*
                    #dirty: false,
                })
            }

            fn validate(&self) -> ::core::result::Result<(), ::vhd_record::ValidationError> {
                #validate
            }

            fn values(&self) -> ::vhd_record::FieldMap {
                ::vhd_record::FieldMap::from_entries(::std::vec![#(#value_entries),*])
            }

            fn is_dirty(&self) -> bool {
                self.#dirty
            }

            fn mark_clean(&mut self) {
                self.#dirty = false;
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::default::Default for #ident #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#default_inits,)*
                    #dirty: false,
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                #eq_body
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}

        impl #impl_generics #ident #ty_generics #where_clause {
            #(#accessors)*
        }
    })
}

fn descriptor_tokens(field: &RecordField) -> TokenStream2 {
    let ty = &field.ty;
    let name = field.ident.to_string();
    let kind = quote!(<#ty as ::vhd_record::FieldType>::KIND);
    if field.padding {
        return quote!(::vhd_record::FieldDescriptor::padding(#name, #kind));
    }
    field.default.as_ref().map_or_else(
        || quote!(::vhd_record::FieldDescriptor::new(#name, #kind)),
        |expr| {
            quote! {
                ::vhd_record::FieldDescriptor::new(#name, #kind).with_default(
                    || <#ty as ::vhd_record::FieldType>::to_value(#expr)
                )
            }
        },
    )
}

fn parse_container_attrs(attrs: &[syn::Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs {
        little_endian: false,
        validate: None,
    };
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        // Accept #[record(endian = big | little)] and #[record(validate = method)]
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("endian") {
                let order: Ident = meta.value()?.parse()?;
                out.little_endian = match order.to_string().as_str() {
                    "big" => false,
                    "little" => true,
                    _ => return Err(syn::Error::new(order.span(), "expected `big` or `little`")),
                };
                Ok(())
            } else if meta.path.is_ident("validate") {
                out.validate = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute"))
            }
        })?;
    }
    Ok(out)
}

#[derive(Default)]
struct FieldAttrs {
    default: Option<Expr>,
    padding: bool,
    dirty: bool,
}

fn parse_field_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                out.default = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("padding") {
                out.padding = true;
            } else if meta.path.is_ident("dirty") {
                out.dirty = true;
            } else {
                return Err(meta.error("unsupported record field attribute"));
            }
            Ok(())
        })?;
    }
    if out.dirty && (out.padding || out.default.is_some()) {
        return Err(syn::Error::new(
            Span::call_site(),
            "the dirty flag cannot also be padding or carry a default",
        ));
    }
    Ok(out)
}
