
//! Provides `#[derive(Vertex)]`, which is used to define custom types which can be stored in
//! vertex buffers and read from shaders.
//!
//! Every field becomes one vertex attribute. Locations are assigned in field order, unless every
//! field carries a `#[location = N]` attribute.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Field, Fields, Lit, Meta};

#[proc_macro_derive(Vertex, attributes(location))]
pub fn vertex(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impl_vertex(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn get_location(field: &Field) -> syn::Result<Option<usize>> {
    for attribute in field.attrs.iter() {
        if !attribute.path().is_ident("location") {
            continue;
        }

        if let Meta::NameValue(ref pair) = attribute.meta {
            if let Expr::Lit(ExprLit { lit: Lit::Int(ref int), .. }) = pair.value {
                return Ok(Some(int.base10_parse()?));
            }
        }
        return Err(syn::Error::new_spanned(attribute, "Expected #[location = <uint>]"));
    }

    Ok(None)
}

fn impl_vertex(ast: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &ast.ident;

    let fields = match ast.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => &fields.named,
            _ => return Err(syn::Error::new_spanned(ident, "#[derive(Vertex)] is only defined for structs with named fields")),
        },
        _ => return Err(syn::Error::new_spanned(ident, "#[derive(Vertex)] is only defined for structs")),
    };

    if fields.is_empty() {
        return Err(syn::Error::new_spanned(ident, "Can't #[derive(Vertex)] for a struct with no fields"));
    }

    let mut locations = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        locations.push(get_location(field)?);
    }
    let explicit = locations[0].is_some();
    if locations.iter().any(|l| l.is_some() != explicit) {
        return Err(syn::Error::new_spanned(ident, "Either all or no fields can have #[location = <uint>] attributes"));
    }

    let mut setup_attrib_pointers_impl = Vec::with_capacity(fields.len());
    let mut shader_input_impl = Vec::with_capacity(fields.len());

    for (index, (field, location)) in fields.iter().zip(locations.iter()).enumerate() {
        let ty = &field.ty;
        let name = &field.ident;
        let location = location.unwrap_or(index);

        // NB `stride` and `offset` are declared in the final quote! block
        setup_attrib_pointers_impl.push(quote! {
            ::superbible::buffer::AttribBinding {
                index: #location,
                primitives: <#ty as ::superbible::buffer::VertexData>::primitives(),
                primitive_type: <<#ty as ::superbible::buffer::VertexData>::Primitive as ::superbible::buffer::GlPrimitive>::gl_enum(),
                normalized: false,
                integer: <<#ty as ::superbible::buffer::VertexData>::Primitive as ::superbible::buffer::GlPrimitive>::is_integer(),
                stride,
                offset,
            }.enable();

            offset += ::std::mem::size_of::<#ty>();
        });

        shader_input_impl.push(quote! {
            result.push_str(&format!(
                "layout(location = {}) in {} {};\n",
                #location,
                <#ty as ::superbible::buffer::VertexData>::get_glsl_type(),
                stringify!(#name),
            ));
        });
    }

    let field_count = fields.len();
    Ok(quote! {
        #[allow(unused_assignments)]
        impl ::superbible::buffer::Vertex for #ident {
            fn setup_attrib_pointers() {
                let stride = ::std::mem::size_of::<#ident>();
                let mut offset = 0;

                #( #setup_attrib_pointers_impl )*
            }

            fn gen_shader_input_decl() -> String {
                let mut result = String::with_capacity(#field_count * 50);
                #( #shader_input_impl )*
                result
            }
        }
    })
}
