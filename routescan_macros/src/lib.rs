//! `#[controller]`: generates a `routescan` type descriptor for an inherent
//! `impl` block.
//!
//! ```rust,ignore
//! #[controller(route = "hisapi/[controller]")]
//! impl HisUserController {
//!     #[http_get]
//!     pub fn list(&self) -> Vec<String> { .. }
//!
//!     #[http_get("{id}")]
//!     pub fn get(&self, id: i32) -> String { .. }
//! }
//! ```
//!
//! Method markers (`route`, `http_get`, `http_post`, `http_put`,
//! `http_delete`) are removed from the emitted code and recorded in source
//! order. Other method attributes, except doc comments, are recorded as
//! `Attribute::Other`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::visit_mut::VisitMut;
use syn::{
    parse_macro_input, FnArg, ImplItem, ImplItemFn, ItemImpl, Lifetime, LitStr, Meta, Type,
    Visibility,
};

const MARKERS: [(&str, &str); 5] = [
    ("route", "Route"),
    ("http_get", "HttpGet"),
    ("http_post", "HttpPost"),
    ("http_put", "HttpPut"),
    ("http_delete", "HttpDelete"),
];

/// Replaces every lifetime with `'static` so parameter types can be named
/// outside the method signature.
struct StaticLifetimes;

impl VisitMut for StaticLifetimes {
    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        *lifetime = Lifetime::new("'static", lifetime.apostrophe);
    }
}

fn attribute_tokens(variant: &str, template: Option<LitStr>) -> TokenStream2 {
    let variant = syn::Ident::new(variant, proc_macro2::Span::call_site());
    let template = match template {
        Some(lit) => quote! {
            ::std::option::Option::Some(::std::string::String::from(#lit))
        },
        None => quote! { ::std::option::Option::None },
    };
    quote! { ::routescan::registry::Attribute::#variant(#template) }
}

/// Collects the descriptor of one method and strips its routing markers.
fn describe_method(method: &mut ImplItemFn) -> syn::Result<TokenStream2> {
    if let Some(param) = method.sig.generics.type_params().next() {
        return Err(syn::Error::new_spanned(
            param,
            "#[controller] cannot describe methods with type parameters",
        ));
    }

    let name = method.sig.ident.to_string();
    let mut attributes = Vec::new();
    let mut kept = Vec::new();

    for attr in method.attrs.drain(..) {
        let marker = MARKERS
            .iter()
            .find(|(ident, _)| attr.path().is_ident(ident))
            .map(|(_, variant)| *variant);
        match marker {
            Some(variant) => {
                let template = match &attr.meta {
                    Meta::Path(_) => None,
                    Meta::List(_) => Some(attr.parse_args::<LitStr>()?),
                    Meta::NameValue(nv) => {
                        return Err(syn::Error::new_spanned(
                            nv,
                            "use #[marker] or #[marker(\"template\")]",
                        ))
                    }
                };
                attributes.push(attribute_tokens(variant, template));
            }
            None => {
                if !attr.path().is_ident("doc") {
                    let path = attr.path().to_token_stream().to_string().replace(' ', "");
                    attributes.push(quote! {
                        ::routescan::registry::Attribute::Other(::std::string::String::from(#path))
                    });
                }
                kept.push(attr);
            }
        }
    }
    method.attrs = kept;

    let mut params = Vec::new();
    for input in &method.sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            if let Type::ImplTrait(_) = &*pat_type.ty {
                return Err(syn::Error::new_spanned(
                    &pat_type.ty,
                    "#[controller] cannot describe `impl Trait` parameters",
                ));
            }
            let mut ty = (*pat_type.ty).clone();
            StaticLifetimes.visit_type_mut(&mut ty);
            params.push(ty);
        }
    }

    let visibility = match method.vis {
        Visibility::Public(_) => quote! { ::routescan::registry::Visibility::Public },
        _ => quote! { ::routescan::registry::Visibility::Private },
    };
    let receiver = if method.sig.receiver().is_some() {
        quote! { ::routescan::registry::Receiver::Instance }
    } else {
        quote! { ::routescan::registry::Receiver::Static }
    };

    Ok(quote! {
        ::routescan::registry::MethodDescriptor::new(#name, full_name)
            #( .with_param(::std::any::type_name::<#params>()) )*
            #( .with_attribute(#attributes) )*
            .with_visibility(#visibility)
            .with_receiver(#receiver)
    })
}

fn expand(route: Option<LitStr>, mut item: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[controller] goes on an inherent impl block",
        ));
    }
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "#[controller] does not support generic controllers",
        ));
    }
    let type_name = match &*item.self_ty {
        Type::Path(p) => p
            .path
            .segments
            .last()
            .map(|seg| seg.ident.to_string())
            .ok_or_else(|| syn::Error::new_spanned(&item.self_ty, "empty type path"))?,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "#[controller] needs a named type",
            ))
        }
    };

    let mut methods = Vec::new();
    for impl_item in &mut item.items {
        if let ImplItem::Fn(method) = impl_item {
            methods.push(describe_method(method)?);
        }
    }

    let type_attribute = route.map(|lit| {
        let attr = attribute_tokens("Route", Some(lit));
        quote! { .with_attribute(#attr) }
    });
    let self_ty = &item.self_ty;

    Ok(quote! {
        #item

        impl ::routescan::registry::Controller for #self_ty {
            fn descriptor() -> ::routescan::registry::TypeDescriptor {
                let full_name = ::std::any::type_name::<Self>();
                ::routescan::registry::TypeDescriptor::controller(#type_name, full_name)
                    #type_attribute
                    #( .with_method(#methods) )*
            }
        }
    })
}

#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut route: Option<LitStr> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("route") {
            route = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported controller property, expected `route`"))
        }
    });
    parse_macro_input!(attr with parser);
    let input = parse_macro_input!(item as ItemImpl);

    match expand(route, input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}
