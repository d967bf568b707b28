//! Proc macros for dapp-kit typed contract interfaces.
//!
//! This crate provides the `#[dapp_kit::contract]` attribute macro for defining
//! type-safe contract interfaces.
//!
//! # Example
//!
//! ```ignore
//! use dapp_kit::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[dapp_kit::contract]
//! pub trait Counter {
//!     #[variant("count")]
//!     fn get_count(&self) -> CountResponse;
//!
//!     #[message]
//!     fn increment(&mut self);
//!
//!     #[message]
//!     fn add(&mut self, args: AddArgs);
//! }
//!
//! #[derive(Deserialize)]
//! pub struct CountResponse {
//!     pub count: u64,
//! }
//!
//! #[derive(Serialize)]
//! pub struct AddArgs {
//!     pub value: u64,
//! }
//! ```
//!
//! # Wire Variants
//!
//! Each method sends `{ "<variant>": <args or {}> }`. The variant defaults to
//! the method name and can be overridden with `#[variant("...")]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    FnArg, Ident, ItemTrait, LitStr, Pat, ReturnType, TraitItem, TraitItemFn, Type,
    parse_macro_input, spanned::Spanned,
};

/// Information about a parsed method.
#[derive(Debug)]
struct MethodInfo {
    name: Ident,
    is_query: bool,
    /// Wire variant (the single top-level key of the payload)
    variant: String,
    arg_name: Option<Ident>,
    arg_type: Option<Type>,
    return_type: Option<Type>,
}

/// Parse a method from a trait item.
fn parse_method(method: &TraitItemFn) -> syn::Result<MethodInfo> {
    let name = method.sig.ident.clone();

    // Check receiver type
    let receiver = method.sig.receiver();
    let (is_query, is_mut) = match receiver {
        Some(recv) => {
            if recv.reference.is_some() {
                (recv.mutability.is_none(), recv.mutability.is_some())
            } else {
                return Err(syn::Error::new(
                    recv.self_token.span,
                    "contract methods must take &self or &mut self",
                ));
            }
        }
        None => {
            return Err(syn::Error::new(
                name.span(),
                "contract methods must have a receiver (&self or &mut self)",
            ));
        }
    };

    // Check for #[message] attribute
    let is_message = match method
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("message"))
    {
        Some(attr) => {
            attr.meta.require_path_only().map_err(|_| {
                syn::Error::new(attr.path().span(), "#[message] does not take any options")
            })?;
            true
        }
        None => false,
    };

    // Check for #[variant("...")] override
    let variant = match method
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("variant"))
    {
        Some(attr) => {
            let lit: LitStr = attr.parse_args()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "variant name must not be empty"));
            }
            lit.value()
        }
        None => name.to_string(),
    };

    // Validate: queries should not have #[message]
    if is_query && is_message {
        return Err(syn::Error::new(
            name.span(),
            "query methods (&self) should not have #[message] attribute",
        ));
    }

    // Validate: messages must have #[message]
    if is_mut && !is_message {
        return Err(syn::Error::new(
            name.span(),
            "message methods (&mut self) must have #[message] attribute",
        ));
    }

    // Parse arguments (excluding self)
    let mut arg_name = None;
    let mut arg_type = None;
    let mut arg_count = 0;

    for arg in &method.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            arg_count += 1;
            if arg_count > 1 {
                return Err(syn::Error::new(
                    pat_type.pat.span(),
                    "contract methods can have at most one argument (use a struct for multiple parameters)",
                ));
            }

            match pat_type.pat.as_ref() {
                Pat::Ident(pat_ident) => arg_name = Some(pat_ident.ident.clone()),
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "contract method arguments must be plain identifiers",
                    ));
                }
            }
            arg_type = Some((*pat_type.ty).clone());
        }
    }

    let return_type = match &method.sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => Some((**ty).clone()),
    };

    // Queries decode their JSON result, so they need a target type
    if is_query && return_type.is_none() {
        return Err(syn::Error::new(
            name.span(),
            "query methods must declare the type their result is decoded into",
        ));
    }

    Ok(MethodInfo {
        name,
        is_query,
        variant,
        arg_name,
        arg_type,
        return_type,
    })
}

/// Generate client method for a query.
fn generate_query_method(method: &MethodInfo) -> TokenStream2 {
    let method_name = &method.name;
    let method_name_str = method_name.to_string();

    let return_type = method
        .return_type
        .as_ref()
        .map(|t| quote! { #t })
        .unwrap_or_else(|| quote! { () });

    if let (Some(arg_name), Some(arg_type)) = (&method.arg_name, &method.arg_type) {
        quote! {
            pub fn #method_name(&self, #arg_name: #arg_type) -> dapp_kit::QueryCall<#return_type> {
                self.client.query::<#return_type>(#method_name_str).params(#arg_name)
            }
        }
    } else {
        quote! {
            pub fn #method_name(&self) -> dapp_kit::QueryCall<#return_type> {
                self.client.query::<#return_type>(#method_name_str)
            }
        }
    }
}

/// Generate client method for a message.
fn generate_message_method(method: &MethodInfo) -> TokenStream2 {
    let method_name = &method.name;
    let method_name_str = method_name.to_string();

    if let (Some(arg_name), Some(arg_type)) = (&method.arg_name, &method.arg_type) {
        quote! {
            pub fn #method_name(&self, #arg_name: #arg_type) -> dapp_kit::ExecuteCall {
                self.client.execute(#method_name_str).params(#arg_name)
            }
        }
    } else {
        quote! {
            pub fn #method_name(&self) -> dapp_kit::ExecuteCall {
                self.client.execute(#method_name_str)
            }
        }
    }
}

/// Generate the definition entry for a method.
fn generate_definition_entry(method: &MethodInfo) -> TokenStream2 {
    let method_name_str = method.name.to_string();
    let variant = &method.variant;
    let register = if method.is_query {
        quote! { query }
    } else {
        quote! { message }
    };

    quote! {
        .#register(#method_name_str, |_, params| {
            dapp_kit::WirePayload::from_params(#variant, params)
        })
    }
}

/// Strip internal attributes from a method for the output trait.
fn strip_internal_attrs(method: &TraitItemFn) -> TraitItemFn {
    let mut method = method.clone();
    method
        .attrs
        .retain(|attr| !attr.path().is_ident("message") && !attr.path().is_ident("variant"));
    method
}

/// The main contract macro implementation.
#[proc_macro_attribute]
pub fn contract(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = TokenStream2::from(attr);
    if !attr.is_empty() {
        return syn::Error::new(attr.span(), "#[contract] does not take any options")
            .to_compile_error()
            .into();
    }
    let input = parse_macro_input!(item as ItemTrait);

    match contract_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn contract_impl(input: ItemTrait) -> syn::Result<TokenStream2> {
    let trait_name = &input.ident;
    let client_name = format_ident!("{}Client", trait_name);
    let vis = &input.vis;

    // Parse all methods
    let mut methods = Vec::new();
    for item in &input.items {
        if let TraitItem::Fn(method) = item {
            methods.push(parse_method(method)?);
        }
    }

    // Generate client methods
    let client_methods: Vec<TokenStream2> = methods
        .iter()
        .map(|m| {
            if m.is_query {
                generate_query_method(m)
            } else {
                generate_message_method(m)
            }
        })
        .collect();

    let definition_entries: Vec<TokenStream2> =
        methods.iter().map(generate_definition_entry).collect();

    // Generate the cleaned trait (without internal attributes)
    let cleaned_items: Vec<TraitItem> = input
        .items
        .iter()
        .map(|item| {
            if let TraitItem::Fn(method) = item {
                TraitItem::Fn(strip_internal_attrs(method))
            } else {
                item.clone()
            }
        })
        .collect();

    let trait_attrs = &input.attrs;
    let trait_supertraits = &input.supertraits;
    let trait_generics = &input.generics;

    let expanded = quote! {
        // The input trait with marker attributes stripped
        #(#trait_attrs)*
        #vis trait #trait_name #trait_generics : #trait_supertraits {
            #(#cleaned_items)*
        }

        // Generated client struct
        #[derive(Clone, Debug)]
        #vis struct #client_name {
            client: dapp_kit::ContractClient,
        }

        impl #client_name {
            /// Wrap a contract client.
            pub fn new(client: dapp_kit::ContractClient) -> Self {
                Self { client }
            }

            /// Get the contract address.
            pub fn address(&self) -> &str {
                self.client.address()
            }

            #(#client_methods)*
        }

        // Implement TypedClient for construction via dapp.typed::<T>()
        impl dapp_kit::TypedClient for #client_name {
            fn from_client(client: dapp_kit::ContractClient) -> Self {
                Self { client }
            }

            fn client(&self) -> &dapp_kit::ContractClient {
                &self.client
            }
        }

        // Implement Contract marker trait
        impl dapp_kit::Contract for dyn #trait_name {
            type Client = #client_name;

            fn definition() -> dapp_kit::ContractDefinition {
                dapp_kit::ContractDefinition::new()
                    #(#definition_entries)*
            }
        }
    };

    Ok(expanded)
}

/// Attribute macro for marking message methods.
///
/// This is used internally by `#[dapp_kit::contract]` traits.
///
/// # Examples
///
/// ```ignore
/// #[message]
/// fn increment(&mut self);
/// ```
#[proc_macro_attribute]
pub fn message(_attr: TokenStream, item: TokenStream) -> TokenStream {
    // This is just a marker attribute - the actual work is done by #[contract]
    item
}

/// Attribute macro for overriding the wire variant of a method.
///
/// # Examples
///
/// ```ignore
/// #[dapp_kit::contract]
/// pub trait Counter {
///     #[variant("count")]  // sends { "count": {} }
///     fn get_count(&self) -> CountResponse;
/// }
/// ```
#[proc_macro_attribute]
pub fn variant(_attr: TokenStream, item: TokenStream) -> TokenStream {
    // This is just a marker attribute - the actual work is done by #[contract]
    item
}
