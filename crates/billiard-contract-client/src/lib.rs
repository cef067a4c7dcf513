//! Generates typed clients for deployed contracts from a snapshot of their
//! Rust interface.
//!
//! The input is the contract source as a string: one struct and the `impl`
//! block holding its entry points. For a struct `Billiard` the macro emits a
//! `BilliardClient` wrapping a `billiard_rs::ContractHandle`, with one async
//! method per entry point that converts each argument with
//! `billiard_rs::IntoScVal` and submits the call.
//!
//! ```ignore
//! billiard_contract_client::contract_client!(r#"
//!     pub struct Billiard;
//!
//!     impl Billiard {
//!         pub fn init(env: Env, x: u64, y: u64) {}
//!     }
//! "#);
//! ```
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{File, FnArg, ImplItem, ImplItemFn, Item, Pat, Type, Visibility, parse_macro_input};

#[proc_macro]
pub fn contract_client(input: TokenStream) -> TokenStream {
    let source = parse_macro_input!(input as syn::LitStr);

    let file_ast: File = match syn::parse_str(&source.value()) {
        Ok(file) => file,
        Err(e) => return syn::Error::new(source.span(), e).to_compile_error().into(),
    };

    match expand(file_ast) {
        Ok(tokens) => tokens.into(),
        Err(e) => syn::Error::new(source.span(), e).to_compile_error().into(),
    }
}

fn expand(file_ast: File) -> syn::Result<TokenStream2> {
    let mut struct_name = None;
    let mut methods = Vec::new();

    // Find struct and impl methods
    for item in file_ast.items {
        match item {
            Item::Struct(item_struct) => struct_name = Some(item_struct.ident),
            Item::Impl(impl_block) => {
                for impl_item in impl_block.items {
                    if let ImplItem::Fn(method) = impl_item {
                        methods.push(method);
                    }
                }
            }
            _ => (),
        }
    }

    let struct_ident = struct_name.ok_or_else(|| {
        syn::Error::new(proc_macro2::Span::call_site(), "No contract struct found")
    })?;
    let client_struct_ident = format_ident!("{}Client", struct_ident);

    let client_methods = methods
        .iter()
        .filter(|method| is_entry_point(method))
        .map(client_method)
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        #[derive(Clone)]
        pub struct #client_struct_ident {
            handle: ::billiard_rs::ContractHandle,
        }

        impl #client_struct_ident {
            pub fn connect(
                contract_id: &str,
                signer: ::billiard_rs::Signer,
                env: &::billiard_rs::Env,
            ) -> Result<Self, ::billiard_rs::ClientError> {
                Ok(Self {
                    handle: ::billiard_rs::ContractHandle::connect(contract_id, signer, env)?,
                })
            }

            pub fn contract_id(&self) -> &str {
                self.handle.contract_id()
            }

            pub fn handle(&self) -> &::billiard_rs::ContractHandle {
                &self.handle
            }

            #(#client_methods)*
        }
    })
}

/// Public functions other than constructors.
fn is_entry_point(method: &ImplItemFn) -> bool {
    let name = method.sig.ident.to_string();
    matches!(method.vis, Visibility::Public(_)) && name != "__constructor" && name != "new"
}

/// Contract entry points take the host environment first; it has no
/// counterpart on the client side.
fn is_env_arg(arg: &FnArg) -> bool {
    match arg {
        FnArg::Typed(pat_type) => match pat_type.ty.as_ref() {
            Type::Path(path) => path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Env"),
            Type::Reference(reference) => matches!(
                reference.elem.as_ref(),
                Type::Path(path) if path.path.segments.last().is_some_and(|s| s.ident == "Env")
            ),
            _ => false,
        },
        FnArg::Receiver(_) => false,
    }
}

fn client_method(method: &ImplItemFn) -> syn::Result<TokenStream2> {
    let method_name = &method.sig.ident;
    let method_name_str = method_name.to_string();

    let mut params = Vec::new();
    let mut conversions = Vec::new();

    for arg in method.sig.inputs.iter().filter(|arg| !is_env_arg(arg)) {
        let FnArg::Typed(pat_type) = arg else {
            return Err(syn::Error::new_spanned(arg, "contract entry points cannot take self"));
        };
        let Pat::Ident(pat_ident) = pat_type.pat.as_ref() else {
            return Err(syn::Error::new_spanned(&pat_type.pat, "expected a plain argument name"));
        };

        let ident = &pat_ident.ident;
        let ty = &pat_type.ty;
        params.push(quote! { #ident: #ty });
        conversions.push(quote! { ::billiard_rs::IntoScVal::try_into_val(&#ident)? });
    }

    Ok(quote! {
        pub async fn #method_name(
            &self,
            #(#params),*
        ) -> Result<::billiard_rs::CallResponse, ::billiard_rs::ClientError> {
            let args = vec![#(#conversions),*];
            self.handle.invoke(#method_name_str, args).await
        }
    })
}
