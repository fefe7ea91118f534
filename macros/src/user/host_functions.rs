use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ImplItem, ItemImpl, Type};

use crate::common::{take_host_attrs, FunctionModel, ShapeModel};

/// #[host_functions] keeps the impl block as written and adds a
/// `HostFunctions` impl describing every function in it.
///
/// Invocable functions (static, zero-argument, iterable return) also get a
/// thunk that calls them and converts each item with `Ident::from`.
pub fn expand_host_functions(mut item: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[host_functions] expects an inherent impl block",
        ));
    }
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "#[host_functions] does not support generic impl blocks",
        ));
    }

    let self_ty = (*item.self_ty).clone();
    let mut descriptors = Vec::new();

    for impl_item in &mut item.items {
        let ImplItem::Fn(func) = impl_item else { continue };
        let attr = take_host_attrs(&mut func.attrs)?;
        if attr.skip {
            continue;
        }
        let model = FunctionModel::from_fn(func, attr.rename.map(|lit| lit.value()));
        descriptors.push(expand_descriptor(&model, &self_ty));
    }

    Ok(quote! {
        #item

        impl ::tola_collect::HostFunctions for #self_ty {
            fn host_functions() -> ::std::vec::Vec<::tola_collect::FunctionDescriptor> {
                ::std::vec![ #(#descriptors),* ]
            }
        }
    })
}

fn expand_descriptor(model: &FunctionModel, self_ty: &Type) -> TokenStream2 {
    let name = &model.name;
    let required_params = model.required_params;
    let returns = model.returns.expand();

    let visibility = if model.is_public {
        quote! { ::tola_collect::Visibility::Public }
    } else {
        quote! { ::tola_collect::Visibility::Private }
    };
    let receiver = if model.is_static {
        quote! { ::tola_collect::Receiver::Static }
    } else {
        quote! { ::tola_collect::Receiver::Instance }
    };

    let thunk = if model.is_invocable() {
        let func = &model.ident;
        let ctor = match model.returns {
            ShapeModel::Fallible(_) => quote! { fallible },
            _ => quote! { infallible },
        };
        quote! {
            .with_thunk(::tola_collect::Thunk::#ctor(|| <#self_ty>::#func()))
        }
    } else {
        quote! {}
    };

    quote! {
        ::tola_collect::FunctionDescriptor::new(#name)
            .with_visibility(#visibility)
            .with_receiver(#receiver)
            .with_required_params(#required_params)
            .with_returns(#returns)
            #thunk
    }
}
