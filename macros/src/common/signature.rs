//! Signature model for host functions.
//!
//! Reduces a `syn::ImplItemFn` to the facts validation checks at runtime:
//! visibility, receiver, required parameters and return shape.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    FnArg, GenericArgument, ImplItemFn, PathArguments, ReturnType, Type, TypeParamBound,
    Visibility,
};

/// Mirror of `tola_collect::ReturnShape`, computed from syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeModel {
    Sequence,
    Iterator,
    Fallible(Box<ShapeModel>),
    Unit,
    Other(String),
}

const SEQUENCE_TYPES: &[&str] = &[
    "Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet", "IndexSet", "SmallVec",
];

const ITERATOR_TRAITS: &[&str] = &[
    "Iterator", "IntoIterator", "DoubleEndedIterator", "ExactSizeIterator",
];

impl ShapeModel {
    pub fn from_return(output: &ReturnType) -> Self {
        match output {
            ReturnType::Default => ShapeModel::Unit,
            ReturnType::Type(_, ty) => Self::from_type(ty),
        }
    }

    pub fn from_type(ty: &Type) -> Self {
        match ty {
            Type::Tuple(tuple) if tuple.elems.is_empty() => ShapeModel::Unit,
            Type::Array(_) | Type::Slice(_) => ShapeModel::Sequence,
            Type::Reference(reference) => match &*reference.elem {
                Type::Array(_) | Type::Slice(_) => ShapeModel::Sequence,
                _ => Self::other(ty),
            },
            Type::Paren(inner) => Self::from_type(&inner.elem),
            Type::Group(inner) => Self::from_type(&inner.elem),
            Type::ImplTrait(bounds) => Self::from_bounds(bounds.bounds.iter(), ty),
            Type::TraitObject(bounds) => Self::from_bounds(bounds.bounds.iter(), ty),
            Type::Path(path) => {
                let Some(last) = path.path.segments.last() else {
                    return Self::other(ty);
                };
                let name = last.ident.to_string();

                if SEQUENCE_TYPES.contains(&name.as_str()) {
                    return ShapeModel::Sequence;
                }
                match (name.as_str(), first_type_arg(&last.arguments)) {
                    ("Result", Some(ok)) => ShapeModel::Fallible(Box::new(Self::from_type(ok))),
                    ("Box", Some(inner)) => match Self::from_type(inner) {
                        shape @ (ShapeModel::Sequence | ShapeModel::Iterator) => shape,
                        _ => Self::other(ty),
                    },
                    _ => Self::other(ty),
                }
            }
            _ => Self::other(ty),
        }
    }

    fn from_bounds<'a>(mut bounds: impl Iterator<Item = &'a TypeParamBound>, ty: &Type) -> Self {
        let iterable = bounds.any(|bound| match bound {
            TypeParamBound::Trait(trait_bound) => trait_bound
                .path
                .segments
                .last()
                .is_some_and(|seg| ITERATOR_TRAITS.contains(&seg.ident.to_string().as_str())),
            _ => false,
        });
        if iterable { ShapeModel::Iterator } else { Self::other(ty) }
    }

    fn other(ty: &Type) -> Self {
        ShapeModel::Other(ty.to_token_stream().to_string())
    }

    pub fn is_iterable(&self) -> bool {
        match self {
            ShapeModel::Sequence | ShapeModel::Iterator => true,
            ShapeModel::Fallible(inner) => inner.is_iterable(),
            ShapeModel::Unit | ShapeModel::Other(_) => false,
        }
    }

    pub fn expand(&self) -> TokenStream {
        match self {
            ShapeModel::Sequence => quote! { ::tola_collect::ReturnShape::Sequence },
            ShapeModel::Iterator => quote! { ::tola_collect::ReturnShape::Iterator },
            ShapeModel::Fallible(inner) => {
                let inner = inner.expand();
                quote! { ::tola_collect::ReturnShape::Fallible(::std::boxed::Box::new(#inner)) }
            }
            ShapeModel::Unit => quote! { ::tola_collect::ReturnShape::Unit },
            ShapeModel::Other(ty) => {
                quote! { ::tola_collect::ReturnShape::Other(::std::string::String::from(#ty)) }
            }
        }
    }
}

fn first_type_arg(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// Everything `#[host_functions]` needs to know about one function.
pub struct FunctionModel {
    pub ident: syn::Ident,
    pub name: String,
    pub is_public: bool,
    pub is_static: bool,
    pub required_params: usize,
    pub returns: ShapeModel,
    /// A closure can call it directly: no `unsafe`, `async` or generic parameters.
    pub is_callable: bool,
}

impl FunctionModel {
    pub fn from_fn(func: &ImplItemFn, rename: Option<String>) -> Self {
        let sig = &func.sig;
        let is_static = !sig.inputs.iter().any(|arg| matches!(arg, FnArg::Receiver(_)));
        let required_params = sig
            .inputs
            .iter()
            .filter(|arg| matches!(arg, FnArg::Typed(_)))
            .count();

        let returns = if sig.asyncness.is_some() {
            ShapeModel::Other("impl Future".to_string())
        } else {
            ShapeModel::from_return(&sig.output)
        };

        let has_type_params = sig
            .generics
            .params
            .iter()
            .any(|param| !matches!(param, syn::GenericParam::Lifetime(_)));

        FunctionModel {
            ident: sig.ident.clone(),
            name: rename.unwrap_or_else(|| sig.ident.to_string()),
            is_public: matches!(func.vis, Visibility::Public(_)),
            is_static,
            required_params,
            returns,
            is_callable: sig.unsafety.is_none() && sig.asyncness.is_none() && !has_type_params,
        }
    }

    /// Worth generating a body for.
    pub fn is_invocable(&self) -> bool {
        self.is_static && self.required_params == 0 && self.returns.is_iterable() && self.is_callable
    }
}
