use ident_case::RenameRule;
use proc_macro2::{Ident, TokenStream};
use proc_macro_error::abort;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_quote,
    spanned::Spanned,
};

/// Arguments given to the [`crate::matcher`] attribute.
pub struct MatcherArgs {
    expected: syn::Expr,
    name: Option<Ident>,
    coerces: Option<syn::Expr>,
}

impl Parse for MatcherArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut expected = None;
        let mut name = None;
        let mut coerces = None;

        loop {
            let key: Ident = input.parse()?;
            let key_str = key.to_string();

            input.parse::<syn::Token![=]>()?;

            match key_str.as_str() {
                "expected" => expected = Some(input.parse()?),
                "name" => name = Some(input.parse()?),
                "coerces" => coerces = Some(input.parse()?),
                k => abort!(key, "unknown key `{}`", k),
            }

            if input.is_empty() {
                break;
            }

            input.parse::<syn::Token![,]>()?;
        }

        let expected = match expected {
            Some(expected) => expected,
            None => abort!(input.span(), "`expected` must be specified"),
        };

        Ok(Self {
            expected,
            name,
            coerces,
        })
    }
}

/// Expands the body of the [`crate::matcher`] attribute.
pub fn expand(
    MatcherArgs {
        expected,
        name,
        coerces,
    }: MatcherArgs,
    mut fn_item: syn::ItemFn,
) -> TokenStream {
    // Validate function.
    let syn::ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = &mut fn_item;

    if sig.abi.is_some() {
        abort!(sig.abi, "matcher function cannot have an abi specifier");
    }

    if sig.asyncness.is_some() {
        abort!(sig.asyncness, "matcher function cannot be async");
    }

    if sig.unsafety.is_some() {
        abort!(sig.unsafety, "matcher function cannot be unsafe");
    }

    if sig.generics.lt_token.is_some() {
        abort!(
            sig.generics,
            "matcher function cannot be generic; its matcher is stored in a `Placeholder`"
        );
    }

    // Compute identifiers.
    let base_name = match name {
        Some(name) => name,
        None => Ident::new(
            &RenameRule::PascalCase.apply_to_field(sig.ident.to_string()),
            sig.ident.span(),
        ),
    };

    let struct_ident = format_ident!("{}Matcher", base_name);
    let struct_doc = syn::LitStr::new(
        &format!(
            "[`Matcher`](anyvalue::Matcher) returned by [`{}`].",
            sig.ident
        ),
        sig.span(),
    );

    // Extract and validate the candidate parameter.
    let value_input = match sig.inputs.pop() {
        Some(last_input) => match last_input.into_value() {
            syn::FnArg::Typed(typed) => typed,
            syn::FnArg::Receiver(r) => {
                abort!(r, "matcher function must take at least one argument")
            }
        },
        None => abort!(
            sig.ident,
            "matcher function must take at least one argument"
        ),
    };

    match value_input.ty.as_ref() {
        syn::Type::Reference(syn::TypeReference {
            lifetime: None,
            mutability: None,
            ..
        }) => (),
        t => abort!(
            t,
            "matcher function must take an immutable `&Value` as last parameter"
        ),
    }

    // Validate input types.
    let mut dummy_field_names = Vec::with_capacity(sig.inputs.len());
    let mut matcher_field_tys = Vec::with_capacity(sig.inputs.len());
    let mut pattern_fields = Vec::with_capacity(sig.inputs.len());

    for (i, input) in sig.inputs.iter_mut().enumerate() {
        let typed = match input {
            syn::FnArg::Typed(typed) => typed,
            syn::FnArg::Receiver(r) => abort!(r, "matcher function cannot take a receiver"),
        };
        let dummy_name = format_ident!("v{}", i);
        let dummy_name_pat_ident = syn::PatIdent {
            ident: dummy_name.clone(),
            attrs: Vec::new(),
            by_ref: None,
            mutability: None,
            subpat: None,
        };
        let pat = std::mem::replace(typed.pat.as_mut(), syn::Pat::Ident(dummy_name_pat_ident));

        dummy_field_names.push(dummy_name);
        matcher_field_tys.push(typed.ty.as_ref().clone());
        pattern_fields.push(pat);
    }

    // Validate and replace return type.
    let (return_ty, is_fallible) = match &mut sig.output {
        syn::ReturnType::Type(_, rt) => {
            let is_fallible = match rt.as_ref() {
                syn::Type::Path(path) if path.path.is_ident("bool") => false,
                syn::Type::Path(syn::TypePath { path, .. })
                    if path
                        .segments
                        .last()
                        .map(|segment| segment.ident == "Result")
                        .unwrap_or(false) =>
                {
                    true
                }
                r => abort!(
                    r,
                    "matcher function must return a `bool` or `Result<bool>`"
                ),
            };
            let return_ty = rt.as_ref().clone();

            *rt.as_mut() = parse_quote! { #struct_ident };

            (return_ty, is_fallible)
        }
        syn::ReturnType::Default => abort!(sig.ident, "matcher function must return a value"),
    };

    let describe_expr = expand_fmt_shorthand(&expected);
    let equals_body = if is_fallible {
        quote! { (|| -> #return_ty #block)() }
    } else {
        quote! { std::result::Result::Ok((|| -> #return_ty #block)()) }
    };
    let coercions_fn = coerces.map(|coerces| {
        quote! {
            fn coercions(&self) -> anyvalue::Coercions {
                #coerces
            }
        }
    });

    // Build output.
    quote! {
        #[doc = #struct_doc]
        #vis struct #struct_ident(
            #( #matcher_field_tys, )*
        );

        impl anyvalue::Matcher for #struct_ident {
            #[allow(unused_variables)]
            fn equals(&self, #value_input) -> anyvalue::Result<bool> {
                let Self( #( #pattern_fields, )* ) = self;

                #equals_body
            }

            #[allow(unused_variables)]
            fn describe_to(
                &self,
                options: &anyvalue::DescribeOptions,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                let Self( #( #pattern_fields, )* ) = self;
                let switch = |if_positive: &'static str, if_negative: &'static str| {
                    if !options.is_negated {
                        if_positive
                    } else {
                        if_negative
                    }
                };

                #describe_expr
            }

            #coercions_fn
        }

        anyvalue::__impl_placeholder!(#struct_ident);

        #( #attrs )*
        #vis #sig {
            #struct_ident( #( #dummy_field_names, )* )
        }
    }
}

/// Turns `"fmt"` or `("fmt", args..)` into a `write!(f, ..)` call; any other
/// expression is emitted as is and must itself write to `f`.
fn expand_fmt_shorthand(expr: &syn::Expr) -> TokenStream {
    let is_fmt_str = |expr: &syn::Expr| {
        matches!(
            expr,
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(_),
                ..
            })
        )
    };

    match expr {
        fmt if is_fmt_str(fmt) => quote! { std::write!(f, #fmt) },
        syn::Expr::Tuple(syn::ExprTuple { elems, .. }) if elems.first().map_or(false, is_fmt_str) => {
            let elems = elems.iter();

            quote! { std::write!(f, #( #elems ),*) }
        }
        other => quote! { #other },
    }
}
