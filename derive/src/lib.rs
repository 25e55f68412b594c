use proc_macro_error::proc_macro_error;
use syn::parse_macro_input;

mod attr;

/// See [`anyvalue::matcher`].
#[proc_macro_attribute]
#[proc_macro_error]
pub fn matcher(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let args = parse_macro_input!(attr as attr::MatcherArgs);
    let fn_item = parse_macro_input!(item as syn::ItemFn);

    attr::expand(args, fn_item).into()
}
