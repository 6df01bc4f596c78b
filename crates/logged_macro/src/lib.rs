use proc_macro::TokenStream;
use syn::{parse_macro_input, FnArg, ItemFn, Pat};
use quote::quote;

#[derive(Eq, PartialEq)]
enum ProcLogLevel {
    Trace,
    Debug,
}

// #[logged(trace)] or #[logged(debug)]
//
// Records function entry and exit through the process-wide rotating logger.
//
// #[logged(trace)] logs the argument values and the return value, tagged TRACE.
// It needs every parameter and the return type to implement Debug.
//
// #[logged(debug)] logs the argument names and types, tagged DEBUG.

#[proc_macro_attribute]
pub fn logged(attr: TokenStream, item: TokenStream) -> TokenStream {
    let log_level = attr.to_string().trim_matches('"').to_lowercase();

    let log_level = match log_level.as_str() {
        "trace" => ProcLogLevel::Trace,
        "debug" | "" => ProcLogLevel::Debug,
        other => {
            let message = format!("Invalid log level `{}`, expected `trace` or `debug`", other);
            return quote! { compile_error!(#message); }.into();
        }
    };

    let input_fn: ItemFn = parse_macro_input!(item as ItemFn);
    let fn_name = &input_fn.sig.ident;
    let args = &input_fn.sig.inputs;
    let is_async = input_fn.sig.asyncness.is_some();
    let fn_block = &input_fn.block;

    let log_args_type = args.iter().filter_map(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(ref pat_ident) = *pat_type.pat {
                let pat_ident = &pat_ident.ident;
                let pat_type = &pat_type.ty;
                Some(quote! { format!("{}: {}", stringify!(#pat_ident), stringify!(#pat_type)) })
            } else { None }
        } else { None }
    });

    let log_args_value = args.iter().filter_map(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(ref pat_ident) = *pat_type.pat {
                let pat_ident = &pat_ident.ident;
                Some(quote! { format!("{}: {:?}", stringify!(#pat_ident), #pat_ident) })
            } else { None }
        } else { None }
    });

    // "(a: i32, b: &str)"
    let log_args_type = quote! {{
        let parts: Vec<String> = vec![#(#log_args_type),*];
        format!("({})", parts.join(", "))
    }};
    // "(a: 2, b: \"x\")"
    let log_args_value = quote! {{
        let parts: Vec<String> = vec![#(#log_args_value),*];
        format!("({})", parts.join(", "))
    }};

    let call_original_fn = if is_async {
        quote! { let result = (async move { #fn_block }).await; }
    } else {
        quote! { let result = (move ||{ #fn_block })(); }
    };

    let module_path = quote! { module_path!() };

    let (log_enter, log_exit) = match log_level {
        ProcLogLevel::Trace => (
            quote! {
                let _ = ::rotating_logger::log(
                    format!("Entering {}::{}{}", #module_path, stringify!(#fn_name), #log_args_value),
                    ::rotating_logger::LogLevel::Trace
                );
            },
            quote! {
                let _ = ::rotating_logger::log(
                    format!("Leaving {}::{} returned: {:?}", #module_path, stringify!(#fn_name), result),
                    ::rotating_logger::LogLevel::Trace
                );
            }
        ),
        ProcLogLevel::Debug => (
            quote! {
                let _ = ::rotating_logger::log(
                    format!("Entering {}::{}{}", #module_path, stringify!(#fn_name), #log_args_type),
                    ::rotating_logger::LogLevel::Debug
                );
            },
            quote! {
                let _ = ::rotating_logger::log(
                    format!("Leaving {}::{}", #module_path, stringify!(#fn_name)),
                    ::rotating_logger::LogLevel::Debug
                );
            }
        ),
    };

    let attributes = &input_fn.attrs;
    let visibility = &input_fn.vis;
    let signature = &input_fn.sig;

    let expanded = quote! {
        #(#attributes)* #visibility #signature {
            #log_enter
            #call_original_fn
            #log_exit
            return result;
        }
    };

    TokenStream::from(expanded)
}
