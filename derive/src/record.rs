use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Fields, Ident, Path, Result, Token,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

/// Largest number of fields a record type may declare. Mirrors
/// `tablature::record::MAX_FIELDS`.
const MAX_FIELDS: usize = 32;

pub(crate) fn expand_record(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`Record` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`Record` may only be derived on structs with named fields.",
        ))?
    };

    if fields.named.len() > MAX_FIELDS {
        Err(Error::new(
            input.span(),
            format!("`Record` may only be derived on structs with at most {MAX_FIELDS} fields."),
        ))?
    }

    let names: Vec<&Ident> = fields
        .named
        .iter()
        .map(|field| field.ident.as_ref().unwrap())
        .collect();
    let count = names.len();

    let conversions = names.iter().map(|name| {
        quote! {
            #name: ::tablature::convert::FromField::from_field(fields.next_field()?)?,
        }
    });

    let cursor = if count != 0 {
        quote! { let mut fields = ::tablature::split::Fields::new(line, delimiter); }
    } else {
        quote! { let fields = ::tablature::split::Fields::new(line, delimiter); }
    };

    let validate_method = validation(input)?.map(|path| {
        quote! {
            fn validate(&self) -> ::core::result::Result<(), ::tablature::ValidationError> {
                #path(self)
            }
        }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl ::tablature::Record for #name {
            const FIELDS: usize = #count;

            fn from_line(
                line: &str,
                delimiter: char,
            ) -> ::core::result::Result<Self, ::tablature::ErrorKind> {
                #cursor
                let record = Self {
                    #(#conversions)*
                };
                fields.finish()?;
                ::core::result::Result::Ok(record)
            }

            #validate_method
        }
    };

    Ok(expanded.into())
}

/// Retrieve the validation function named by a `#[record(validate = ...)]`
/// container attribute, if one is present.
fn validation(input: &DeriveInput) -> Result<Option<Path>> {
    let Some(attr) = input.attrs.iter().find(|a| a.path().is_ident("record")) else {
        return Ok(None);
    };

    let RecordAttribute { validate } = attr.meta.require_list()?.parse_args()?;

    Ok(Some(validate))
}

struct RecordAttribute {
    validate: Path,
}

impl Parse for RecordAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let keyword = input.parse::<Ident>()?;
        if keyword != "validate" {
            Err(Error::new_spanned(keyword, "Expected `validate = <path>`."))?
        }

        input.parse::<Token![=]>()?;
        let validate = input.parse::<Path>()?;

        Ok(Self { validate })
    }
}
