//! Symbol names for error records.

/// Converts a CamelCase type name into a hyphenated Lisp symbol name.
///
/// A hyphen goes before every ASCII uppercase letter that follows a lowercase letter
/// or a digit, and before the last letter of an uppercase run when a lowercase letter
/// follows it (`HTMLParser` splits as `html-parser`). Everything is lowercased with
/// ASCII rules only, so the result does not depend on the locale.
///
/// Acronym runs stay together and digits are kept. A plain split at every capital
/// would give `h-t-m-l-parser` for `HTMLParser` and drop the `2` from `Base64V2`;
/// this function gives `html-parser` and `base64-v2` instead.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::naming::camel_case_to_lisp_name;
///
/// assert_eq!(camel_case_to_lisp_name("UnknownAttribute"), "unknown-attribute");
/// assert_eq!(camel_case_to_lisp_name("ResourceNotFound"), "resource-not-found");
/// assert_eq!(camel_case_to_lisp_name("HTMLParser"), "html-parser");
/// ```
#[must_use]
pub fn camel_case_to_lisp_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut lisp_name = String::with_capacity(name.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                lisp_name.push('-');
            }
        }
        lisp_name.push(ch.to_ascii_lowercase());
    }

    lisp_name
}

/// Strips the module path and generic arguments from a Rust type name.
///
/// `std::io::error::Error` becomes `Error`, `my::Wrapper<alloc::string::String>`
/// becomes `Wrapper`.
#[must_use]
pub fn short_type_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_to_lisp_name() {
        assert_eq!(camel_case_to_lisp_name("UnknownAttribute"), "unknown-attribute");
        assert_eq!(camel_case_to_lisp_name("ResourceNotFound"), "resource-not-found");
        assert_eq!(camel_case_to_lisp_name("ValueError"), "value-error");
        assert_eq!(
            camel_case_to_lisp_name("NotImplementedError"),
            "not-implemented-error"
        );
    }

    #[test]
    fn test_acronyms_and_digits() {
        assert_eq!(camel_case_to_lisp_name("IOError"), "io-error");
        assert_eq!(camel_case_to_lisp_name("HTTP2Error"), "http2-error");
        assert_eq!(camel_case_to_lisp_name("Utf8Error"), "utf8-error");
        assert_eq!(camel_case_to_lisp_name("URL"), "url");
        assert_eq!(camel_case_to_lisp_name("HTMLParser"), "html-parser");
        assert_eq!(camel_case_to_lisp_name("Base64V2"), "base64-v2");
    }

    #[test]
    fn test_already_lisp_case() {
        assert_eq!(camel_case_to_lisp_name("error"), "error");
        assert_eq!(camel_case_to_lisp_name(""), "");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(
            short_type_name("my_crate::Wrapper<alloc::string::String>"),
            "Wrapper"
        );
        assert_eq!(short_type_name("ParseIntError"), "ParseIntError");
        assert_eq!(short_type_name("dyn core::error::Error"), "Error");
    }
}
