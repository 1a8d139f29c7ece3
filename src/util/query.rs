//! Query string construction.

use url::form_urlencoded;

/// Append `key=value` pairs to `base` as a new query string.
///
/// Pairs are encoded with form-urlencoded rules and emitted in iteration
/// order. Any query already on `base` is left as is; nothing is merged.
/// No pairs means `base` is returned unchanged.
pub fn append_query_params<I, K, V>(base: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut empty = true;
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), value.as_ref());
        empty = false;
    }

    if empty {
        return base.to_string();
    }
    format!("{}?{}", base, serializer.finish())
}
