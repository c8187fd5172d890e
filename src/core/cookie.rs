/// Extracts a cookie value from a raw `Cookie` header string.
///
/// Splits on `;`, trims each entry and returns the percent-decoded value of
/// the first entry whose name matches exactly. A value that fails to decode
/// is returned as-is.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    if cookie_header.is_empty() {
        return None;
    }

    for entry in cookie_header.split(';') {
        let entry = entry.trim();
        if let Some(raw) = entry
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
        {
            let decoded = urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            return Some(decoded);
        }
    }

    None
}
