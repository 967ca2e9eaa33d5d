/// Escape text the way a browser serializes a text node: only `&`, `<`, `>`
/// and no-break space are rewritten. Quotes are left alone, so the result is
/// only valid as element content, never inside an attribute.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).replace('\u{a0}', "&nbsp;")
}
