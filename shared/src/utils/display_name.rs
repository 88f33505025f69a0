//! Display-name sanitization and output encoding (spec §4.5 `updateProfile`).

/// Strip C0 control characters and DEL, trim whitespace, and cap at 80
/// characters (by `char`, not byte, so multi-byte names aren't truncated
/// mid-codepoint).
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !is_c0_or_del(*c))
        .collect();
    let trimmed = stripped.trim();
    trimmed.chars().take(80).collect()
}

fn is_c0_or_del(c: char) -> bool {
    (c as u32) < 0x20 || (c as u32) == 0x7f
}

/// HTML-entity-encode a display name for safe output (spec §4.5:
/// "HTML-entity-encoded on output").
pub fn encode_for_output(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
