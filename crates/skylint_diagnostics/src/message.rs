//! Message templates with `{{ name }}` placeholders.

/// Substitute `{{ name }}` placeholders in `template` with values from `data`.
///
/// Whitespace inside the braces is ignored. Placeholders without a matching
/// entry are left as written.
pub fn interpolate<K: AsRef<str>, V: AsRef<str>>(template: &str, data: &[(K, V)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = after_open[..close].trim();
        match data.iter().find(|(k, _)| k.as_ref() == key) {
            Some((_, value)) => out.push_str(value.as_ref()),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}
