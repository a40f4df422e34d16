//! TextProvider trait, the translation hook for rule messages.

/// Translates message ids before they are formatted into result text.
pub trait TextProvider: Send + Sync {
    fn translate(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

/// Returns every message untranslated.
pub struct PassthroughText;

impl TextProvider for PassthroughText {}

/// Fill sprintf-style placeholders: `%1$s`, `%2$d`, and bare `%s`/`%d`
/// (consumed left to right). `%%` renders a literal percent sign.
/// Placeholders without a matching argument are left as-is.
pub fn format_text(template: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.char_indices().peekable();
    let mut next_arg = 0usize;

    while let Some((start, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let rest = &template[start + 1..];
        if rest.starts_with('%') {
            chars.next();
            out.push('%');
            continue;
        }

        // Positional: digits, '$', conversion.
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        let positional = !digits.is_empty()
            && rest[digits.len()..].starts_with('$')
            && matches!(rest[digits.len() + 1..].chars().next(), Some('s' | 'd'));
        if positional {
            let index: usize = digits.parse().unwrap_or(0);
            let consumed = digits.len() + 2;
            match index.checked_sub(1).and_then(|i| args.get(i)) {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str(&template[start..start + 1 + consumed]),
            }
            for _ in 0..consumed {
                chars.next();
            }
            continue;
        }

        if matches!(rest.chars().next(), Some('s' | 'd')) {
            chars.next();
            match args.get(next_arg) {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str(&template[start..start + 2]),
            }
            next_arg += 1;
            continue;
        }

        out.push('%');
    }

    out
}
