use super::{Codec, CodecKind, DecodeError};

/// Longest entity body we look for before giving up on a `&`.
const MAX_ENTITY_LEN: usize = 32;

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("hellip", '…'),
    ("mdash", '—'),
    ("ndash", '–'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("laquo", '«'),
    ("raquo", '»'),
    ("bull", '•'),
    ("middot", '·'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("times", '×'),
    ("divide", '÷'),
    ("sect", '§'),
    ("para", '¶'),
    ("cent", '¢'),
    ("pound", '£'),
    ("yen", '¥'),
    ("euro", '€'),
];

pub struct HtmlCodec;

impl HtmlCodec {
    fn resolve(entity: &str) -> Option<char> {
        if let Some(numeric) = entity.strip_prefix('#') {
            let (digits, radix) = match numeric.strip_prefix(['x', 'X']) {
                Some(hex_digits) => (hex_digits, 16),
                None => (numeric, 10),
            };
            // from_str_radix alone would also take a leading sign
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            let code = u32::from_str_radix(digits, radix).ok()?;
            // browsers substitute U+FFFD for NUL, surrogates and out-of-range values
            return Some(match code {
                0 => char::REPLACEMENT_CHARACTER,
                _ => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
            });
        }

        NAMED_ENTITIES
            .iter()
            .find(|(name, _)| *name == entity)
            .map(|(_, c)| *c)
    }
}

impl Codec for HtmlCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Html
    }

    fn encode(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
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

    /// Never fails: unknown entities are copied through untouched.
    fn decode(&self, input: &str) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(amp) = rest.find('&') {
            out.push_str(&rest[..amp]);
            let tail = &rest[amp + 1..];

            let resolved = tail
                .char_indices()
                .take(MAX_ENTITY_LEN + 1)
                .find(|(_, c)| *c == ';')
                .and_then(|(semi, _)| Self::resolve(&tail[..semi]).map(|c| (c, semi)));

            match resolved {
                Some((c, semi)) => {
                    out.push(c);
                    rest = &tail[semi + 1..];
                }
                None => {
                    out.push('&');
                    rest = tail;
                }
            }
        }
        out.push_str(rest);

        Ok(out)
    }
}
