//! Name normalization for join keys.
//!
//! Salary tables, draft history, and roster exports all spell player names
//! differently ("Luka Dončić", "Dončić, Luka", "Jaren Jackson Jr."). Every
//! table join in the reference database goes through [`normalize_name`] so
//! the variants land on the same key.

/// Generational suffixes dropped from the end of a name.
const SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

/// Normalize a person's name into a join key.
///
/// Lowercases, folds diacritics to ASCII, drops punctuation, collapses
/// whitespace, and strips a trailing generational suffix. Idempotent:
/// normalizing a normalized name is a no-op.
///
/// # Examples
///
/// ```rust
/// use cbb_nil::core::normalize::normalize_name;
///
/// assert_eq!(normalize_name("Luka Dončić"), "luka doncic");
/// assert_eq!(normalize_name("Jaren Jackson Jr."), "jaren jackson");
/// assert_eq!(normalize_name("Shaquille O'Neal"), "shaquille oneal");
/// ```
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_space = true; // swallow leading whitespace

    for ch in name.chars().flat_map(char::to_lowercase) {
        match ch {
            'a'..='z' | '0'..='9' => {
                out.push(ch);
                prev_space = false;
            }
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => push_ascii(&mut out, 'a', &mut prev_space),
            'ç' | 'ć' | 'č' => push_ascii(&mut out, 'c', &mut prev_space),
            'đ' | 'ď' => push_ascii(&mut out, 'd', &mut prev_space),
            'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => push_ascii(&mut out, 'e', &mut prev_space),
            'ğ' => push_ascii(&mut out, 'g', &mut prev_space),
            'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ı' => push_ascii(&mut out, 'i', &mut prev_space),
            'ł' => push_ascii(&mut out, 'l', &mut prev_space),
            'ñ' | 'ń' | 'ň' => push_ascii(&mut out, 'n', &mut prev_space),
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' => push_ascii(&mut out, 'o', &mut prev_space),
            'ř' => push_ascii(&mut out, 'r', &mut prev_space),
            'ş' | 'š' | 'ś' => push_ascii(&mut out, 's', &mut prev_space),
            'ť' | 'ţ' => push_ascii(&mut out, 't', &mut prev_space),
            'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' => push_ascii(&mut out, 'u', &mut prev_space),
            'ý' | 'ÿ' => push_ascii(&mut out, 'y', &mut prev_space),
            'ž' | 'ź' | 'ż' => push_ascii(&mut out, 'z', &mut prev_space),
            'æ' => push_str_ascii(&mut out, "ae", &mut prev_space),
            'œ' => push_str_ascii(&mut out, "oe", &mut prev_space),
            'ß' => push_str_ascii(&mut out, "ss", &mut prev_space),
            // Hyphens separate name parts; apostrophes and periods join them.
            '-' | '–' => {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            }
            c if c.is_whitespace() => {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            }
            _ => {}
        }
    }

    let trimmed = out.trim_end();
    strip_suffix(trimmed)
}

fn push_ascii(out: &mut String, c: char, prev_space: &mut bool) {
    out.push(c);
    *prev_space = false;
}

fn push_str_ascii(out: &mut String, s: &str, prev_space: &mut bool) {
    out.push_str(s);
    *prev_space = false;
}

/// Drop a trailing generational suffix, keeping at least one token.
fn strip_suffix(name: &str) -> String {
    let tokens: Vec<&str> = name.split(' ').collect();
    if tokens.len() > 1 {
        if let Some(last) = tokens.last() {
            if SUFFIXES.contains(last) {
                return tokens[..tokens.len() - 1].join(" ");
            }
        }
    }
    name.to_string()
}
