//! URL slug generation

/// Fold a character with a diacritic to its ASCII base letter(s)
fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'ı' | 'İ' | 'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => "i",
        'ğ' | 'Ğ' => "g",
        'ü' | 'Ü' | 'ú' | 'ù' | 'û' | 'Ú' | 'Ù' | 'Û' | 'ů' | 'Ů' => "u",
        'ş' | 'Ş' | 'š' | 'Š' | 'ś' | 'Ś' => "s",
        'ö' | 'Ö' | 'ó' | 'ò' | 'ô' | 'õ' | 'ø' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ø' | 'ő' | 'Ő' => "o",
        'ç' | 'Ç' | 'č' | 'Č' | 'ć' | 'Ć' => "c",
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => "a",
        'é' | 'è' | 'ê' | 'ë' | 'ě' | 'É' | 'È' | 'Ê' | 'Ë' | 'Ě' => "e",
        'ñ' | 'Ñ' | 'ň' | 'Ň' => "n",
        'ž' | 'Ž' | 'ź' | 'Ź' | 'ż' | 'Ż' => "z",
        'ř' | 'Ř' => "r",
        'ý' | 'Ý' => "y",
        'ď' | 'Ď' | 'đ' | 'Đ' => "d",
        'ť' | 'Ť' => "t",
        'ł' | 'Ł' => "l",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        _ => return None,
    };
    Some(folded)
}

/// Convert text to a URL-friendly slug: lowercase ASCII letters and digits
/// separated by single dashes.
///
/// `"Istanbul & Cappadocia 5 Nights Group Tour-sic"` becomes
/// `"istanbul-cappadocia-5-nights-group-tour-sic"`.
pub fn slugify(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_char(c) {
            Some(ascii) => folded.push_str(ascii),
            None => folded.extend(c.to_lowercase()),
        }
    }

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_dash = true;
        }
        // anything else is dropped without separating words
    }

    slug
}
