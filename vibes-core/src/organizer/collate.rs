use std::cmp::Ordering;

/// Compares two display strings the way a reader expects an A-Z list to look.
///
/// Letters are compared case-insensitively with common Latin accents and
/// ligatures folded (`é` sorts with `e`, `ß` as `ss`). Ties are broken by
/// accents first (`e` before `é`), then by case with lowercase first, so the
/// order stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a.chars().flat_map(fold).cmp(b.chars().flat_map(fold));
    folded
        .then_with(|| a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase)))
        .then_with(|| b.cmp(a))
}

fn fold(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => ('a', None),
        'æ' | 'Æ' => ('a', Some('e')),
        'ç' | 'Ç' | 'ć' | 'Ć' | 'č' | 'Č' => ('c', None),
        'đ' | 'Đ' => ('d', None),
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' | 'ę' | 'Ę' => ('e', None),
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => ('i', None),
        'ł' | 'Ł' => ('l', None),
        'ñ' | 'Ñ' | 'ń' | 'Ń' => ('n', None),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => ('o', None),
        'œ' | 'Œ' => ('o', Some('e')),
        'ß' => ('s', Some('s')),
        'š' | 'Š' | 'ś' | 'Ś' => ('s', None),
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => ('u', None),
        'ý' | 'ÿ' | 'Ý' => ('y', None),
        'ž' | 'Ž' | 'ź' | 'Ź' | 'ż' | 'Ż' => ('z', None),
        other => (other, None),
    };
    first.to_lowercase().chain(second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn folds_accents() {
        assert_eq!(locale_compare("Émile", "Ezra"), Ordering::Less);
        assert_eq!(locale_compare("Beyoncé", "Beyonce Z"), Ordering::Less);
    }

    #[test]
    fn folds_letters_beyond_plain_accents() {
        assert_eq!(locale_compare("Łona", "Mona"), Ordering::Less);
        assert_eq!(locale_compare("Straße", "Strasse z"), Ordering::Less);
        assert_eq!(locale_compare("Œdipus", "Ohio"), Ordering::Less);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_ties() {
        assert_eq!(locale_compare("abc", "ABC"), Ordering::Less);
        assert_eq!(locale_compare("ABC", "abc"), Ordering::Greater);
        assert_eq!(locale_compare("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn unaccented_sorts_before_accented_on_ties() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("Résumé", "resume"), Ordering::Greater);
    }
}
