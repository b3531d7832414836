use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters after which a hyphen survives sanitization.
/// 英小文字・数字に加えて一部のアクセント付きラテン文字
#[inline]
fn is_hyphen_anchor(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase() || matches!(c, 'ä' | 'ö' | 'ü' | 'ß' | 'é')
}

/// Decimal digit (`Nd`).
#[inline]
fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Letter (`L*`) or decimal digit (`Nd`).
///
/// Narrower than `char::is_alphanumeric`: other numbers such as `²` or `½`
/// and combining marks are not term characters.
#[inline]
fn is_term_char(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter | DecimalNumber
    )
}

/// Drop every character that is not a letter, digit or whitespace.
///
/// A hyphen is kept only when the last retained non-hyphen character is a
/// hyphen anchor (`a-z`, `0-9`, `ä`, `ö`, `ü`, `ß`, `é`).
/// The input is expected to be lowercase already.
///
/// Works on a single token as well as on a whole text: the anchor state is
/// carried across whitespace, which is itself retained.
pub fn retain_term_chars(text: &str) -> String {
    let mut prev: Option<char> = None;
    text.chars()
        .filter(|&c| {
            if c == '-' && prev.is_some_and(is_hyphen_anchor) {
                return true;
            }
            if !is_term_char(c) && !c.is_whitespace() {
                return false;
            }
            prev = Some(c);
            true
        })
        .collect()
}

/// True if the token is made of digits and hyphens only and holds at least one digit.
///
/// # Examples
/// ```
/// use tf_idf_tagger::utils::sanitize::is_numeric_term;
/// assert!(is_numeric_term("2024"));
/// assert!(is_numeric_term("1-2-3"));
/// assert!(!is_numeric_term("-"));
/// assert!(!is_numeric_term("b2b"));
/// ```
pub fn is_numeric_term(token: &str) -> bool {
    let mut has_digit = false;
    for c in token.chars() {
        if is_digit(c) {
            has_digit = true;
        } else if c != '-' {
            return false;
        }
    }
    has_digit
}

/// Normalize a single whitespace-delimited token into a term.
///
/// Lowercases, strips punctuation (see [`retain_term_chars`]) and returns an
/// empty string for numeric tokens such as `"2024"` or `"10-20"`.
/// Both the dictionary pass and the sentence pass go through this function,
/// so terms from the two views compare equal.
///
/// # Examples
/// ```
/// use tf_idf_tagger::sanitize_word;
/// assert_eq!(sanitize_word("Hello,"), "hello");
/// assert_eq!(sanitize_word("state-of-the-art"), "state-of-the-art");
/// assert_eq!(sanitize_word("-dash"), "dash");
/// assert_eq!(sanitize_word("1999"), "");
/// ```
pub fn sanitize_word(word: &str) -> String {
    let word = retain_term_chars(&word.to_lowercase());
    if is_numeric_term(&word) {
        return String::new();
    }
    word
}
