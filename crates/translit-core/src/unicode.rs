//! Character-level Unicode classification for engraving input.

use crate::script::Script;

/// Arabic block (U+0600..U+06FF).
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Full Hiragana block (U+3040..U+309F), unassigned codepoints included.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Full Katakana block (U+30A0..U+30FF). Includes the prolonged sound mark ー.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs as far as U+9FAF. Extension blocks are not counted.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FAF}').contains(&c)
}

pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Whether `c` falls inside one of the Unicode blocks belonging to `script`.
pub fn is_script_char(c: char, script: Script) -> bool {
    match script {
        Script::Arabic => is_arabic(c),
        Script::Japanese => is_hiragana(c) || is_katakana(c) || is_kanji(c),
        Script::Hindi => is_devanagari(c),
    }
}

/// Check whether `text` is a transliteration candidate: non-empty and made
/// only of ASCII letters and whitespace. Digits, punctuation and any
/// non-ASCII letter disqualify it.
pub fn is_latin_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| is_latin(c) || c.is_whitespace())
}

/// Check whether `text` contains at least one character of `script`.
///
/// This is a "contains" test, not "consists of": `"abcد"` is in Arabic.
/// Callers use it to tell whether conversion already happened.
pub fn is_in_target_script(text: &str, script: Script) -> bool {
    text.chars().any(|c| is_script_char(c, script))
}
