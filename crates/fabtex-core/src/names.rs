//! Name derivation: the two folder dialects and the asset-name token.
//!
//! All three functions are pure and total over arbitrary input. The two
//! folder dialects are intentionally kept separate: `slugify_dir` is the
//! lossy lowercase form used for directory materialization, while
//! `sanitize_folder` is the case- and space-preserving Windows-safe form
//! used for download destinations and material spec paths. Unifying them
//! would change on-disk paths for existing installations.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Characters Windows refuses in file and folder names.
const INVALID_WIN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strips accents/diacritics, keeping plain ASCII-compatible letters.
/// NFKD-decomposes and drops the combining marks.
pub fn strip_accents(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Windows-safe folder name: invalid characters become `_`, whitespace
/// runs collapse to a single space, trailing dots/spaces are stripped.
/// Preserves case and internal spaces. Empty input yields `"_"`.
pub fn sanitize_folder(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_space = false;

    for c in name.trim().chars() {
        if INVALID_WIN.contains(&c) {
            out.push('_');
            prev_space = false;
        } else if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }

    let trimmed = out.trim_end_matches(['.', ' ']);
    if trimmed.is_empty() {
        "_".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Lowercase directory slug: whitespace and path separators become `_`,
/// everything outside `[a-z0-9_]` is dropped, runs of `_` collapse, and
/// leading/trailing `_` are trimmed. Empty input yields `"unnamed"`.
pub fn slugify_dir(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.trim().to_lowercase().chars() {
        let mapped = if c.is_whitespace() || c == '/' || c == '\\' {
            Some('_')
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            Some(c)
        } else {
            None
        };

        match mapped {
            Some('_') => {
                if !prev_underscore {
                    out.push('_');
                }
                prev_underscore = true;
            }
            Some(c) => {
                out.push(c);
                prev_underscore = false;
            }
            None => {}
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "unnamed".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Asset-name token: accents stripped, spaces become `-`, everything
/// outside `[A-Za-z0-9-]` is dropped, runs of `-` collapse, result is
/// uppercased. May return an empty string; callers must then treat the
/// entry as incomplete and drop it rather than substitute a placeholder.
pub fn sanitize_token(text: &str) -> String {
    let plain = strip_accents(text);
    let mut out = String::with_capacity(plain.len());
    let mut prev_hyphen = false;

    for c in plain.trim().chars() {
        let mapped = if c == ' ' || c == '-' {
            Some('-')
        } else if c.is_ascii_alphanumeric() {
            Some(c.to_ascii_uppercase())
        } else {
            None
        };

        match mapped {
            Some('-') => {
                if !prev_hyphen {
                    out.push('-');
                }
                prev_hyphen = true;
            }
            Some(c) => {
                out.push(c);
                prev_hyphen = false;
            }
            None => {}
        }
    }

    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_replaces_invalid_chars() {
        assert_eq!(sanitize_folder("a<b>c:d"), "a_b_c_d");
        assert_eq!(sanitize_folder("Modern/Silk"), "Modern_Silk");
    }

    #[test]
    fn folder_preserves_case_and_spaces() {
        assert_eq!(sanitize_folder("Modern Silk"), "Modern Silk");
        assert_eq!(sanitize_folder("Modern    Silk"), "Modern Silk");
    }

    #[test]
    fn folder_strips_trailing_dots_and_spaces() {
        assert_eq!(sanitize_folder("name. "), "name");
        assert_eq!(sanitize_folder("name..."), "name");
    }

    #[test]
    fn folder_empty_becomes_underscore() {
        assert_eq!(sanitize_folder(""), "_");
        assert_eq!(sanitize_folder("   "), "_");
        assert_eq!(sanitize_folder("..."), "_");
    }

    #[test]
    fn dir_slug_basic() {
        assert_eq!(slugify_dir("Modern/Silk"), "modern_silk");
        assert_eq!(slugify_dir("Heavy Wools"), "heavy_wools");
    }

    #[test]
    fn dir_slug_drops_specials_and_collapses() {
        assert_eq!(slugify_dir("A -- B"), "a_b");
        assert_eq!(slugify_dir("__x__"), "x");
        assert_eq!(slugify_dir("Ünïcode!"), "ncode");
    }

    #[test]
    fn dir_slug_empty_becomes_unnamed() {
        assert_eq!(slugify_dir(""), "unnamed");
        assert_eq!(slugify_dir("!!!"), "unnamed");
    }

    #[test]
    fn dir_slug_is_idempotent() {
        for s in ["Modern/Silk", "  Heavy  Wools ", "a--b__c", "ÀÉÎ", ""] {
            let once = slugify_dir(s);
            assert_eq!(slugify_dir(&once), once);
        }
    }

    #[test]
    fn token_basic() {
        assert_eq!(sanitize_token("Modern Silk"), "MODERN-SILK");
        assert_eq!(sanitize_token("804-004"), "804-004");
    }

    #[test]
    fn token_strips_accents() {
        assert_eq!(sanitize_token("Café Azul"), "CAFE-AZUL");
        assert_eq!(sanitize_token("piqué"), "PIQUE");
    }

    #[test]
    fn token_collapses_and_trims_hyphens() {
        assert_eq!(sanitize_token("-a--b-"), "A-B");
        assert_eq!(sanitize_token("  x  "), "X");
    }

    #[test]
    fn token_may_be_empty() {
        assert_eq!(sanitize_token(""), "");
        assert_eq!(sanitize_token("!!!"), "");
    }

    #[test]
    fn token_alphabet_invariant() {
        for s in ["weird !@# input", "ñ-ñ", "a b c", "  --  "] {
            let tok = sanitize_token(s);
            assert!(tok.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-'));
            assert!(!tok.starts_with('-'));
            assert!(!tok.ends_with('-'));
        }
    }
}
