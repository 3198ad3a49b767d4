//! Naive parser for the snapshot's serialized list fields.
//!
//! The companion app stores notes and events as a JSON-looking string like
//! `["Buy milk","Call Sam"]`. The widget has always split that string on
//! bare commas, so values containing commas or escaped quotes come out
//! mangled. That behavior is contractual: upgrading to a real parser would
//! change what existing users see.

/// Number of display slots per list section.
pub const LIST_SLOTS: usize = 3;

/// Split a serialized list into its first three display slots.
///
/// Strips one surrounding `[`…`]` pair, splits on `,`, trims whitespace,
/// then strips one surrounding `"` pair per piece. Missing slots are empty
/// strings; pieces beyond the third are dropped.
pub fn parse_list_field(raw: &str) -> [String; LIST_SLOTS] {
    let inner = strip_surrounding(raw, '[', ']');
    let mut slots: [String; LIST_SLOTS] = Default::default();
    for (slot, piece) in slots.iter_mut().zip(inner.split(',')) {
        *slot = strip_surrounding(piece.trim(), '"', '"').to_string();
    }
    slots
}

/// Remove one leading `prefix` and one trailing `suffix`, only when both
/// are present. A piece like `"a` (unterminated quote) is left untouched.
fn strip_surrounding(s: &str, prefix: char, suffix: char) -> &str {
    if s.len() >= prefix.len_utf8() + suffix.len_utf8()
        && s.starts_with(prefix)
        && s.ends_with(suffix)
    {
        &s[prefix.len_utf8()..s.len() - suffix.len_utf8()]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(raw: &str) -> [String; LIST_SLOTS] {
        parse_list_field(raw)
    }

    #[test]
    fn two_items_fill_first_two_slots() {
        assert_eq!(
            slots(r#"["Buy milk","Call Sam"]"#),
            ["Buy milk", "Call Sam", ""]
        );
    }

    #[test]
    fn empty_list_yields_three_empty_slots() {
        assert_eq!(slots("[]"), ["", "", ""]);
    }

    #[test]
    fn fourth_item_is_dropped() {
        assert_eq!(slots(r#"["a","b","c","d"]"#), ["a", "b", "c"]);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(slots(r#"[ "a" ,  "b" ]"#), ["a", "b", ""]);
    }

    // Known limitation, kept on purpose: a comma inside quotes splits the
    // value and leaves the dangling quotes in place.
    #[test]
    fn embedded_comma_splits_naively() {
        assert_eq!(slots(r#"["a, b","c"]"#), ["\"a", "b\"", "c"]);
    }

    #[test]
    fn unbracketed_input_is_split_as_is() {
        assert_eq!(slots("a,b"), ["a", "b", ""]);
    }

    #[test]
    fn lone_quote_piece_is_kept() {
        assert_eq!(slots(r#"[","]"#), ["\"", "\"", ""]);
    }
}
