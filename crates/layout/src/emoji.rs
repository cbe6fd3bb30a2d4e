//! Emoji detection and font tagging.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Code point blocks that are drawn with the emoji face: pictographs,
/// emoticons, transport symbols, the supplemental symbol blocks, dingbats and
/// miscellaneous symbols.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F700, 0x1F77F),
    (0x1F780, 0x1F7FF),
    (0x1F800, 0x1F8FF),
    (0x1F900, 0x1F9FF),
    (0x1FA00, 0x1FA6F),
    (0x1FA70, 0x1FAFF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
];

// One character class over all ranges, so neighbouring emoji from different
// blocks end up in the same run.
static EMOJI_RUN: Lazy<Regex> = Lazy::new(|| {
    let class: String = EMOJI_RANGES
        .iter()
        .map(|(start, end)| format!("\\x{{{:X}}}-\\x{{{:X}}}", start, end))
        .collect();
    Regex::new(&format!("[{}]+", class)).expect("emoji ranges form a valid class")
});

pub fn is_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Every character of the emoji class, in range order.
pub fn emoji_chars() -> impl Iterator<Item = char> {
    EMOJI_RANGES
        .iter()
        .flat_map(|&(start, end)| start..=end)
        .filter_map(char::from_u32)
}

/// Wraps each maximal run of emoji in `<font face="font_name">…</font>`.
/// Text without emoji is returned unchanged.
pub fn tag_emoji(text: &str, font_name: &str) -> String {
    EMOJI_RUN
        .replace_all(text, |caps: &Captures| {
            format!("<font face=\"{}\">{}</font>", font_name, &caps[0])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_single_emoji() {
        assert_eq!(
            tag_emoji("Go 🚀 now", "F"),
            "Go <font face=\"F\">🚀</font> now"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(tag_emoji("no emoji", "F"), "no emoji");
        assert_eq!(tag_emoji("", "F"), "");
    }

    #[test]
    fn coalesces_adjacent_emoji_from_different_blocks() {
        // U+1F525 (pictographs), U+1F600 (emoticons), U+2600 (misc symbols)
        assert_eq!(
            tag_emoji("a🔥😀☀b", "Noto"),
            "a<font face=\"Noto\">🔥😀☀</font>b"
        );
    }

    #[test]
    fn separate_runs_get_separate_tags() {
        assert_eq!(
            tag_emoji("🌟 x 🤖", "E"),
            "<font face=\"E\">🌟</font> x <font face=\"E\">🤖</font>"
        );
    }

    #[test]
    fn variation_selector_is_not_part_of_the_run() {
        // 🗺️ is U+1F5FA followed by U+FE0F.
        assert_eq!(
            tag_emoji("🗺\u{FE0F} map", "E"),
            "<font face=\"E\">🗺</font>\u{FE0F} map"
        );
    }

    #[test]
    fn font_name_is_inserted_literally() {
        assert_eq!(tag_emoji("✅", "$1 face"), "<font face=\"$1 face\">✅</font>");
    }

    #[test]
    fn range_membership() {
        assert!(is_emoji('🚀'));
        assert!(is_emoji('\u{2700}'));
        assert!(is_emoji('\u{27BF}'));
        assert!(!is_emoji('\u{27C0}'));
        assert!(!is_emoji('A'));
        assert!(!is_emoji('\u{FE0F}'));
    }

    #[test]
    fn emoji_chars_match_predicate() {
        let chars: Vec<char> = emoji_chars().collect();
        assert!(chars.iter().all(|&c| is_emoji(c)));
        assert!(chars.contains(&'🧠'));
    }
}
