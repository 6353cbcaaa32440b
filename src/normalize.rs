// 🔤 Query Normalizer - fold hiragana into katakana
//
// Names are stored in katakana ("ピカチュウ"). Users often type hiragana
// ("ぴかちゅう"). Shifting the hiragana block onto the katakana block lets
// a plain substring match work for both without a transliteration table.

/// First hiragana code point folded (ぁ U+3041)
pub const HIRAGANA_START: char = '\u{3041}';

/// Last hiragana code point folded (ん U+3093)
pub const HIRAGANA_END: char = '\u{3093}';

/// Distance from a hiragana code point to its katakana counterpart
pub const KATAKANA_OFFSET: u32 = 0x60;

pub fn is_hiragana(c: char) -> bool {
    (HIRAGANA_START..=HIRAGANA_END).contains(&c)
}

/// Map every hiragana char to katakana; everything else passes through.
///
/// Char count is preserved.
pub fn normalize(input: &str) -> String {
    input.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    if !is_hiragana(c) {
        return c;
    }
    // U+30A1..=U+30F3 are all assigned katakana, so this never falls back
    char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(normalize("ぴかちゅう"), "ピカチュウ");
        assert_eq!(normalize("ふしぎだね"), "フシギダネ");
        assert_eq!(normalize("ぁん"), "ァン");
    }

    #[test]
    fn test_other_scripts_pass_through() {
        assert_eq!(normalize("ピカチュウ"), "ピカチュウ");
        assert_eq!(normalize("Pikachu 25"), "Pikachu 25");
        assert_eq!(normalize("ー・🔥"), "ー・🔥");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(normalize("ミュうつー"), "ミュウツー");
    }

    #[test]
    fn test_block_boundaries() {
        // just outside the folded range
        assert_eq!(normalize("\u{3040}"), "\u{3040}");
        assert_eq!(normalize("\u{3094}"), "\u{3094}");
        assert_eq!(normalize("\u{3041}"), "\u{30A1}");
        assert_eq!(normalize("\u{3093}"), "\u{30F3}");
    }

    #[test]
    fn test_length_preserved_and_non_hiragana_untouched() {
        let samples = ["", "abc", "ぽけもん", "ポケモン", "ぽケもン!", "é漢字ゑゐ", "🐲ドラゴン"];

        for sample in samples {
            let folded = normalize(sample);
            assert_eq!(folded.chars().count(), sample.chars().count());

            for (before, after) in sample.chars().zip(folded.chars()) {
                if is_hiragana(before) {
                    assert_eq!(after as u32, before as u32 + KATAKANA_OFFSET);
                } else {
                    assert_eq!(after, before);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("ぴかちゅう");
        assert_eq!(normalize(&once), once);
    }
}
