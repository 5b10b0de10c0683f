//! Page name → URL slug mapping.

/// Turns a page name into the identifier used in output paths and links.
///
/// Letters and digits (any script) are kept, `/` is kept so nested pages keep
/// their path structure, and every other character becomes `-`. There is no
/// case folding, trimming or hyphen collapsing, so the slug always has the
/// same number of characters as the name.
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '/' || c.is_alphanumeric() {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", "")]
    #[case::plain("hello", "hello")]
    #[case::space("hello world", "hello-world")]
    #[case::slash("hello/world", "hello/world")]
    #[case::japanese("テストページ", "テストページ")]
    #[case::mixed("test page テスト", "test-page-テスト")]
    #[case::nested("a/b/c", "a/b/c")]
    #[case::digits("page123", "page123")]
    #[case::punctuation("第1章～導入", "第1章-導入")]
    #[case::no_collapse("a  b", "a--b")]
    fn test_slugify(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    proptest! {
        #[test]
        fn slug_keeps_char_count(name in "\\PC*") {
            prop_assert_eq!(slugify(&name).chars().count(), name.chars().count());
        }

        #[test]
        fn slug_maps_each_char(name in "\\PC*") {
            for (src, dst) in name.chars().zip(slugify(&name).chars()) {
                if src == '/' || src.is_alphanumeric() {
                    prop_assert_eq!(src, dst);
                } else {
                    prop_assert_eq!(dst, '-');
                }
            }
        }
    }
}
