//! Properties that hold for whole families of inputs.

use proptest::prelude::*;
use puki_babel::convert;

/// Lines made only of characters no rule reacts to.
fn plain_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 ,.ぁ-んァ-ン一-龠]{0,30}", 0..6).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn plain_text_is_unchanged(text in plain_text()) {
        prop_assert_eq!(convert(&text), text);
    }

    #[test]
    fn table_gets_one_separator(columns in 1usize..10) {
        let row = |c: char| format!("|{}|", vec![c.to_string(); columns].join("|"));
        let out = convert(&format!("{}\n{}", row('a'), row('b')));
        let lines: Vec<&str> = out.split('\n').collect();

        prop_assert_eq!(lines.len(), 3);
        prop_assert_eq!(lines[1].to_string(), format!("|{}", "---|".repeat(columns)));
        prop_assert_eq!(lines.iter().filter(|l| l.contains("---")).count(), 1);
    }

    #[test]
    fn row_tail_moves_below_table(tail in "[a-gi-z][a-z]{0,7}") {
        let out = convert(&format!("|a|b|{tail}"));
        prop_assert_eq!(out, format!("|a|b|\n\n{tail}"));
    }

    #[test]
    fn marker_count_sets_indent(depth in 1usize..8) {
        let out = convert(&format!("{} item", "-".repeat(depth)));
        prop_assert_eq!(out, format!("{}- item", "  ".repeat(depth - 1)));
    }
}

#[test]
fn headings_are_idempotent() {
    let once = convert("* 見出し [#a1]\n** 小見出し");
    assert_eq!(convert(&once), once);
}

#[test]
fn emphasis_is_idempotent() {
    let once = convert("'''a ''b'' c''' と ''d''");
    assert_eq!(once, "<em>a <strong>b</strong> c</em> と <strong>d</strong>");
    assert_eq!(convert(&once), once);
}

#[test]
fn paragraphs_are_idempotent() {
    let src = "一段落目の文章。\n\n二段落目の文章。";
    assert_eq!(convert(src), src);
    assert_eq!(convert(&convert(src)), src);
}

