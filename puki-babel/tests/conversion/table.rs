//! Source / expected pairs collected from real wiki pages.

use puki_babel::convert;
use rstest::rstest;

#[rstest]
#[case::empty("", "")]
#[case::plain("Hello World", "Hello World")]
#[case::headings("* Header1\n** Header2", "# Header1\n## Header2")]
#[case::heading_anchor("*** Header [#anchor]", "### Header")]
#[case::link("[[page name]]", "[page name](docs/page-name)")]
#[case::line_break("Text with~\nnext line", "Text with<br />\nnext line")]
fn basics(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[rstest]
#[case::size(
    "&size(24){big text}",
    "<span style=\"font-size:24px;\">big text</span>"
)]
#[case::freeze("#freeze\n本文", "本文")]
#[case::freeze_with_date("#freeze(2025-11-29)\n次の行", "次の行")]
#[case::br("&br;", "<br />")]
#[case::counter("&counter(test)", "<!-- counter test -->")]
#[case::online("&online", "<!-- online users -->")]
#[case::centered_total(
    "CENTER:&size(18){''計：90''};&br;",
    "<span style=\"font-size:18px;\"><strong>計：90</strong></span><br />"
)]
#[case::recent("#recent(10)\n\nContent", "\nContent")]
#[case::new("&new{2008-02-10 (日) 22:00:39}", "2008-02-10 (日) 22:00:39")]
#[case::new_semicolon("&new{2008-02-10 (日) 22:00:39};", "2008-02-10 (日) 22:00:39")]
#[case::comment_line(
    "- コメント -- [[管理者]] &new{2008-02-10 (日) 10:31:07};",
    "- コメント -- [管理者](docs/管理者) 2008-02-10 (日) 10:31:07"
)]
fn macros_and_directives(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[rstest]
#[case::glued("* タイトル~続き", "# タイトル~続き")]
#[case::spaced("*** サブタイトル ~ 続き", "### サブタイトル ~ 続き")]
fn headings_keep_tilde(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[rstest]
#[case::header_cell_bold("|~''番号''|値|", "|<strong>番号</strong>|値|")]
#[case::header_cell_size(
    "|~&size(18){Q.};|B|",
    "|<span style=\"font-size:18px;\">Q.</span>|B|"
)]
#[case::separator("|a|b|c|\n|d|e|f|", "|a|b|c|\n|---|---|---|\n|d|e|f|")]
#[case::header_row_alignment(
    "|場所|CENTER:容量|備考|h\n|A|10|note|",
    "|場所|容量|備考|\n|---|---|---|\n|A|10|note|"
)]
#[case::row_span_and_text(
    "|a|~|b|\nOutside ~ text",
    "|a||b|\n\nOutside <br /> text"
)]
#[case::empty_cells("|~|40|~||", "||40|||")]
#[case::empty_cells_two_rows(
    "|~|40|~||\n|A|B|C|D|",
    "||40|||\n|---|---|---|---|\n|A|B|C|D|"
)]
#[case::styled_tail(
    "|会議室A|10|備考|h<span style=\"font-size:18px\">''計：90''</span>;~",
    "|会議室A|10|備考|\n\n<span style=\"font-size:18px\">''計：90''</span>;<br />"
)]
#[case::tails_after_table(
    "|a|b|h<span>A</span>~\n|c|d|<span>B</span>",
    "|a|b|\n|---|---|\n|c|d|\n\n<span>A</span><br />\n<span>B</span>"
)]
#[case::text_after_table("|a|b|\n次の行", "|a|b|\n\n次の行")]
#[case::trailing_spaces("|a|b|   \n|c|d|", "|a|b|\n|---|---|\n|c|d|")]
#[case::aligned_text_after_table("|a|b|\nCENTER:小計", "|a|b|\n\n小計")]
fn tables(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[rstest]
#[case::flat("- item1\n- item2", "- item1\n- item2")]
#[case::nested("- a\n-- b\n--- c", "- a\n  - b\n    - c")]
#[case::surrounded(
    "冒頭テキスト\n- a\n- b\n末尾テキスト",
    "冒頭テキスト\n\n- a\n- b\n\n末尾テキスト"
)]
#[case::styled_item(
    "- &size(18){大}&br;小",
    "- <span style=\"font-size:18px;\">大</span><br />小"
)]
#[case::table_after_list("- a\n|x|y|\n|1|2|", "- a\n\n|x|y|\n|---|---|\n|1|2|")]
#[case::indented_continuation(
    "- aaaa\n  bbbb\n  - cccc",
    "- aaaa<br />\n  bbbb\n  - cccc"
)]
#[case::tilde_continuation(
    "-対戦する当人同士しか対戦の様子を確認できませんので、原則的に''自己申告制''です。~\nお互いにルールを守って楽しい対戦会にしましょう！",
    "- 対戦する当人同士しか対戦の様子を確認できませんので、原則的に<strong>自己申告制</strong>です。<br />\n  お互いにルールを守って楽しい対戦会にしましょう！"
)]
#[case::ordered("+ a\n++ b", "1. a\n  1. b")]
#[case::ordered_forced_continuation("+~ 見出し\n 継続行", "1. 見出し<br />\n  継続行")]
#[case::ideographic_space_not_indent("\u{3000}- 全角インデント", "\u{3000}- 全角インデント")]
fn lists(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[rstest]
#[case::alias_anchor("[[参考資料>ガイド#sec1]]", "[参考資料](docs/ガイド#sec1)")]
#[case::nested_slug("[[ガイド/第1章～導入]]", "[第1章～導入](docs/ガイド/第1章-導入)")]
#[case::external_alias("[[公式>http://example.com]]", "[公式](http://example.com)")]
#[case::label_colon_url(
    "[[ニュース記事:http://example.com/news]]",
    "[ニュース記事](http://example.com/news)"
)]
#[case::link_in_list(
    "-[[ニュース記事:http://example.com/news]]（配信元）",
    "- [ニュース記事](http://example.com/news)（配信元）"
)]
#[case::japanese_page("[[使い方]]", "[使い方](docs/使い方)")]
#[case::anchor_without_page("[[label>#a]]", "[label](docs/#a)")]
#[case::empty_target("[[label>]]", "[label]()")]
fn links(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}

#[rstest]
#[case::bold_and_italic(
    "''bold'' と '''italic'''",
    "<strong>bold</strong> と <em>italic</em>"
)]
#[case::nested("'''a ''b'' c'''", "<em>a <strong>b</strong> c</em>")]
#[case::quotes(">引用\n>>多段", "> 引用\n>> 多段")]
fn emphasis_and_quotes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(convert(input), expected);
}
