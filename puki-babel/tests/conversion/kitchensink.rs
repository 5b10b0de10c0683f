//! A page touching most rules at once.

use insta::assert_snapshot;
use puki_babel::{convert, trace, STAGES};

const KITCHENSINK: &str = "* ガイド [#top]
#freeze
&size(20){ようこそ}&br;''PukiWiki'' から移行しました。~
詳しくは [[使い方]] を参照。

- 手順1
-- 手順1.1

+ 番号1
++ 番号1.1

|~項目|CENTER:値|h
|A|''1''|

>引用";

#[test]
fn kitchensink() {
    assert_snapshot!(convert(KITCHENSINK), @r#"
# ガイド
<span style="font-size:20px;">ようこそ</span><br /><strong>PukiWiki</strong> から移行しました。<br />
詳しくは [使い方](docs/使い方) を参照。

- 手順1
  - 手順1.1

1. 番号1
  1. 番号1.1

|項目|値|
|---|---|
|A|<strong>1</strong>|

> 引用
"#);
}

#[test]
fn kitchensink_trace_ends_with_conversion() {
    let snapshots = trace(KITCHENSINK);
    assert_eq!(snapshots.len(), STAGES.len());
    assert_eq!(
        snapshots.last().map(|s| s.content.clone()),
        Some(convert(KITCHENSINK))
    );

    let after_headings = &snapshots[1];
    assert_eq!(after_headings.stage, "headings");
    assert!(after_headings.content.starts_with("# ガイド\n&size(20)"));
}
