use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_wiki(root: &Path) {
    let wiki = root.join("wiki");
    fs::create_dir_all(&wiki).unwrap();
    fs::write(wiki.join(format!("{}.txt", hex::encode_upper("Home"))), "* ようこそ\n[[使い方]]").unwrap();
    fs::write(wiki.join(format!("{}.txt", hex::encode_upper("使い方"))), "- a\n-- b").unwrap();
    fs::write(
        wiki.join(format!("{}.txt", hex::encode_upper("ガイド/第1章"))),
        "|a|b|\n|c|d|",
    )
    .unwrap();
    fs::write(
        root.join("pukiwiki.ini.php"),
        "<?php\n$defaultpage = 'Home';\n",
    )
    .unwrap();
}

#[test]
fn converts_site_into_hugo_tree() {
    let wiki = tempdir().unwrap();
    let site = tempdir().unwrap();
    write_wiki(wiki.path());

    let mut cmd = cargo_bin_cmd!("pukiwiki2hugo");
    cmd.arg("convert")
        .arg("-i")
        .arg(wiki.path())
        .arg("-o")
        .arg(site.path());
    cmd.assert().success();

    let front = fs::read_to_string(site.path().join("content/_index.md")).unwrap();
    assert!(front.starts_with("---\ntitle: \"Home\"\n"));
    assert!(front.ends_with("# ようこそ\n[使い方](docs/使い方)"));

    let usage = fs::read_to_string(site.path().join("content/docs/使い方/_index.md")).unwrap();
    assert!(usage.ends_with("- a\n  - b"));

    let chapter =
        fs::read_to_string(site.path().join("content/docs/ガイド/第1章/_index.md")).unwrap();
    assert!(chapter.contains("title: \"第1章\"\n"));
    assert!(chapter.ends_with("|a|b|\n|---|---|\n|c|d|"));

    assert!(!site.path().join("gone-redirects.yaml").exists());
}

#[test]
fn gone_flag_writes_redirect_mapping() {
    let wiki = tempdir().unwrap();
    let site = tempdir().unwrap();
    write_wiki(wiki.path());

    let mut cmd = cargo_bin_cmd!("pukiwiki2hugo");
    cmd.arg("convert")
        .arg("-i")
        .arg(wiki.path())
        .arg("-o")
        .arg(site.path())
        .arg("-g");
    cmd.assert().success();

    let mapping = fs::read_to_string(site.path().join("gone-redirects.yaml")).unwrap();
    assert!(mapping.contains("- url: \"/wiki/Home\"\n  code: 410\n"));
    assert!(mapping.contains("- url: \"/wiki/ガイド/第1章\"\n  code: 410\n"));
}

#[test]
fn config_file_sets_paths_and_redirects() {
    let wiki = tempdir().unwrap();
    let site = tempdir().unwrap();
    write_wiki(wiki.path());

    let config_path = site.path().join("puki.toml");
    fs::write(
        &config_path,
        format!(
            "[source]\nroot = {:?}\n\n[output]\nroot = {:?}\ndraft = true\n\n[redirects]\nenabled = true\nurl_prefix = \"/old/\"\nstatus = 301\n",
            wiki.path().display().to_string(),
            site.path().join("out").display().to_string(),
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("pukiwiki2hugo");
    cmd.arg("convert").arg("--config").arg(config_path.as_os_str());
    cmd.assert().success();

    let out = site.path().join("out");
    let front = fs::read_to_string(out.join("content/_index.md")).unwrap();
    assert!(front.contains("draft: true\n"));

    let mapping = fs::read_to_string(out.join("gone-redirects.yaml")).unwrap();
    assert!(mapping.contains("- url: \"/old/使い方\"\n  code: 301\n"));
}

#[test]
fn invalid_page_file_name_fails() {
    let wiki = tempdir().unwrap();
    let site = tempdir().unwrap();
    fs::create_dir_all(wiki.path().join("wiki")).unwrap();
    fs::write(wiki.path().join("wiki/not-hex.txt"), "x").unwrap();

    let mut cmd = cargo_bin_cmd!("pukiwiki2hugo");
    cmd.arg("convert")
        .arg("-i")
        .arg(wiki.path())
        .arg("-o")
        .arg(site.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("not-hex"));
}
