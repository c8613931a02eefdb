mod common;

use std::fs;

use common::{component_dir, touch};
use compsrt::{remove_duplicates, Config, Error, Layout};

#[test]
fn deletes_listed_files_and_lists_the_rest() {
    let (tmp, config) = component_dir(&[
        "Verse.tsx",
        "Verse.module.css",
        "VerseSpeedDial.tsx",
        "index.ts",
        "Unlisted.tsx",
    ]);
    fs::create_dir(tmp.path().join("ui")).unwrap();
    fs::create_dir(tmp.path().join("common")).unwrap();

    let report = remove_duplicates(&config, &Layout::default()).unwrap();

    // Recorded in list order, not directory order
    assert_eq!(
        report.deleted,
        ["Verse.tsx", "Verse.module.css", "VerseSpeedDial.tsx"]
    );
    assert!(!tmp.path().join("Verse.tsx").exists());
    assert_eq!(report.remaining.files, ["Unlisted.tsx", "index.ts"]);
    assert_eq!(report.remaining.dirs, ["common", "ui"]);
}

#[test]
fn second_run_deletes_nothing() {
    let (_tmp, config) = component_dir(&["PageHeader.tsx", "PageHeader.module.css"]);
    let layout = Layout::default();

    assert_eq!(remove_duplicates(&config, &layout).unwrap().deleted.len(), 2);
    let rerun = remove_duplicates(&config, &layout).unwrap();
    assert!(rerun.deleted.is_empty());
    assert!(rerun.remaining.files.is_empty());
}

#[test]
fn files_inside_category_directories_are_untouched() {
    let (tmp, config) = component_dir(&[]);
    let ui = tmp.path().join("ui");
    fs::create_dir(&ui).unwrap();
    touch(&ui, "DarkModeToggle.tsx");

    let report = remove_duplicates(&config, &Layout::default()).unwrap();

    assert!(report.deleted.is_empty());
    assert!(ui.join("DarkModeToggle.tsx").exists());
}

#[test]
fn custom_duplicate_list_is_honoured() {
    let (tmp, config) = component_dir(&["Old.jsx", "Verse.tsx"]);
    let layout = Layout::from_toml(r#"duplicates = ["Old.jsx"]"#).unwrap();

    let report = remove_duplicates(&config, &layout).unwrap();

    assert_eq!(report.deleted, ["Old.jsx"]);
    assert!(tmp.path().join("Verse.tsx").exists());
}

#[test]
fn missing_base_directory_is_rejected() {
    let (tmp, _) = component_dir(&[]);
    let config = Config::new(false, tmp.path().join("nope"));

    let err = remove_duplicates(&config, &Layout::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidPath(_)));
}
