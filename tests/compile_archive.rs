//! End-to-end tests over a temporary archive

use playlist_compiler::error::ErrorKind;
use playlist_compiler::{compile, create_entry, reallocate, update_entry, validate_output};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_entry_file(dir: &Path, name: &str, title: &str, video_id: &str) {
    let body = format!(
        r#"{{"title": "{title}", "author": "Someone", "duration": "00:03:00", "video_id": "{video_id}"}}"#
    );
    fs::write(dir.join(name), body).unwrap();
}

/// Archive with a `_Favorites` playlist holding abc and def
fn favorites_archive() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("archive");
    let output = temp.path().join("output");
    let favorites = archive.join("_Favorites");
    fs::create_dir_all(&favorites).unwrap();
    fs::create_dir_all(&output).unwrap();

    write_entry_file(&favorites, "0000010__abc.json", "First", "abc");
    write_entry_file(&favorites, "0000020__def.json", "Second", "def");

    (temp, archive, output)
}

fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_compile_favorites_archive() {
    let (_temp, archive, output) = favorites_archive();

    let report = compile(&archive, &output).unwrap();
    assert_eq!(report.playlists, 1);
    assert_eq!(report.entries, 2);
    assert!(report.stale_outputs.is_empty());

    let index = fs::read_to_string(output.join("index")).unwrap();
    assert_eq!(
        index,
        r#"{"favorite":"favorites","playlists":[{"name":"Favorites","id":"favorites"}]}"#
    );

    let playlist: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.join("favorites")).unwrap()).unwrap();
    let videos = playlist.as_array().unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0]["video_id"], "abc");
    assert_eq!(videos[1]["video_id"], "def");
    assert!(videos[0].get("file_index").is_none());

    let summary = validate_output(&output).unwrap();
    assert_eq!(summary.playlists, 1);
    assert_eq!(summary.entries, 2);
}

#[test]
fn test_compile_missing_output_dir() {
    let (temp, archive, _output) = favorites_archive();
    let err = compile(&archive, &temp.path().join("nowhere")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_compile_reports_stale_output() {
    let (_temp, archive, output) = favorites_archive();
    fs::write(output.join("removed-playlist"), "[]").unwrap();

    let report = compile(&archive, &output).unwrap();
    assert_eq!(report.stale_outputs, vec![output.join("removed-playlist")]);
    assert!(output.join("removed-playlist").exists());
}

#[test]
fn test_create_assigns_sparse_indices() {
    let temp = TempDir::new().unwrap();
    let rock = temp.path().join("Rock");
    fs::create_dir(&rock).unwrap();

    for id in ["one", "two", "three"] {
        create_entry(temp.path(), "Rock", "Title", "Author", "00:01:00", id).unwrap();
    }

    assert_eq!(
        entry_names(&rock),
        vec![
            "0000010__one.json",
            "0000020__two.json",
            "0000030__three.json",
        ]
    );
}

#[test]
fn test_create_in_favorite_playlist_by_plain_name() {
    let (_temp, archive, _output) = favorites_archive();
    let path = create_entry(&archive, "Favorites", "Third", "Author", "00:02:00", "ghi").unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "0000030__ghi.json"
    );
}

#[test]
fn test_create_unknown_playlist() {
    let (_temp, archive, _output) = favorites_archive();
    let err = create_entry(&archive, "Jazz", "T", "A", "00:00:01", "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownPlaylist);
}

#[test]
fn test_update_keeps_index() {
    let (_temp, archive, _output) = favorites_archive();
    let favorites = archive.join("_Favorites");

    update_entry(&archive, "Favorites", "abc", "xyz", Some("00:04:00")).unwrap();

    assert_eq!(
        entry_names(&favorites),
        vec!["0000010__xyz.json", "0000020__def.json"]
    );
    let body: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(favorites.join("0000010__xyz.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(body["video_id"], "xyz");
    assert_eq!(body["duration"], "00:04:00");
    assert_eq!(body["title"], "First");
}

#[test]
fn test_update_unknown_video_leaves_playlist_untouched() {
    let (_temp, archive, _output) = favorites_archive();
    let favorites = archive.join("_Favorites");
    let before = entry_names(&favorites);

    let err = update_entry(&archive, "Favorites", "missing", "xyz", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownVideo);
    assert_eq!(entry_names(&favorites), before);
}

#[test]
fn test_reallocate_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let mix = temp.path().join("Mix");
    fs::create_dir(&mix).unwrap();
    write_entry_file(&mix, "0000013__a.json", "A", "a");
    write_entry_file(&mix, "0000015__b.json", "B", "b");
    write_entry_file(&mix, "0000100__c.json", "C", "c");

    reallocate(temp.path()).unwrap();
    let first = entry_names(&mix);
    assert_eq!(
        first,
        vec!["0000010__a.json", "0000020__b.json", "0000030__c.json"]
    );

    let report = reallocate(temp.path()).unwrap();
    assert_eq!(report.renamed, 0);
    assert_eq!(entry_names(&mix), first);
}

#[test]
fn test_rejected_ids_keep_archive_compilable() {
    let (_temp, archive, output) = favorites_archive();
    let favorites = archive.join("_Favorites");
    let before = entry_names(&favorites);

    let err = update_entry(&archive, "Favorites", "abc", "def", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateVideo);
    let err = create_entry(&archive, "Favorites", "T", "A", "00:01:00", "def").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateVideo);
    let err = create_entry(&archive, "Favorites", "T", "A", "00:01:00", "a.b").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    let err = update_entry(&archive, "Favorites", "abc", "x y", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);

    assert_eq!(entry_names(&favorites), before);
    reallocate(&archive).unwrap();
    assert_eq!(compile(&archive, &output).unwrap().entries, 2);
}
