//! Entry file codec
//!
//! Entry files are named `{index:07}__{video_id}.json`. The zero-padded
//! index is the only persisted ordering: sorting file names sorts entries.

use crate::error::{ArchiveError, Result};
use crate::model::{FilenameInfo, VideoEntry};
use regex::Regex;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Width of the zero-padded index in entry file names
pub const INDEX_PADDING: usize = 7;

/// Gap between consecutive freshly allocated indices
pub const INDEX_STEP: u64 = 10;

/// Characters allowed in a video ID
const VIDEO_ID_PATTERN: &str = r"[\w\-]+";

fn filename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"^(?P<index>[0-9]+)__(?P<video_id>{VIDEO_ID_PATTERN})\.json$"
        ))
        .expect("entry file name pattern is valid")
    })
}

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("^{VIDEO_ID_PATTERN}$")).expect("video ID pattern is valid")
    })
}

/// Check that `video_id` can be stored in an entry file name
pub fn validate_video_id(video_id: &str) -> Result<()> {
    if video_id_pattern().is_match(video_id) {
        Ok(())
    } else {
        Err(ArchiveError::parse(
            video_id,
            "video ID may only contain letters, digits, '_' and '-'",
        ))
    }
}

/// Sparse index for the entry at `position` (0-based): 10, 20, 30, ...
pub fn sparse_index(position: usize) -> u64 {
    INDEX_STEP + INDEX_STEP * position as u64
}

/// Build the file name for an entry
pub fn encode_filename(index: u64, video_id: &str) -> String {
    format!("{index:0width$}__{video_id}.json", width = INDEX_PADDING)
}

/// Split an entry file name into its index and video ID
pub fn decode_filename(filename: &str) -> Result<FilenameInfo> {
    let captures = filename_pattern()
        .captures(filename)
        .ok_or_else(|| ArchiveError::parse(filename, "not a video entry file name"))?;

    let index = captures["index"]
        .parse::<u64>()
        .map_err(|e| ArchiveError::parse(filename, format!("invalid index: {e}")))?;

    Ok(FilenameInfo {
        index,
        video_id: captures["video_id"].to_string(),
    })
}

/// Decode the file name component of `path`
pub fn decode_path(path: &Path) -> Result<FilenameInfo> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ArchiveError::parse(path, "file name is not valid UTF-8"))?;
    decode_filename(filename)
}

/// Whether a path looks like an entry file (`*.json`)
pub(crate) fn has_json_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}

/// Number of `*.json` files directly inside `dir`
fn count_json_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for item in fs::read_dir(dir).map_err(|e| ArchiveError::io(dir, e))? {
        let item = item.map_err(|e| ArchiveError::io(dir, e))?;
        if has_json_extension(&item.path()) {
            count += 1;
        }
    }
    Ok(count)
}

/// Write an entry into `dir`
///
/// Fails with [`ArchiveError::Parse`] before touching the directory when the
/// video ID would not decode back from the file name.
/// An entry without a `file_index` gets the next sparse index, computed from
/// the number of entry files already in `dir`. The assigned index is stored
/// back into the entry. Returns the written path.
pub fn write_entry(entry: &mut VideoEntry, dir: &Path) -> Result<PathBuf> {
    validate_video_id(&entry.video_id)?;
    if !dir.is_dir() {
        return Err(ArchiveError::not_found(dir));
    }

    let index = match entry.file_index {
        Some(index) => index,
        None => {
            let index = sparse_index(count_json_files(dir)?);
            entry.file_index = Some(index);
            index
        }
    };

    let path = dir.join(encode_filename(index, &entry.video_id));
    let file = fs::File::create(&path).map_err(|e| ArchiveError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &*entry)
        .map_err(|e| ArchiveError::io(&path, e.into()))?;
    writer.flush().map_err(|e| ArchiveError::io(&path, e))?;

    log::debug!("Wrote entry {:?}", path);
    Ok(path)
}

/// Read an entry file, taking its `file_index` from the file name
pub fn read_entry(path: &Path) -> Result<VideoEntry> {
    if !path.exists() {
        return Err(ArchiveError::not_found(path));
    }

    let info = decode_path(path)?;
    let raw = fs::read_to_string(path).map_err(|e| ArchiveError::io(path, e))?;
    let mut entry: VideoEntry =
        serde_json::from_str(&raw).map_err(|e| ArchiveError::parse(path, e.to_string()))?;
    entry.file_index = Some(info.index);

    Ok(entry)
}
