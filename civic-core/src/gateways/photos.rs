use anyhow::Result as Fallible;

use crate::entities::*;

pub const PHOTO_FOLDER: &str = "uploads";

/// Object storage for issue photos.
pub trait PhotoStorageGateway {
    /// Stores the object under the given path and returns its public URL.
    fn store(&self, path: &str, data: &[u8]) -> Fallible<String>;
}

/// Storage path of an uploaded photo: `uploads/<unix-millis>[-<name>]`.
///
/// The name is reduced to a safe file name. Without a name the
/// photo is stored as JPEG.
pub fn photo_path(created_at: Timestamp, original_name: Option<&str>) -> String {
    let millis = created_at.as_millis();
    match original_name.map(sanitize_file_name).filter(|n| !n.is_empty()) {
        Some(name) => format!("{PHOTO_FOLDER}/{millis}-{name}"),
        None => format!("{PHOTO_FOLDER}/{millis}.jpg"),
    }
}

fn sanitize_file_name(name: &str) -> String {
    let name = name.rsplit(['/', '\\']).next().unwrap_or_default();
    name.chars()
        .filter_map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => Some(c),
            ' ' => Some('_'),
            _ => None,
        })
        .collect::<String>()
        .trim_start_matches('.')
        .to_owned()
}
