use std::path::Path;
use tokio::fs;

/// Write an uploaded image into `dir` under a name derived from the upload
/// timestamp plus the original file's extension, and return its public
/// relative URL.
///
/// Two uploads landing in the same millisecond get the same name; the later
/// write wins.
pub async fn save_image(
    dir: &Path,
    original_name: &str,
    data: &[u8],
) -> Result<String, std::io::Error> {
    fs::create_dir_all(dir).await?;

    let filename = format!(
        "{}{}",
        chrono::Utc::now().timestamp_millis(),
        extension_of(original_name)
    );
    fs::write(dir.join(&filename), data).await?;

    Ok(format!("/uploads/{filename}"))
}

/// Extension of the original filename including the leading dot, or empty
/// if it has none.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
