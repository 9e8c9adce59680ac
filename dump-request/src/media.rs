//! 从本地读要上传的文件
use anyhow::{anyhow, Context, Result};
use regex::{Regex, RegexBuilder};
use std::path::Path;
use weixin::Media;

lazy_static::lazy_static! {
    static ref EXT_PATTERN: Regex = RegexBuilder::new(r"\.([a-z0-9]+)$")
        .case_insensitive(true)
        .build().unwrap();
}

/// 按扩展名猜 content type，只认微信支持的格式
pub fn content_type(filename: &str) -> &'static str {
    let ext = EXT_PATTERN
        .captures(filename)
        .and_then(|cap| cap.get(1))
        .map(|mat| mat.as_str().to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("mp3") => "audio/mpeg",
        Some("wma") => "audio/x-ms-wma",
        Some("wav") => "audio/wav",
        Some("amr") => "audio/amr",
        Some("mp4") => "video/mp4",
        _ => {
            info!("unknown ext of {}, using application/octet-stream", filename);
            "application/octet-stream"
        }
    }
}

pub fn load(path: &Path) -> Result<Media> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("invalid media path {}", path.display()))?;
    let data = std::fs::read(path).with_context(|| format!("读取 {} 失败", path.display()))?;
    debug!(
        "media {} loaded, size = {:.2} MiB",
        filename,
        data.len() as f64 / 1024. / 1024.
    );
    Ok(Media::new(filename, content_type(filename), data))
}
