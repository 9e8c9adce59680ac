//! 图文文件，格式：
//!
//! ```toml
//! [[articles]]
//! title = "标题"
//! thumb_media_id = "THUMB_MEDIA_ID"
//! show_cover_pic = true
//! content = "<p>正文</p>"
//! ```
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// 读出 `articles` 字段，转成 JSON 交给 [`weixin::material::articles`] 检查
pub fn load(path: &Path) -> Result<Value> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("读取 {} 失败", path.display()))?;
    parse(&content).with_context(|| format!("解析 {} 失败", path.display()))
}

pub fn parse(content: &str) -> Result<Value> {
    let doc: toml::Value = toml::from_str(content)?;
    match doc.get("articles") {
        Some(articles) => Ok(serde_json::to_value(articles)?),
        None => {
            warn!("no `articles` found in news file");
            Ok(Value::Null)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;
    use weixin::{ArticleBatch, Error};

    #[test]
    fn parse_two_articles() {
        let v = parse(
            r#"
            [[articles]]
            title = "T"
            thumb_media_id = "m1"
            show_cover_pic = true
            content = "c"

            [[articles]]
            title = "T2"
            thumb_media_id = "m2"
            content = "c2"
            content_source_url = "https://example.com"
        "#,
        )
        .unwrap();
        let batch = ArticleBatch::try_from(v).unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch.get(0).unwrap().show_cover_pic);
        assert!(!batch.get(1).unwrap().show_cover_pic);
        assert_eq!(batch.get(1).unwrap().content_source_url, "https://example.com");
    }

    #[test]
    fn articles_must_be_an_array() {
        let v = parse(
            r#"
            [articles]
            title = "T"
        "#,
        )
        .unwrap();
        assert!(matches!(
            weixin::material::articles(v),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn missing_articles() {
        let v = parse("title = \"T\"").unwrap();
        assert_eq!(v, Value::Null);
        assert!(matches!(
            ArticleBatch::try_from(v),
            Err(Error::InvalidArgument(_))
        ));
    }
}
