//! 永久素材管理
//!
//! 除了三天就过期的临时素材，公众号还可以把素材永久保存下来。永久素材有数量上限：
//! 图文和图片 5000 个，其他类型 1000 个。格式和大小限制和公众平台官网一致。
use serde_json::Map;
use std::convert::TryInto;
use std::fmt;
use std::str::FromStr;

use crate::{descriptor::Media, Error, RequestDescriptor, Result, API_HOST};

mod article;
pub use article::{Article, ArticleBatch};

fn url(api: &str) -> String {
    format!("{}/cgi-bin/material/{}", API_HOST, api)
}

/// 列表接口能查的素材类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Image,
    Voice,
    Video,
    /// 图文
    News,
}

impl MaterialType {
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialType::Image => "image",
            MaterialType::Voice => "voice",
            MaterialType::Video => "video",
            MaterialType::News => "news",
        }
    }
}

impl Default for MaterialType {
    fn default() -> Self {
        MaterialType::News
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(MaterialType::Image),
            "voice" => Ok(MaterialType::Voice),
            "video" => Ok(MaterialType::Video),
            "news" => Ok(MaterialType::News),
            _ => Err(Error::InvalidArgument(format!(
                "unknown material type {:?}, expected image/voice/video/news",
                s
            ))),
        }
    }
}

/// 可以上传的媒体文件类型
///
/// - image: bmp/png/jpeg/jpg/gif
/// - voice: mp3/wma/wav/amr，不超过 60 秒
/// - video: mp4
/// - thumb: 缩略图，jpg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Voice,
    Video,
    Thumb,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Voice => "voice",
            MediaType::Video => "video",
            MediaType::Thumb => "thumb",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(MediaType::Image),
            "voice" => Ok(MediaType::Voice),
            "video" => Ok(MediaType::Video),
            "thumb" => Ok(MediaType::Thumb),
            _ => Err(Error::InvalidArgument(format!(
                "unknown media type {:?}, expected image/voice/video/thumb",
                s
            ))),
        }
    }
}

/// 分页拉素材列表的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchGetArgs {
    pub r#type: MaterialType,
    /// 从第几个素材开始，0 是第一个
    pub offset: u32,
    /// 取值 1 到 20，这里不检查，超出范围让微信报错
    pub count: u32,
}

impl Default for BatchGetArgs {
    fn default() -> Self {
        Self {
            r#type: MaterialType::News,
            offset: 0,
            count: 20,
        }
    }
}

/// 永久素材的总数，按类型分别计数
pub fn get_count() -> RequestDescriptor {
    RequestDescriptor::get(url("get_materialcount"))
}

/// 分页获取永久素材列表
pub fn batch_get(args: BatchGetArgs) -> RequestDescriptor {
    if !(1..=20).contains(&args.count) {
        warn!(
            "batchget_material count = {} is out of 1..=20, Weixin will likely reject it",
            args.count
        );
    }
    RequestDescriptor::post(
        url("batchget_material"),
        json!({
            "type": args.r#type,
            "offset": args.offset,
            "count": args.count,
        }),
    )
}

/// 新增其他类型的永久素材
pub fn upload_material(r#type: MediaType, media: Media) -> RequestDescriptor {
    RequestDescriptor::upload(url("add_material"), media, Map::new())
        .parameter("type", r#type.as_str())
}

/// 删除永久素材，media id 可以从素材列表拿到
pub fn delete_material(media_id: &str) -> RequestDescriptor {
    RequestDescriptor::post(url("del_material"), json!({ "media_id": media_id }))
}

/// 新增单条永久图文
#[allow(clippy::too_many_arguments)]
pub fn article(
    title: &str,
    thumb_media_id: &str,
    author: &str,
    digest: &str,
    show_cover_pic: bool,
    content: &str,
    content_source_url: &str,
) -> RequestDescriptor {
    let article = Article {
        title: title.to_string(),
        thumb_media_id: thumb_media_id.to_string(),
        author: author.to_string(),
        digest: digest.to_string(),
        show_cover_pic,
        content: content.to_string(),
        content_source_url: content_source_url.to_string(),
    };
    RequestDescriptor::post(url("add_news"), json!({ "articles": [article] }))
}

/// 往图文列表末尾追加一篇，返回新的列表。
///
/// `article` 为 `None` 时原样返回 `batch`；传单篇 [`Article`] 当作 `batch`
/// 时会先变成只有这一篇的列表。
pub fn add_article(article: Option<Article>, batch: impl Into<ArticleBatch>) -> ArticleBatch {
    let batch = batch.into();
    match article {
        Some(article) => batch.push(article),
        None => {
            debug!("no article given, batch of {} left untouched", batch.len());
            batch
        }
    }
}

/// 一次新增多篇永久图文。
///
/// 用 [`add_article`] 拼出来的列表总是合法的；从 JSON 转过来的值如果不是文章数组，
/// 返回 [`Error::InvalidArgument`]。
pub fn articles<B>(batch: B) -> Result<RequestDescriptor>
where
    B: TryInto<ArticleBatch>,
    Error: From<B::Error>,
{
    let batch: ArticleBatch = batch.try_into()?;
    Ok(RequestDescriptor::post(
        url("add_news"),
        json!({ "articles": batch }),
    ))
}

/// 修改多图文里第 `index` 篇（从 0 开始）
pub fn update_article(media_id: &str, index: usize, article: &Article) -> RequestDescriptor {
    RequestDescriptor::post(
        url("update_news"),
        json!({
            "media_id": media_id,
            "index": index,
            "articles": article,
        }),
    )
}

pub fn upload_image(media: Media) -> RequestDescriptor {
    upload_material(MediaType::Image, media)
}

/// 上传视频素材需要额外带上标题和简介
pub fn upload_video(media: Media, title: &str, introduction: &str) -> RequestDescriptor {
    let mut fields = Map::new();
    fields.insert(
        "description".to_string(),
        json!({
            "title": title,
            "introduction": introduction,
        }),
    );
    RequestDescriptor::upload(url("add_material"), media, fields)
        .parameter("type", MediaType::Video.as_str())
}
