//! 永久图文素材
use serde_json::Value;
use std::convert::TryFrom;

use crate::Error;

/// 一篇图文。序列化时 `show_cover_pic` 变成 0 / 1，和微信的接口保持一致
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// 封面图片的素材 id，必须是永久 media id
    pub thumb_media_id: String,
    #[serde(default)]
    pub author: String,
    /// 摘要，只有单图文才有，多图文留空
    #[serde(default)]
    pub digest: String,
    #[serde(with = "cover_flag", default)]
    pub show_cover_pic: bool,
    /// 正文，支持 HTML，微信会去掉 JS
    pub content: String,
    /// 点“阅读原文”跳转的地址
    #[serde(default)]
    pub content_source_url: String,
}

mod cover_flag {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*flag))
    }

    /// 和 JS 的真假判断一致：`null`、`false`、`0`、`NaN`、空串为假，其余为真
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
    }
}

/// 多图文里的文章列表，顺序就是展示顺序，`update_article` 的 index 也按这个来
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArticleBatch(Vec<Article>);

impl ArticleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.0.get(index)
    }

    pub(crate) fn push(mut self, article: Article) -> Self {
        self.0.push(article);
        self
    }

    pub fn into_inner(self) -> Vec<Article> {
        self.0
    }
}

impl From<Article> for ArticleBatch {
    fn from(article: Article) -> Self {
        Self(vec![article])
    }
}

impl From<Vec<Article>> for ArticleBatch {
    fn from(articles: Vec<Article>) -> Self {
        Self(articles)
    }
}

impl IntoIterator for ArticleBatch {
    type Item = Article;
    type IntoIter = std::vec::IntoIter<Article>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArticleBatch {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 从动态的 JSON（比如读文件得到的）转换，必须是文章对象组成的数组
impl TryFrom<Value> for ArticleBatch {
    type Error = Error;
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                warn!("rejected article batch: {}", other);
                return Err(Error::InvalidArgument(
                    "articles should be an array of articles".to_string(),
                ));
            }
        };
        let mut articles = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let article = serde_json::from_value(item).map_err(|e| {
                warn!("rejected article #{} in batch: {}", index, e);
                Error::InvalidArgument(format!("article #{} is malformed: {}", index, e))
            })?;
            articles.push(article);
        }
        Ok(Self(articles))
    }
}
