//! 微信接口返回的数据结构，给 talker 解析用
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::marker::PhantomData;

use crate::{Article, Error, Result};

/// 微信的返回：出错时有 `errcode`/`errmsg`，成功时数据直接平铺在顶层，
/// 部分接口成功时也会带 `errcode: 0`
#[derive(Debug, Deserialize)]
pub struct WeixinResponse<T> {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
    #[serde(flatten)]
    data: Map<String, Value>,
    #[serde(skip)]
    _payload: PhantomData<T>,
}
impl<T: DeserializeOwned> WeixinResponse<T> {
    pub fn ok(self) -> Result<T> {
        if self.errcode != 0 {
            return Err(Error::Api {
                code: self.errcode,
                message: self.errmsg,
            });
        }
        serde_json::from_value(Value::Object(self.data)).map_err(Error::Decode)
    }
}

/// 删除、修改这类接口只返回 errcode / errmsg
#[derive(Debug, Deserialize)]
pub struct Ack {}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MaterialCount {
    pub voice_count: u64,
    pub video_count: u64,
    pub image_count: u64,
    pub news_count: u64,
}

/// `batchget_material` 的返回，图文用 [`NewsMaterial`]，其他类型用 [`MediaMaterial`]
#[derive(Debug, Deserialize, Clone)]
pub struct MaterialList<T> {
    pub total_count: u64,
    /// 本次返回的个数
    pub item_count: u64,
    pub item: Vec<T>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsMaterial {
    pub media_id: String,
    pub content: NewsContent,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub update_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsContent {
    /// 多图文会有多篇
    pub news_item: Vec<NewsItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsItem {
    #[serde(flatten)]
    pub article: Article,
    /// 图文页的地址
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaMaterial {
    pub media_id: String,
    pub name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub update_time: DateTime<Utc>,
    #[serde(default)]
    pub url: String,
}

/// 新增素材的返回，只有图片素材会带 url
#[derive(Debug, Deserialize, Clone)]
pub struct AddedMaterial {
    pub media_id: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KfList {
    pub kf_list: Vec<KfAccount>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KfAccount {
    pub kf_account: String,
    pub kf_nick: String,
    pub kf_id: String,
    #[serde(default)]
    pub kf_headimgurl: String,
}
