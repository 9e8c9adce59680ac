//! talker 消费的请求描述
use bytes::Bytes;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    /// POST + multipart/form-data，`media` 作为文件部分
    Upload,
}

/// 一次接口调用需要的全部信息，url 已经是完整地址，不带 access_token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    /// 直接序列化成 JSON 发出去
    Json(Value),
    /// 上传接口的表单
    Form(UploadForm),
}

/// multipart 表单：一个文件 + 若干 JSON 字段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadForm {
    pub media: Media,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// 待上传的媒体文件
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl Media {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// 只输出文件的元信息，内容交给 talker 编码
impl Serialize for Media {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Media", 3)?;
        s.serialize_field("filename", &self.filename)?;
        s.serialize_field("filelength", &self.len())?;
        s.serialize_field("content_type", &self.content_type)?;
        s.end()
    }
}

impl RequestDescriptor {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            parameters: None,
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            method: Method::Post,
            parameters: None,
            body: Some(Body::Json(body)),
        }
    }

    pub fn upload(url: impl Into<String>, media: Media, fields: Map<String, Value>) -> Self {
        Self {
            url: url.into(),
            method: Method::Upload,
            parameters: None,
            body: Some(Body::Form(UploadForm { media, fields })),
        }
    }

    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// JSON body，上传接口和 GET 接口返回 `None`
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            Some(Body::Json(v)) => Some(v),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&UploadForm> {
        match &self.body {
            Some(Body::Form(f)) => Some(f),
            _ => None,
        }
    }

    /// talker 实际要拼到 url 上的 query：自带的参数加上 access_token
    pub fn query(&self, access_token: &str) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = self
            .parameters
            .iter()
            .flatten()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        query.push(("access_token".to_string(), access_token.to_string()));
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_has_no_optional_fields() {
        let d = RequestDescriptor::get("https://example.com/a");
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({ "url": "https://example.com/a", "method": "get" })
        );
        assert!(d.json().is_none());
        assert!(d.form().is_none());
    }

    #[test]
    fn upload_form_flattens_sibling_fields() {
        let mut fields = Map::new();
        fields.insert("description".to_string(), json!({ "title": "t" }));
        let media = Media::new("a.mp4", "video/mp4", vec![0u8; 16]);
        let d = RequestDescriptor::upload("https://example.com/u", media, fields)
            .parameter("type", "video");

        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({
                "url": "https://example.com/u",
                "method": "upload",
                "parameters": { "type": "video" },
                "body": {
                    "media": {
                        "filename": "a.mp4",
                        "filelength": 16,
                        "content_type": "video/mp4"
                    },
                    "description": { "title": "t" }
                }
            })
        );
    }

    #[test]
    fn query_appends_access_token_last() {
        let d = RequestDescriptor::get("https://example.com")
            .parameter("type", "image")
            .parameter("kf_account", "a@b");
        assert_eq!(
            d.query("tok"),
            vec![
                ("kf_account".to_string(), "a@b".to_string()),
                ("type".to_string(), "image".to_string()),
                ("access_token".to_string(), "tok".to_string()),
            ]
        );
        assert_eq!(
            RequestDescriptor::get("https://example.com").query("tok"),
            vec![("access_token".to_string(), "tok".to_string())]
        );
    }
}
