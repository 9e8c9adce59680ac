//! 客服账号管理
//!
//! 密码原样放进 body，微信要求的是明文密码的 md5（32 位小写），由调用方算好。
use serde_json::Map;

use crate::{descriptor::Media, RequestDescriptor, API_HOST};

fn url(api: &str) -> String {
    format!("{}/customservice/kfaccount/{}", API_HOST, api)
}

fn account_body(kf_account: &str, nickname: &str, password: &str) -> serde_json::Value {
    json!({
        "kf_account": kf_account,
        "nickname": nickname,
        "password": password,
    })
}

/// 添加客服账号，`kf_account` 形如 `test1@公众号微信号`
pub fn add(kf_account: &str, nickname: &str, password: &str) -> RequestDescriptor {
    RequestDescriptor::post(url("add"), account_body(kf_account, nickname, password))
}

pub fn update(kf_account: &str, nickname: &str, password: &str) -> RequestDescriptor {
    RequestDescriptor::post(url("update"), account_body(kf_account, nickname, password))
}

pub fn delete(kf_account: &str, nickname: &str, password: &str) -> RequestDescriptor {
    RequestDescriptor::post(url("del"), account_body(kf_account, nickname, password))
}

/// 所有客服账号
pub fn list() -> RequestDescriptor {
    RequestDescriptor::get(url("getkflist"))
}

/// 设置客服头像，图片建议 640*640 的 jpg
pub fn upload_head_img(kf_account: &str, media: Media) -> RequestDescriptor {
    RequestDescriptor::upload(url("uploadheadimg"), media, Map::new())
        .parameter("kf_account", kf_account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;
    use maplit::btreemap;

    #[test]
    fn account_mutations() {
        let cases = vec![
            (add("test1@test", "test1", "passwd"), "add"),
            (update("test1@test", "test1", "passwd"), "update"),
            (delete("test1@test", "test1", "passwd"), "del"),
        ];
        for (d, api) in cases {
            assert_eq!(d.method, Method::Post);
            assert_eq!(
                d.url,
                format!("https://api.weixin.qq.com/customservice/kfaccount/{}", api)
            );
            assert_eq!(
                d.json().unwrap(),
                &json!({
                    "kf_account": "test1@test",
                    "nickname": "test1",
                    "password": "passwd"
                })
            );
        }
    }

    #[test]
    fn list_accounts() {
        let d = list();
        assert_eq!(d.method, Method::Get);
        assert_eq!(
            d.url,
            "https://api.weixin.qq.com/customservice/kfaccount/getkflist"
        );
        assert!(d.body.is_none());
    }

    #[test]
    fn head_img_is_an_upload() {
        let d = upload_head_img("test1@test", Media::new("a.jpg", "image/jpeg", vec![1u8, 2, 3]));
        assert_eq!(d.method, Method::Upload);
        assert_eq!(
            d.parameters,
            Some(btreemap! { "kf_account".to_string() => "test1@test".to_string() })
        );
        assert_eq!(d.form().unwrap().media.len(), 3);
    }
}
