//! 微信公众号接口的请求描述。
//!
//! 这里的函数只负责把参数拼成 [`RequestDescriptor`]，真正发请求、
//! 带 `access_token`、做 multipart 编码都交给外部的 talker。
#[macro_use]
extern crate serde;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

pub mod customer_service;
pub mod descriptor;
mod error;
pub mod material;
pub mod response;

pub use descriptor::{Body, Media, Method, RequestDescriptor, UploadForm};
pub use error::{Error, Result};
pub use material::{Article, ArticleBatch, BatchGetArgs, MaterialType, MediaType};

/// 所有接口的域名
pub(crate) const API_HOST: &str = "https://api.weixin.qq.com";
