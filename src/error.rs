use std::convert::Infallible;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 调用方传进来的东西不合法，比如不是一个图文列表
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// 微信返回了非零的 errcode
    #[error("Weixin error ({code}) {message}")]
    Api { code: i64, message: String },

    /// errcode 为 0，但数据和预期的结构对不上
    #[error("malformed Weixin response: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Infallible> for Error {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
