//! 把公众号接口的请求描述打印成 JSON，方便对着微信文档检查
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use std::convert::TryFrom;
use std::path::PathBuf;
use weixin::{
    customer_service,
    material::{self, BatchGetArgs},
    ArticleBatch, MaterialType, MediaType, RequestDescriptor,
};

mod config;
mod media;
mod news;

#[derive(Debug, Parser)]
#[command(name = "dump-request", version = env!("BUILD_INFO"))]
struct Cli {
    /// 配置文件
    #[arg(long, default_value = "./weixin.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 永久素材总数
    Count,
    /// 分页列出永久素材
    List {
        #[arg(long = "type", default_value = "news")]
        kind: MaterialType,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 20)]
        count: u32,
    },
    /// 删除永久素材
    Delete { media_id: String },
    /// 上传 image/voice/video/thumb 素材
    Upload { kind: MediaType, file: PathBuf },
    Image { file: PathBuf },
    Video {
        file: PathBuf,
        title: String,
        introduction: String,
    },
    /// 从 toml 文件新增图文
    News { file: PathBuf },
    /// 用 toml 文件里的第一篇替换多图文的第 index 篇
    Update {
        media_id: String,
        index: usize,
        file: PathBuf,
    },
    KfAdd {
        account: String,
        nickname: String,
        password: String,
    },
    KfUpdate {
        account: String,
        nickname: String,
        password: String,
    },
    KfDelete {
        account: String,
        nickname: String,
        password: String,
    },
    KfList,
    /// 设置客服头像
    KfAvatar { account: String, file: PathBuf },
}

fn build(command: Command) -> Result<RequestDescriptor> {
    let d = match command {
        Command::Count => material::get_count(),
        Command::List {
            kind,
            offset,
            count,
        } => material::batch_get(BatchGetArgs {
            r#type: kind,
            offset,
            count,
        }),
        Command::Delete { media_id } => material::delete_material(&media_id),
        Command::Upload { kind, file } => material::upload_material(kind, media::load(&file)?),
        Command::Image { file } => material::upload_image(media::load(&file)?),
        Command::Video {
            file,
            title,
            introduction,
        } => material::upload_video(media::load(&file)?, &title, &introduction),
        Command::News { file } => material::articles(news::load(&file)?)?,
        Command::Update {
            media_id,
            index,
            file,
        } => {
            let batch = ArticleBatch::try_from(news::load(&file)?)?;
            let article = batch
                .get(0)
                .ok_or_else(|| anyhow!("{} has no article", file.display()))?;
            material::update_article(&media_id, index, article)
        }
        Command::KfAdd {
            account,
            nickname,
            password,
        } => customer_service::add(&account, &nickname, &password),
        Command::KfUpdate {
            account,
            nickname,
            password,
        } => customer_service::update(&account, &nickname, &password),
        Command::KfDelete {
            account,
            nickname,
            password,
        } => customer_service::delete(&account, &nickname, &password),
        Command::KfList => customer_service::list(),
        Command::KfAvatar { account, file } => {
            customer_service::upload_head_img(&account, media::load(&file)?)
        }
    };
    Ok(d)
}

/// 有 token 时把 talker 会拼上的 query 一起输出
fn render(descriptor: &RequestDescriptor, access_token: Option<&str>) -> Result<Value> {
    let request = serde_json::to_value(descriptor)?;
    Ok(match access_token {
        Some(token) => {
            let query: Map<String, Value> = descriptor
                .query(token)
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            json!({ "request": request, "query": query })
        }
        None => request,
    })
}

fn main() -> Result<()> {
    if log4rs::init_file("./log4rs.yml", Default::default()).is_err() {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "INFO");
        }
        pretty_env_logger::init_timed();
    }

    let cli = Cli::parse();
    let config = config::Config::load(&cli.config)?;
    debug!("command: {:?}", cli.command);

    let descriptor = build(cli.command).context("生成请求失败")?;
    let output = render(&descriptor, config.access_token.as_deref())?;
    let s = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", s);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_list_defaults() {
        let cli = Cli::try_parse_from(vec!["dump-request", "list"]).unwrap();
        let d = build(cli.command).unwrap();
        assert_eq!(
            d.json().unwrap(),
            &json!({ "type": "news", "offset": 0, "count": 20 })
        );
    }

    #[test]
    fn cli_rejects_unknown_type() {
        assert!(Cli::try_parse_from(vec!["dump-request", "list", "--type", "thumb"]).is_err());
        assert!(Cli::try_parse_from(vec!["dump-request", "upload", "news", "a.jpg"]).is_err());
    }

    #[test]
    fn kf_commands() {
        let cli =
            Cli::try_parse_from(vec!["dump-request", "kf-add", "test1@test", "test1", "passwd"])
                .unwrap();
        assert_eq!(
            build(cli.command).unwrap(),
            customer_service::add("test1@test", "test1", "passwd")
        );
        let cli = Cli::try_parse_from(vec!["dump-request", "kf-list"]).unwrap();
        assert_eq!(build(cli.command).unwrap(), customer_service::list());
    }

    #[test]
    fn render_with_token() {
        let d = material::upload_material(
            MediaType::Voice,
            weixin::Media::new("a.amr", "audio/amr", vec![0u8; 2]),
        );
        let v = render(&d, Some("TOKEN")).unwrap();
        assert_eq!(
            v["query"],
            json!({ "type": "voice", "access_token": "TOKEN" })
        );
        assert_eq!(v["request"]["method"], json!("upload"));

        let v = render(&material::get_count(), None).unwrap();
        assert_eq!(v["method"], json!("get"));
    }
}
