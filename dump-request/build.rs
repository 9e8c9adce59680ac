use chrono_tz::Asia::Shanghai;

/// `--version` 输出的 `v<版本>-<git hash>-<构建时间>`
fn build_info() -> String {
    let built_at = chrono::Utc::now().with_timezone(&Shanghai);
    format!(
        "v{}-{}-{}",
        env!("CARGO_PKG_VERSION"),
        git_version::git_version!(fallback = "unknown"),
        built_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rustc-env=BUILD_INFO={}", build_info());
}
