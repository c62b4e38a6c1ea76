use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portfolio-relay")]
#[command(about = "ポートフォリオサイト配信・お問い合わせメール中継サーバー", long_about = None)]
pub struct Cli {
    /// 待ち受けポート
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// 待ち受けアドレス
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,

    /// 静的ファイルのルート（index.html を含むディレクトリ）
    #[arg(long, env = "STATIC_ROOT", default_value = "dist")]
    pub static_root: PathBuf,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
