// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "line_tally",
    version,
    about = "ソースツリーのコード行/空行/コメント行を集計するツール"
)]
pub struct Args {
    /// 集計対象のルートディレクトリ（省略時は対話的に入力）
    #[arg(value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// ログ出力を詳細にする (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter implied by `--verbose`, used when `RUST_LOG` is unset.
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
