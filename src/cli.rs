use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smartsend")]
#[command(about = "荷物写真から寸法・重量・配送料金をAI推定", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 荷物の写真を解析
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 解析後に説明文を編集
        #[arg(short, long)]
        edit: bool,

        /// Geminiモデル名（設定ファイルより優先）
        #[arg(short, long)]
        model: Option<String>,

        /// タイムアウト秒数（設定ファイルより優先）
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// 保存した結果から共有テキストを出力
    Share {
        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "smartsend", "analyze", "box.jpg", "-o", "out.json", "--edit", "--timeout", "30",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { image, output, edit, model, timeout } => {
                assert_eq!(image, PathBuf::from("box.jpg"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(edit);
                assert!(model.is_none());
                assert_eq!(timeout, Some(30));
            }
            _ => panic!("Analyze expected"),
        }
    }

    #[test]
    fn test_analyze_requires_image() {
        assert!(Cli::try_parse_from(["smartsend", "analyze"]).is_err());
    }

    #[test]
    fn test_global_verbose() {
        let cli = Cli::try_parse_from(["smartsend", "share", "result.json", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
