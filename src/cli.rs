use clap::{Parser, Subcommand, ValueEnum};
use po_viewer_common::MainTab;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "po-viewer")]
#[command(about = "発注書(PO)ビューア: 一覧表示・データ抽出・請求書変換プレビュー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PO一覧を表示
    List,

    /// POを選択して抽出結果を表示
    Show {
        /// ファイル名またはID
        #[arg(required = true)]
        key: String,

        /// 表示するタブ
        #[arg(short, long, default_value = "details")]
        tab: TabArg,
    },

    /// 抽出を実行してJSONを出力
    Parse {
        /// POのファイル名
        #[arg(required = true)]
        filename: String,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 元ファイルをダウンロード
    Fetch {
        /// POのファイル名
        #[arg(required = true)]
        filename: String,

        /// 保存先（デフォルト: カレントディレクトリ/ファイル名）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// サーバ側でPOフォルダを開く
    OpenFolder,

    /// サービスの死活確認
    Health,

    /// 設定を表示/編集
    Config {
        /// サービスURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// タイムアウト秒を設定（0で解除）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Document,
    Details,
    Invoice,
}

impl From<TabArg> for MainTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Document => MainTab::Document,
            TabArg::Details => MainTab::Details,
            TabArg::Invoice => MainTab::Invoice,
        }
    }
}
