//! リバーシのテキストコンソール版エントリポイント
//! 設定読み込み、ログ初期化を行い、標準入力から着手を受け付ける。

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use reversy::{
    config::Config,
    game::{GameMode, ReversyLogic},
    render::{parse_move_input, ConsoleRenderer},
    GameError,
};

/// Play Reversy on the text console
#[derive(Parser, Debug)]
#[command(name = "reversy")]
#[command(about = "Two-player disc-flipping board game on an 8x8 grid", long_about = None)]
struct Args {
    /// "two-human" for two players, anything else to play against the computer
    #[arg(long)]
    mode: Option<String>,

    /// Seed for choosing the computer's side
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the default config to config.json and exit
    #[arg(long)]
    generate_config: bool,
}

fn init_logging(config: &Config) {
    if !config.logging.enable_logging {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    if args.generate_config {
        match Config::default().save_to_file("config.json") {
            Ok(()) => println!("config.json を生成しました"),
            Err(e) => {
                eprintln!("設定ファイル生成失敗: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let loaded = match &args.config {
        Some(path) => Config::from_file(path).and_then(|mut config| {
            config.apply_env()?;
            Ok(config)
        }),
        None => Config::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("設定エラー: {}", e);
        eprintln!("デフォルト設定を生成: reversy --generate-config");
        std::process::exit(1);
    });

    if let Some(mode) = args.mode {
        config.game.mode = GameMode::from(mode);
    }
    if args.seed.is_some() {
        config.game.seed = args.seed;
    }
    if let Err(e) = config.validate() {
        eprintln!("設定エラー: {}", e);
        std::process::exit(1);
    }

    init_logging(&config);

    let renderer = ConsoleRenderer::stdout();
    let started = match config.game.seed {
        Some(seed) => ReversyLogic::with_rng(config.game.mode, &mut StdRng::seed_from_u64(seed), renderer),
        None => ReversyLogic::new(config.game.mode, renderer),
    };
    let mut game = started.unwrap_or_else(|e| {
        eprintln!("対局開始失敗: {}", e);
        std::process::exit(1);
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.is_running() {
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("入力読み込み失敗: {}", e);
                break;
            }
            None => break,
        };

        let result = parse_move_input(&line).and_then(|(x, y)| game.request_move(x, y));
        match result {
            Ok(_) => {}
            Err(e @ (GameError::MalformedInput { .. } | GameError::InvalidInput { .. })) => {
                println!("{}", e);
            }
            Err(e) => {
                eprintln!("対局エラー: {}", e);
                std::process::exit(1);
            }
        }
    }
}
