use clap::Parser;
use resmatch_cli::{finish, init_tracing, output_format, parse_target_ratio, parse_top, with_stdout};
use resmatch_core::{best_pair_and_write, PairOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// 找出比值最接近目标比值的电阻对（例如分压器）
#[derive(Parser, Debug)]
#[command(name = "best-pair", version, about = "Find the resistor pair whose ratio best matches a target")]
struct Cli {
    /// 目标比值（正数），例如 1.0
    #[arg(value_parser = parse_target_ratio)]
    target_ratio: f64,

    /// 电阻列表文件（每行一个阻值，空行与 # 开头的行忽略）
    resistors_file: PathBuf,

    /// 输出前 N 个结果
    #[arg(long, default_value = "3", value_parser = parse_top)]
    top: usize,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    info!(target_ratio = cli.target_ratio, file = ?cli.resistors_file, "starting best-pair");

    let opts = PairOptions {
        target_ratio: cli.target_ratio,
        top: cli.top,
        format: output_format(cli.json),
    };
    let result = with_stdout(|out| best_pair_and_write(&cli.resistors_file, out, &opts));
    finish("best-pair", result)
}
