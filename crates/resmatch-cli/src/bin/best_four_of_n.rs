use clap::Parser;
use resmatch_cli::{finish, init_tracing, output_format, parse_top, with_stdout};
use resmatch_core::{best_four_and_write, QuadOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// 找出比值彼此最接近的两对电阻（增益为 1 的差分放大器）
#[derive(Parser, Debug)]
#[command(
    name = "best-four-of-n",
    version,
    about = "Find two resistor pairs whose ratios match each other most closely"
)]
struct Cli {
    /// 电阻列表文件（每行一个阻值，空行与 # 开头的行忽略）
    resistors_file: PathBuf,

    /// 输出前 N 个结果
    #[arg(long, default_value = "1", value_parser = parse_top)]
    top: usize,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    info!(file = ?cli.resistors_file, "starting best-four-of-n");

    let opts = QuadOptions { top: cli.top, format: output_format(cli.json) };
    let result = with_stdout(|out| best_four_and_write(&cli.resistors_file, out, &opts));
    finish("best-four-of-n", result)
}
