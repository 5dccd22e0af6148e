//! 两个命令行工具（best-pair / best-four-of-n）的公共部分：日志初始化、参数解析、退出码映射
use anyhow::Result;
use resmatch_core::{MatchError, MatchStats, OutputFormat};
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use tracing::{error, info};

/// 文件中可用电阻数不足
pub const EXIT_INSUFFICIENT_DATA: u8 = 3;
/// 文件中存在无法解析或非法的数值
pub const EXIT_PARSE_ERROR: u8 = 4;
/// 内部错误：没有产生任何候选项
pub const EXIT_INTERNAL: u8 = 70;
/// 其他错误（例如文件无法读取）
pub const EXIT_FAILURE: u8 = 1;

/// 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
/// 日志写到标准错误，标准输出只保留报告
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析目标比值：必须为有限正数
pub fn parse_target_ratio(s: &str) -> std::result::Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(v) => Err(format!("target ratio must be positive, got {v}")),
        Err(_) => Err(format!("not a number: {s:?}")),
    }
}

/// 解析输出条数：至少为 1
pub fn parse_top(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("expected a whole number >= 1, got {s:?}")),
    }
}

/// `--json` 开关转为输出格式
pub fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

/// 以缓冲方式把报告写到标准输出
pub fn with_stdout<F>(f: F) -> Result<MatchStats>
where
    F: FnOnce(&mut dyn Write) -> resmatch_core::Result<MatchStats>,
{
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = f(&mut out)?;
    out.flush()?;
    Ok(stats)
}

/// 根据错误类型确定退出码
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<MatchError>() {
        Some(MatchError::InsufficientData { .. }) => EXIT_INSUFFICIENT_DATA,
        Some(e) if e.is_parse_error() => EXIT_PARSE_ERROR,
        Some(MatchError::NoCandidates) => EXIT_INTERNAL,
        _ => EXIT_FAILURE,
    }
}

/// 收尾：成功时记录统计信息，失败时把错误写到标准错误并返回对应退出码
pub fn finish(tool: &str, result: Result<MatchStats>) -> ExitCode {
    match result {
        Ok(stats) => {
            info!(
                tool,
                resistors = stats.resistors_loaded,
                combinations = stats.combinations,
                candidates = stats.candidates,
                reported = stats.reported,
                "search finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = exit_code_for(&err);
            if code == EXIT_INTERNAL {
                error!(tool, "internal error: {err:#}");
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(code)
        }
    }
}
