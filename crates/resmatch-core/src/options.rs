//! 运行选项与统计信息（模块）

/// 报告输出格式
/// - Text：与手工查看一致的纯文本报告
/// - Json：单个 JSON 文档，字段与文本报告相同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// best-pair 选项
#[derive(Debug, Clone)]
pub struct PairOptions {
    /// 目标比值（正实数）
    pub target_ratio: f64,
    /// 输出前 N 个结果
    pub top: usize,
    pub format: OutputFormat,
}

impl Default for PairOptions {
    fn default() -> Self {
        Self {
            target_ratio: 1.0,
            top: 3,
            format: OutputFormat::Text,
        }
    }
}

/// best-four-of-n 选项（目标比值隐含为 1.0）
#[derive(Debug, Clone)]
pub struct QuadOptions {
    pub top: usize,
    pub format: OutputFormat,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self { top: 1, format: OutputFormat::Text }
    }
}

/// 运行统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchStats {
    pub resistors_loaded: usize,
    pub combinations: usize,
    pub candidates: usize,
    pub reported: usize,
}
