//! 错误类型（对外暴露）
use std::path::PathBuf;
use thiserror::Error;

/// 库内统一错误类型
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("cannot read resistors file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: cannot parse {text:?} as a number")]
    Parse { line: usize, text: String },

    #[error("line {line}: {value} is not a positive resistance")]
    InvalidValue { line: usize, value: f64 },

    #[error("need at least {required} resistors, found {found}")]
    InsufficientData { required: usize, found: usize },

    #[error("target ratio must be a positive number, got {0}")]
    InvalidTarget(f64),

    #[error("no candidates were produced (internal error)")]
    NoCandidates,

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatchError {
    /// 是否属于输入文件内容错误（非数字或非法阻值）
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MatchError::Parse { .. } | MatchError::InvalidValue { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
