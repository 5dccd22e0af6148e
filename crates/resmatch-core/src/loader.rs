//! 电阻列表文件加载
//!
//! 文件格式：每行一个数值；空行与以 `#` 开头的行跳过。
//! 行号始终按原文件计算（跳过的行也计数），作为测量值的显示标识。
use std::path::Path;
use tracing::debug;

use crate::error::{MatchError, Result};
use crate::types::{Measurement, ResistorSet};

/// 读取并解析电阻列表文件，要求至少 `min_count` 个有效阻值
pub fn load_resistors(path: &Path, min_count: usize) -> Result<ResistorSet> {
    let txt = std::fs::read_to_string(path).map_err(|source| MatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_resistors(&txt, min_count)?;
    debug!(path = %path.display(), count = set.len(), "resistors loaded");
    Ok(set)
}

/// 从文本解析电阻列表（遇到第一处错误即返回）
pub fn parse_resistors(txt: &str, min_count: usize) -> Result<ResistorSet> {
    let mut out = Vec::new();
    // 以 UTF-8 BOM 开头的文件（部分 Windows 编辑器默认保存格式）
    let txt = txt.strip_prefix('\u{feff}').unwrap_or(txt);

    for (idx, raw) in txt.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value = parse_value(line, line_num)?;
        out.push(Measurement::new(line_num, value));
    }

    if out.len() < min_count {
        return Err(MatchError::InsufficientData { required: min_count, found: out.len() });
    }
    Ok(ResistorSet::new(out))
}

fn parse_value(line: &str, line_num: usize) -> Result<f64> {
    // 允许前导空白（行首为空白时不视为注释）
    let value: f64 = line.trim_start().parse().map_err(|_| MatchError::Parse {
        line: line_num,
        text: line.to_string(),
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(MatchError::InvalidValue { line: line_num, value });
    }
    Ok(value)
}
