//! 搜索主流程：加载 → 枚举组合 → 打分 → 排序 → 报告
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::combinations::combinations_of;
use crate::error::{MatchError, Result};
use crate::loader::load_resistors;
use crate::options::{MatchStats, PairOptions, QuadOptions};
use crate::rank::rank_by_badness;
use crate::report::{write_pair_report, write_quad_report};
use crate::scoring::{score_pair, score_quad, PairCandidate, QuadCandidate, QUAD_PAIRINGS};
use crate::types::ResistorSet;

/// best-pair 所需的最少电阻数
pub const PAIR_MIN_RESISTORS: usize = 2;
/// best-four-of-n 所需的最少电阻数
pub const QUAD_MIN_RESISTORS: usize = 4;

/// 对所有 2 元组合打分并按 |误差| 升序返回全部候选项
pub fn best_pairs(set: &ResistorSet, target_ratio: f64) -> Result<Vec<PairCandidate>> {
    if !target_ratio.is_finite() || target_ratio <= 0.0 {
        return Err(MatchError::InvalidTarget(target_ratio));
    }
    let mut ranked: Vec<PairCandidate> = combinations_of::<2>(set)
        .map(|pair| score_pair(target_ratio, pair))
        .collect();
    if ranked.is_empty() {
        return Err(MatchError::NoCandidates);
    }
    rank_by_badness(&mut ranked);
    Ok(ranked)
}

/// 对所有 4 元组合的六种配对打分并按比值之比升序返回全部候选项
pub fn best_quads(set: &ResistorSet) -> Result<Vec<QuadCandidate>> {
    let mut ranked: Vec<QuadCandidate> = Vec::new();
    for quad in combinations_of::<4>(set) {
        ranked.extend(score_quad(quad));
    }
    if ranked.is_empty() {
        return Err(MatchError::NoCandidates);
    }
    rank_by_badness(&mut ranked);
    Ok(ranked)
}

/// 加载文件并将 best-pair 报告写入 `out`
pub fn best_pair_and_write(path: &Path, out: &mut dyn Write, opts: &PairOptions) -> Result<MatchStats> {
    let set = load_resistors(path, PAIR_MIN_RESISTORS)?;
    let mut stats = MatchStats { resistors_loaded: set.len(), ..MatchStats::default() };
    debug!(n = set.len(), "scoring pairs");

    let mut ranked = best_pairs(&set, opts.target_ratio)?;
    // 每个 2 元组合恰好一个候选项
    stats.combinations = ranked.len();
    stats.candidates = ranked.len();
    ranked.truncate(opts.top.max(1));
    stats.reported = ranked.len();

    write_pair_report(out, opts.target_ratio, &ranked, opts.format)?;
    Ok(stats)
}

/// 加载文件并将 best-four-of-n 报告写入 `out`
pub fn best_four_and_write(path: &Path, out: &mut dyn Write, opts: &QuadOptions) -> Result<MatchStats> {
    let set = load_resistors(path, QUAD_MIN_RESISTORS)?;
    let mut stats = MatchStats { resistors_loaded: set.len(), ..MatchStats::default() };
    debug!(n = set.len(), "scoring groups of four");

    let mut ranked = best_quads(&set)?;
    stats.combinations = ranked.len() / QUAD_PAIRINGS.len();
    stats.candidates = ranked.len();
    ranked.truncate(opts.top.max(1));
    stats.reported = ranked.len();

    write_quad_report(out, &ranked, opts.format)?;
    Ok(stats)
}
