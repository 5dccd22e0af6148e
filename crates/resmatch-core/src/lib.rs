//! 电阻配对选择核心库
//!
//! 从一批实测电阻中挑选比值最符合要求的组合：
//! - best-pair：找出比值最接近目标比值的一对电阻（例如分压器）。
//! - best-four-of-n：找出比值彼此最接近的两对电阻（增益为 1 的差分放大器）。
//!
//! 设计要点：
//! - 组合枚举是惰性的（`Combinations`），组合数为 C(n, k)；4 元组每个产生 6 个候选项。
//! - 排序为稳定排序，badness 相同时保持生成顺序，因此同一输入的输出可复现。
//! - 报告写入调用方传入的 `Write`，便于测试与重定向。

mod combinations;
mod error;
mod loader;
mod options;
mod rank;
mod report;
mod scoring;
mod search;
mod types;

pub use combinations::{binomial, combinations_of, Combinations};
pub use error::{MatchError, Result};
pub use loader::{load_resistors, parse_resistors};
pub use options::{MatchStats, OutputFormat, PairOptions, QuadOptions};
pub use rank::rank_by_badness;
pub use report::{write_pair_report, write_quad_report};
pub use scoring::{score_pair, score_quad, PairCandidate, QuadCandidate, RatioPair, Scored, QUAD_PAIRINGS};
pub use search::{
    best_four_and_write, best_pair_and_write, best_pairs, best_quads, PAIR_MIN_RESISTORS, QUAD_MIN_RESISTORS,
};
pub use types::{Measurement, ResistorSet};
