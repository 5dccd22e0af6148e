//! 比值打分
//!
//! - best-pair：对有序对 (a, b) 计算 a/b 与目标比值的相对误差，badness = |误差|
//! - best-four-of-n：把 4 元组拆成两对，比较两对比值，badness = max/min（≥ 1，1 为完全匹配）
use crate::types::Measurement;

/// 可排序的候选项：badness 越小越好
pub trait Scored {
    fn badness(&self) -> f64;
}

/// best-pair 候选项
#[derive(Debug, Clone, PartialEq)]
pub struct PairCandidate {
    pub a: Measurement,
    pub b: Measurement,
    /// a / b
    pub ratio: f64,
    /// (ratio - target) / target，带符号的小数（×100 为百分比）
    pub error: f64,
}

impl PairCandidate {
    pub fn error_percent(&self) -> f64 {
        self.error * 100.0
    }
}

impl Scored for PairCandidate {
    fn badness(&self) -> f64 {
        self.error.abs()
    }
}

/// 对组合 (a, b) 打分；只按枚举给出的顺序计算，不尝试 b/a
pub fn score_pair(target_ratio: f64, [a, b]: [&Measurement; 2]) -> PairCandidate {
    let ratio = a.value / b.value;
    let error = (ratio - target_ratio) / target_ratio;
    PairCandidate { a: *a, b: *b, ratio, error }
}

/// 有序电阻对（分子, 分母）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPair {
    pub numerator: Measurement,
    pub denominator: Measurement,
}

impl RatioPair {
    pub fn ratio(&self) -> f64 {
        self.numerator.value / self.denominator.value
    }
}

/// best-four-of-n 候选项：两对电阻及各自的比值
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCandidate {
    pub first: RatioPair,
    pub second: RatioPair,
    pub ratio1: f64,
    pub ratio2: f64,
    /// max(ratio1, ratio2) / min(ratio1, ratio2)
    pub ratio_of_ratios: f64,
}

impl QuadCandidate {
    fn new(first: RatioPair, second: RatioPair) -> Self {
        let ratio1 = first.ratio();
        let ratio2 = second.ratio();
        let ratio_of_ratios = ratio1.max(ratio2) / ratio1.min(ratio2);
        Self { first, second, ratio1, ratio2, ratio_of_ratios }
    }

    /// 两对比值的失配百分比：|r1 - r2| / max(r1, r2) × 100
    pub fn mismatch_percent(&self) -> f64 {
        (self.ratio1 - self.ratio2).abs() / self.ratio1.max(self.ratio2) * 100.0
    }
}

impl Scored for QuadCandidate {
    fn badness(&self) -> f64 {
        self.ratio_of_ratios
    }
}

/// 4 元组 (a, b, c, d) 的六种配对（下标布局：第一对分子、分母，第二对分子、分母）
/// 三种二分 {a,b}|{c,d}、{a,c}|{b,d}、{a,d}|{b,c}，各自只交换第一对的顺序，第二对保持原序
pub const QUAD_PAIRINGS: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [1, 0, 2, 3],
    [0, 2, 1, 3],
    [2, 0, 1, 3],
    [0, 3, 1, 2],
    [3, 0, 1, 2],
];

/// 对一个 4 元组给出全部六个候选项（顺序与 `QUAD_PAIRINGS` 一致）
pub fn score_quad(quad: [&Measurement; 4]) -> [QuadCandidate; 6] {
    QUAD_PAIRINGS.map(|[p, q, r, s]| {
        QuadCandidate::new(
            RatioPair { numerator: *quad[p], denominator: *quad[q] },
            RatioPair { numerator: *quad[r], denominator: *quad[s] },
        )
    })
}
