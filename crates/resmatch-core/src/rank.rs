//! 候选项排序

use crate::scoring::Scored;

/// 按 badness 升序稳定排序；badness 相同时保持生成顺序
pub fn rank_by_badness<C: Scored>(candidates: &mut [C]) {
    candidates.sort_by(|a, b| a.badness().total_cmp(&b.badness()));
}
