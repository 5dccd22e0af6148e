//! 惰性组合枚举（按位置下标的字典序）
//!
//! `Combinations::<K>::new(n)` 基于 `itertools` 逐个产出 `[usize; K]` 下标元组，不预先物化全部组合；
//! 元组内下标严格递增，因此同一组合不会重复使用同一测量值。
use itertools::Itertools;
use std::ops::Range;

use crate::types::{Measurement, ResistorSet};

/// 组合数 C(n, k)；超出 usize 范围时返回 None
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc 此时等于 C(n, i)，乘积先在 u128 中计算再整除
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
        if acc > usize::MAX as u128 {
            return None;
        }
    }
    usize::try_from(acc).ok()
}

/// K 元组合的惰性迭代器；`Clone` 即可从当前位置重新开始一份独立遍历
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    inner: itertools::Combinations<Range<usize>>,
    /// 剩余组合数（溢出时未知）
    remaining: Option<usize>,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        Self { inner: (0..n).combinations(K), remaining: binomial(n, K) }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.inner.next()?;
        if let Some(r) = self.remaining.as_mut() {
            *r = r.saturating_sub(1);
        }
        Some(std::array::from_fn(|i| idx[i]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

/// 在测量集合上枚举 K 元组合，元组内保持集合中的相对顺序
pub fn combinations_of<const K: usize>(
    set: &ResistorSet,
) -> impl Iterator<Item = [&Measurement; K]> + Clone + '_ {
    let items = set.as_slice();
    Combinations::<K>::new(items.len()).map(move |idx| idx.map(move |i| &items[i]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial(4, 4), Some(1));
        assert_eq!(binomial(10, 4), Some(210));
        assert_eq!(binomial(30, 4), Some(27405));
        assert_eq!(binomial(3, 2), Some(3));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(5, 0), Some(1));
    }

    #[test]
    fn binomial_large_inputs_do_not_overflow() {
        // C(110000, 4) 可用 usize 表示，但 C(n, 3) * (n - 3) 超过 u64
        let n: u128 = 110_000;
        let expected = n * (n - 1) * (n - 2) * (n - 3) / 24;
        assert_eq!(binomial(110_000, 4).map(|v| v as u128), Some(expected));
        assert_eq!(binomial(usize::MAX, 2), None);
        assert_eq!(binomial(usize::MAX, 1), Some(usize::MAX));
    }

    #[test]
    fn pairs_of_three_in_lexicographic_order() {
        let got: Vec<[usize; 2]> = Combinations::<2>::new(3).collect();
        assert_eq!(got, vec![[0, 1], [0, 2], [1, 2]]);
    }

    #[test]
    fn yields_exactly_n_choose_k_distinct_sets() {
        for n in 0..12 {
            let got: Vec<[usize; 4]> = Combinations::<4>::new(n).collect();
            assert_eq!(Some(got.len()), binomial(n, 4), "n = {n}");

            let mut seen = HashSet::new();
            for c in &got {
                assert!(c.windows(2).all(|w| w[0] < w[1]), "not strictly increasing: {c:?}");
                assert!(c.iter().all(|&i| i < n));
                assert!(seen.insert(*c), "duplicate combination {c:?}");
            }
        }
    }

    #[test]
    fn reports_remaining_length() {
        let mut it = Combinations::<2>::new(5);
        assert_eq!(it.size_hint(), (10, Some(10)));
        it.next();
        assert_eq!(it.size_hint(), (9, Some(9)));
        assert_eq!(it.by_ref().count(), 9);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn too_few_items_yields_nothing() {
        assert_eq!(Combinations::<4>::new(3).count(), 0);
        assert_eq!(Combinations::<2>::new(0).count(), 0);
    }

    #[test]
    fn clone_restarts_independently() {
        let mut a = Combinations::<2>::new(4);
        a.next();
        let b = a.clone();
        let rest_a: Vec<_> = a.collect();
        let rest_b: Vec<_> = b.collect();
        assert_eq!(rest_a, rest_b);
        assert_eq!(rest_a.len(), 5);
    }

    #[test]
    fn maps_indices_to_measurements_in_file_order() {
        let set = ResistorSet::from(vec![
            Measurement::new(2, 1.0),
            Measurement::new(5, 2.0),
            Measurement::new(9, 3.0),
        ]);
        let got: Vec<(usize, usize)> = combinations_of::<2>(&set)
            .map(|[a, b]| (a.position, b.position))
            .collect();
        assert_eq!(got, vec![(2, 5), (2, 9), (5, 9)]);
    }
}
