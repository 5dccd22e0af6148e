//! 结果报告（文本 / JSON），写入调用方提供的输出端
use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::options::OutputFormat;
use crate::scoring::{PairCandidate, QuadCandidate, RatioPair};
use crate::types::Measurement;

/// 输出 best-pair 报告（`ranked` 已排序且已截取前 N 个）
pub fn write_pair_report(
    out: &mut dyn Write,
    target_ratio: f64,
    ranked: &[PairCandidate],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let noun = if ranked.len() == 1 { "pair" } else { "pairs" };
            writeln!(out, "Best {} {}:", ranked.len(), noun)?;
            for c in ranked {
                writeln!(
                    out,
                    "{} & {} ({} & {}): ratio = {:.6} (error = {:.6}%)",
                    c.a.label(),
                    c.b.label(),
                    c.a.value,
                    c.b.value,
                    c.ratio,
                    c.error_percent()
                )?;
            }
        }
        OutputFormat::Json => {
            let doc = PairReport {
                target_ratio,
                pairs: ranked.iter().map(PairItem::from).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// 输出 best-four-of-n 报告（`ranked` 已排序且已截取前 N 个）
pub fn write_quad_report(out: &mut dyn Write, ranked: &[QuadCandidate], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, c) in ranked.iter().enumerate() {
                if ranked.len() == 1 {
                    writeln!(out, "Best result:")?;
                } else {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "Result {}:", i + 1)?;
                }
                write_ratio_pair(out, 1, &c.first, c.ratio1)?;
                write_ratio_pair(out, 2, &c.second, c.ratio2)?;
                writeln!(
                    out,
                    "These pairs form ratios which are mis-matched by {:.6}%",
                    c.mismatch_percent()
                )?;
            }
        }
        OutputFormat::Json => {
            let doc = QuadReport { results: ranked.iter().map(QuadItem::from).collect() };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_ratio_pair(out: &mut dyn Write, n: usize, pair: &RatioPair, ratio: f64) -> Result<()> {
    writeln!(
        out,
        "Pair {}: {}/{} ({}/{}), ratio: {}",
        n,
        pair.numerator.label(),
        pair.denominator.label(),
        pair.numerator.value,
        pair.denominator.value,
        ratio
    )?;
    Ok(())
}

// JSON 输出项（仅用于序列化）

#[derive(Serialize)]
struct ResistorItem {
    label: String,
    position: usize,
    value: f64,
}

impl From<&Measurement> for ResistorItem {
    fn from(m: &Measurement) -> Self {
        Self { label: m.label(), position: m.position, value: m.value }
    }
}

#[derive(Serialize)]
struct PairReport {
    target_ratio: f64,
    pairs: Vec<PairItem>,
}

#[derive(Serialize)]
struct PairItem {
    a: ResistorItem,
    b: ResistorItem,
    ratio: f64,
    error_percent: f64,
}

impl From<&PairCandidate> for PairItem {
    fn from(c: &PairCandidate) -> Self {
        Self {
            a: ResistorItem::from(&c.a),
            b: ResistorItem::from(&c.b),
            ratio: c.ratio,
            error_percent: c.error_percent(),
        }
    }
}

#[derive(Serialize)]
struct QuadReport {
    results: Vec<QuadItem>,
}

#[derive(Serialize)]
struct RatioPairItem {
    numerator: ResistorItem,
    denominator: ResistorItem,
    ratio: f64,
}

#[derive(Serialize)]
struct QuadItem {
    pair1: RatioPairItem,
    pair2: RatioPairItem,
    ratio_of_ratios: f64,
    mismatch_percent: f64,
}

impl From<&QuadCandidate> for QuadItem {
    fn from(c: &QuadCandidate) -> Self {
        let item = |p: &RatioPair, ratio: f64| RatioPairItem {
            numerator: ResistorItem::from(&p.numerator),
            denominator: ResistorItem::from(&p.denominator),
            ratio,
        };
        Self {
            pair1: item(&c.first, c.ratio1),
            pair2: item(&c.second, c.ratio2),
            ratio_of_ratios: c.ratio_of_ratios,
            mismatch_percent: c.mismatch_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score_pair, score_quad};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn pair_text_lines() {
        let (a, b, c) = (
            Measurement::new(4, 99.45),
            Measurement::new(6, 99.45),
            Measurement::new(7, 200.0),
        );
        let ranked = vec![score_pair(1.0, [&a, &b]), score_pair(1.0, [&a, &c])];
        let txt = render(|out| write_pair_report(out, 1.0, &ranked, OutputFormat::Text));
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "Best 2 pairs:");
        assert_eq!(lines[1], "r4 & r6 (99.45 & 99.45): ratio = 1.000000 (error = 0.000000%)");
        assert_eq!(lines[2], "r4 & r7 (99.45 & 200): ratio = 0.497250 (error = -50.275000%)");
    }

    #[test]
    fn single_pair_heading_is_singular() {
        let (a, b) = (Measurement::new(1, 1.0), Measurement::new(2, 2.0));
        let ranked = vec![score_pair(0.5, [&a, &b])];
        let txt = render(|out| write_pair_report(out, 0.5, &ranked, OutputFormat::Text));
        assert!(txt.starts_with("Best 1 pair:\n"));
    }

    #[test]
    fn quad_text_block() {
        let rs = [
            Measurement::new(1, 10.004),
            Measurement::new(3, 9.999),
            Measurement::new(8, 9.917),
            Measurement::new(10, 9.922),
        ];
        // 配对 (a,d),(b,c)
        let best = score_quad([&rs[0], &rs[1], &rs[2], &rs[3]])[4].clone();
        let txt = render(|out| write_quad_report(out, std::slice::from_ref(&best), OutputFormat::Text));
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Best result:");
        assert!(lines[1].starts_with("Pair 1: r1/r10 (10.004/9.922), ratio: 1.00826"));
        assert!(lines[2].starts_with("Pair 2: r3/r8 (9.999/9.917), ratio: 1.00826"));
        assert_eq!(lines[3], "These pairs form ratios which are mis-matched by 0.000413%");
    }

    #[test]
    fn quad_text_numbers_multiple_results() {
        let rs = [1.0, 2.0, 3.0, 4.0].map(|v| Measurement::new(v as usize, v));
        let cands = score_quad([&rs[0], &rs[1], &rs[2], &rs[3]]);
        let txt = render(|out| write_quad_report(out, &cands[..2], OutputFormat::Text));
        assert!(txt.starts_with("Result 1:\n"));
        assert!(txt.contains("\n\nResult 2:\n"));
    }

    #[test]
    fn pair_json_has_labels_and_percent() {
        let (a, b) = (Measurement::new(1, 100.0), Measurement::new(2, 200.0));
        let ranked = vec![score_pair(1.0, [&a, &b])];
        let txt = render(|out| write_pair_report(out, 1.0, &ranked, OutputFormat::Json));
        let v: serde_json::Value = serde_json::from_str(&txt).unwrap();
        assert_eq!(v["target_ratio"], 1.0);
        assert_eq!(v["pairs"][0]["a"]["label"], "r1");
        assert_eq!(v["pairs"][0]["b"]["value"], 200.0);
        assert_eq!(v["pairs"][0]["error_percent"], -50.0);
    }

    #[test]
    fn quad_json_has_both_pairs() {
        let rs = [10.0; 4];
        let ms: Vec<Measurement> = rs.iter().enumerate().map(|(i, &v)| Measurement::new(i + 1, v)).collect();
        let best = score_quad([&ms[0], &ms[1], &ms[2], &ms[3]])[0].clone();
        let txt = render(|out| write_quad_report(out, &[best], OutputFormat::Json));
        let v: serde_json::Value = serde_json::from_str(&txt).unwrap();
        let r = &v["results"][0];
        assert_eq!(r["pair1"]["numerator"]["label"], "r1");
        assert_eq!(r["pair2"]["denominator"]["label"], "r4");
        assert_eq!(r["ratio_of_ratios"], 1.0);
        assert_eq!(r["mismatch_percent"], 0.0);
    }
}
