//! 公共类型（对外暴露）

/// 单个电阻测量值
/// - `position`：源文件中的行号（从 1 开始），仅用于显示
/// - `value`：测得的阻值（正实数）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub position: usize,
    pub value: f64,
}

impl Measurement {
    pub fn new(position: usize, value: f64) -> Self {
        Self { position, value }
    }

    /// 显示用标签，例如 `r4`
    pub fn label(&self) -> String {
        format!("r{}", self.position)
    }
}

/// 一个输入文件加载出的全部测量值（保持文件顺序，允许重复值）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResistorSet {
    measurements: Vec<Measurement>,
}

impl ResistorSet {
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn as_slice(&self) -> &[Measurement] {
        &self.measurements
    }
}

impl From<Vec<Measurement>> for ResistorSet {
    fn from(measurements: Vec<Measurement>) -> Self {
        Self::new(measurements)
    }
}
