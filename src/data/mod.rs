//! 训练数据模块
//!
//! 训练集就是调用方持有的一串[`Pattern`]（输入向量，目标向量），按给定顺序逐个喂给网络。
//!
//! # 主要组件
//!
//! - [`Pattern`]: 单个训练样本
//! - [`datasets`]: 内置的小型示例数据集
//!
//! # 使用示例
//!
//! ```ignore
//! use simple_net::data::{Pattern, datasets::reference_patterns};
//!
//! let mut patterns = reference_patterns();
//! patterns.push(Pattern::new(&[3.0, 3.0, 3.0, 3.0], &[0.0, 0.0, 1.0]));
//! net.train(&patterns, &TrainConfig::default())?;
//! ```

pub mod datasets;


/// 单个训练样本：输入向量与目标向量
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    inputs: Vec<f64>,
    targets: Vec<f64>,
}

impl Pattern {
    pub fn new(inputs: &[f64], targets: &[f64]) -> Self {
        Self {
            inputs: inputs.to_vec(),
            targets: targets.to_vec(),
        }
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Pattern {
    fn from((inputs, targets): (Vec<f64>, Vec<f64>)) -> Self {
        Self { inputs, targets }
    }
}
