/*
 * @Date         : 2026-10-19
 * @Description  : 训练循环与训练配置
 */

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::Network;
use crate::data::Pattern;
use crate::errors::{ConfigError, NetworkError};

/// 训练配置
///
/// 可从 JSON 加载，缺省的字段取默认值：
/// ```json
/// { "iterations": 3000, "learning_rate": 0.0002, "report_interval": 500 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// 遍历整个训练集的轮数（epoch 数），也是唯一的停止条件
    pub iterations: usize,
    pub learning_rate: f64,
    /// 每隔多少轮（从第0轮开始计）上报一次误差；为0时不上报
    pub report_interval: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            iterations: 3000,
            learning_rate: 0.0002,
            report_interval: 500,
        }
    }
}

impl TrainConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_report_interval(mut self, report_interval: usize) -> Self {
        self.report_interval = report_interval;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn should_report(&self, iteration: usize) -> bool {
        self.report_interval != 0 && iteration % self.report_interval == 0
    }
}

/// 某一轮训练结束时上报的误差记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochRecord {
    /// 轮次（从0开始）
    pub iteration: usize,
    /// 该轮最后一个样本的误差（不是整轮的平均值）；训练集为空时为0
    pub error: f64,
}

impl Network {
    /// 在线训练：每轮按给定顺序对每个样本先`feed_forward`再`back_propagate`。
    ///
    /// 按`config.report_interval`以`info`级别日志上报[`EpochRecord`]。
    /// 每次调用都在当前权重的基础上继续训练。
    pub fn train(&mut self, patterns: &[Pattern], config: &TrainConfig) -> Result<(), NetworkError> {
        self.train_with_observer(patterns, config, |_| {})
    }

    /// 同[`Network::train`]，另外把每条上报的[`EpochRecord`]交给`observer`（如指标收集器）。
    ///
    /// 任一样本长度不符即返回错误，此前已做的权重更新保留。
    pub fn train_with_observer<F>(
        &mut self,
        patterns: &[Pattern],
        config: &TrainConfig,
        mut observer: F,
    ) -> Result<(), NetworkError>
    where
        F: FnMut(&EpochRecord),
    {
        debug!(
            patterns = patterns.len(),
            iterations = config.iterations,
            learning_rate = config.learning_rate,
            "开始训练"
        );

        for iteration in 0..config.iterations {
            let mut error = 0.0;
            for pattern in patterns {
                self.feed_forward(pattern.inputs())?;
                error = self.back_propagate(pattern.targets(), config.learning_rate)?;
            }

            if config.should_report(iteration) {
                let record = EpochRecord { iteration, error };
                info!(iteration, error, "error {:.5}", error);
                observer(&record);
            }
        }

        debug!(iterations = config.iterations, "训练结束");
        Ok(())
    }
}
