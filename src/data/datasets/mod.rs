//! 内置数据集
//!
//! - reference：9个手工标注的4特征、3类别（one-hot）样本，用于演示和测试

mod reference;

pub use reference::{NUM_CLASSES, NUM_FEATURES, reference_patterns};
