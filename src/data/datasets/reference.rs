//! 手工标注的小型分类数据集
//!
//! - 9 个样本
//! - 4 个特征
//! - 3 个类别，目标为 one-hot 向量
//!
//! 类别0的特征大体递增（如`[1,2,3,4]`），类别1大体递减（如`[4,3,2,1]`），类别2较为平坦（如`[5,5,5,5]`）。

use crate::data::Pattern;

/// 特征数量
pub const NUM_FEATURES: usize = 4;

/// 类别数量
pub const NUM_CLASSES: usize = 3;

const REFERENCE: [([f64; NUM_FEATURES], [f64; NUM_CLASSES]); 9] = [
    ([1.0, 2.0, 3.0, 4.0], [1.0, 0.0, 0.0]),
    ([2.0, 4.0, 5.0, 6.0], [1.0, 0.0, 0.0]),
    ([1.0, 0.5, 0.4, 0.3], [0.0, 1.0, 0.0]),
    ([10.0, 5.0, 4.0, 3.0], [0.0, 1.0, 0.0]),
    ([5.0, 5.0, 5.0, 5.0], [0.0, 0.0, 1.0]),
    ([2.0, 2.0, 3.0, 4.0], [1.0, 0.0, 0.0]),
    ([5.0, 2.0, 5.0, 2.0], [0.0, 0.0, 1.0]),
    ([2.0, 4.0, 4.0, 6.0], [1.0, 0.0, 0.0]),
    ([4.0, 3.0, 2.0, 1.0], [0.0, 1.0, 0.0]),
];

/// 返回数据集的一份新拷贝（顺序固定）
pub fn reference_patterns() -> Vec<Pattern> {
    REFERENCE
        .iter()
        .map(|(inputs, targets)| Pattern::new(inputs, targets))
        .collect()
}
