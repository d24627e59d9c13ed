/*
 * @Date         : 2026-10-19
 * @Description  : 网络唯一的激活函数：Sigmoid 及其导数
 */

/// Sigmoid 激活：1 / (1 + e^(-x))
///
/// 对极端输入不做特殊处理：结果渐近饱和到0或1，计算照常进行。
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid 的导数，以“已经过 sigmoid 的值”`y`表示：y * (1 - y)
pub fn dsigmoid(y: f64) -> f64 {
    y * (1.0 - y)
}
