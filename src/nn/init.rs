/*
 * @Date         : 2026-10-19
 * @Description  : 权重初始化（标准正态分布，随机源由调用方注入）
 */

use ndarray::Array2;
use rand::Rng;

/// 创建一个服从正态分布的`rows`×`cols`随机矩阵（按行优先顺序填充）。
/// 使用 Box-Muller 变换，每次取两个均匀样本生成两个正态样本，非有限值（如`ln(0)`导致的）直接丢弃。
/// 相同种子的`rng`总是得到相同的矩阵。
pub fn normal_matrix<R: Rng + ?Sized>(
    mean: f64,
    std_dev: f64,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Array2<f64> {
    let data_len = rows * cols;
    let mut data = Vec::with_capacity(data_len);

    while data.len() < data_len {
        let u1: f64 = rng.r#gen();
        let u2: f64 = rng.r#gen();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;
        let z0 = mean + std_dev * r * theta.cos();
        let z1 = mean + std_dev * r * theta.sin();

        if z0.is_finite() {
            data.push(z0);
        }
        if data.len() < data_len && z1.is_finite() {
            data.push(z1);
        }
    }

    Array2::from_shape_fn((rows, cols), |(i, j)| data[i * cols + j])
}
