/*
 * @Date         : 2026-10-19
 * @Description  : 三层全连接感知机（输入层、单隐藏层、输出层），带增量记忆项的在线反向传播
 */

use ndarray::{Array1, Array2, Zip};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::activation::{dsigmoid, sigmoid};
use super::init::normal_matrix;
use crate::errors::{Argument, NetworkError};

/// 三层感知机
///
/// 网络持有全部状态：两层权重、三层激活缓存以及两层的增量记忆（delta memory）。
/// 输入层额外带一个恒为1.0的偏置单元，位于输入激活的最后一位，调用方的输入永远不会写入该位置。
///
/// # 注意
/// `back_propagate`读取的是紧邻其前那次`feed_forward`留下的激活缓存，
/// 因此两者须针对同一个样本成对调用（`train`内部即是如此）。
#[derive(Debug, Clone)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,

    input_activations: Array1<f64>,
    hidden_activations: Array1<f64>,
    output_activations: Array1<f64>,

    input_weights: Array2<f64>,
    output_weights: Array2<f64>,

    input_weight_delta_memory: Array2<f64>,
    output_weight_delta_memory: Array2<f64>,
}

impl Network {
    /// 创建网络，权重用线程内全局随机源初始化。
    /// 需要可复现结果时请用[`Network::new_seeded`]或[`Network::new_with_rng`]。
    pub fn new(input_count: usize, hidden_count: usize, output_count: usize) -> Self {
        Self::new_with_rng(
            input_count,
            hidden_count,
            output_count,
            &mut rand::thread_rng(),
        )
    }

    /// 使用固定种子创建网络，相同种子得到完全相同的初始权重
    pub fn new_seeded(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(input_count, hidden_count, output_count, &mut rng)
    }

    /// 使用调用方提供的随机源创建网络。
    /// 两层权重均服从标准正态分布（先生成输入层权重，再生成输出层权重），增量记忆全为0。
    /// 任意尺寸（含0）都被接受，0尺寸只会让对应的计算变为空操作。
    pub fn new_with_rng<R: Rng + ?Sized>(
        input_count: usize,
        hidden_count: usize,
        output_count: usize,
        rng: &mut R,
    ) -> Self {
        let input_size = input_count + 1;
        let input_weights = normal_matrix(0.0, 1.0, input_size, hidden_count, rng);
        let output_weights = normal_matrix(0.0, 1.0, hidden_count, output_count, rng);
        Self::with_parts(input_weights, output_weights)
    }

    /// 用给定的权重矩阵创建网络。
    /// `input_weights`形状为`[输入数+1, 隐藏数]`（最后一行对应偏置单元），
    /// `output_weights`形状为`[隐藏数, 输出数]`。
    pub fn from_weights(
        input_weights: Array2<f64>,
        output_weights: Array2<f64>,
    ) -> Result<Self, NetworkError> {
        if input_weights.nrows() == 0 {
            return Err(NetworkError::ShapeMismatch {
                expected: vec![1, input_weights.ncols()],
                got: input_weights.shape().to_vec(),
                message: "输入层权重至少需要1行（偏置单元）".to_string(),
            });
        }
        if input_weights.ncols() != output_weights.nrows() {
            return Err(NetworkError::ShapeMismatch {
                expected: vec![input_weights.ncols(), output_weights.ncols()],
                got: output_weights.shape().to_vec(),
                message: "输出层权重行数须等于隐藏层单元数".to_string(),
            });
        }
        Ok(Self::with_parts(input_weights, output_weights))
    }

    fn with_parts(input_weights: Array2<f64>, output_weights: Array2<f64>) -> Self {
        let (input_size, hidden_size) = input_weights.dim();
        let output_size = output_weights.ncols();
        Self {
            input_size,
            hidden_size,
            output_size,
            input_activations: Array1::ones(input_size),
            hidden_activations: Array1::ones(hidden_size),
            output_activations: Array1::ones(output_size),
            input_weight_delta_memory: Array2::zeros(input_weights.raw_dim()),
            output_weight_delta_memory: Array2::zeros(output_weights.raw_dim()),
            input_weights,
            output_weights,
        }
    }

    /// 前向传播：返回输出层激活的一份拷贝。
    ///
    /// 会覆盖三层激活缓存；权重不变时，同样的输入总得到同样的输出。
    pub fn feed_forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        NetworkError::check_len(Argument::Inputs, self.input_count(), inputs.len())?;

        // 偏置位（最后一位）保持1.0
        self.input_activations
            .iter_mut()
            .zip(inputs)
            .for_each(|(activation, &input)| *activation = input);

        self.hidden_activations = self.input_activations.dot(&self.input_weights).mapv(sigmoid);
        self.output_activations = self
            .hidden_activations
            .dot(&self.output_weights)
            .mapv(sigmoid);

        Ok(self.output_activations.to_vec())
    }

    /// 反向传播并更新权重，返回本样本的误差`0.5 * Σ(target - output)^2`（按更新前的输出计算）。
    ///
    /// 每个权重的更新量为`learning_rate * change + 上次的change`，随后记下本次的`change`。
    /// 上次的`change`不乘任何系数，直接叠加。
    pub fn back_propagate(
        &mut self,
        targets: &[f64],
        learning_rate: f64,
    ) -> Result<f64, NetworkError> {
        NetworkError::check_len(Argument::Targets, self.output_size, targets.len())?;
        let targets = Array1::from(targets.to_vec());

        // 1. 输出层误差项
        let output_deltas = Zip::from(&self.output_activations)
            .and(&targets)
            .map_collect(|&output, &target| dsigmoid(output) * (output - target));

        // 2. 隐藏层误差项（使用更新前的输出层权重）
        let hidden_deltas = Zip::from(&self.hidden_activations)
            .and(&self.output_weights.dot(&output_deltas))
            .map_collect(|&hidden, &error| dsigmoid(hidden) * error);

        // 3. 更新隐藏层->输出层权重
        update_weights(
            &mut self.output_weights,
            &mut self.output_weight_delta_memory,
            &self.hidden_activations,
            &output_deltas,
            learning_rate,
        );

        // 4. 更新输入层->隐藏层权重
        update_weights(
            &mut self.input_weights,
            &mut self.input_weight_delta_memory,
            &self.input_activations,
            &hidden_deltas,
            learning_rate,
        );

        // 5. 误差（输出激活在本函数中未被改动，即更新前的值）
        let error = Zip::from(&targets)
            .and(&self.output_activations)
            .fold(0.0, |acc, &target, &output| {
                acc + 0.5 * (target - output).powi(2)
            });
        Ok(error)
    }

    /// 对每个输入依次做前向传播，按相同顺序返回各自的输出。
    /// 遇到第一个长度错误的输入即返回错误。
    pub fn predict(&mut self, inputs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, NetworkError> {
        inputs
            .iter()
            .map(|input| self.feed_forward(input))
            .collect()
    }
}

/// `weights[i][j] -= learning_rate * change + memory[i][j]`，然后`memory[i][j] = change`，
/// 其中`change = deltas[j] * activations[i]`
fn update_weights(
    weights: &mut Array2<f64>,
    memory: &mut Array2<f64>,
    activations: &Array1<f64>,
    deltas: &Array1<f64>,
    learning_rate: f64,
) {
    Zip::indexed(weights)
        .and(memory)
        .for_each(|(i, j), weight, last_change| {
            let change = deltas[j] * activations[i];
            *weight -= learning_rate * change + *last_change;
            *last_change = change;
        });
}

// 只读访问
impl Network {
    /// 输入单元数（不含偏置）
    pub fn input_count(&self) -> usize {
        self.input_size - 1
    }

    /// 输入层尺寸（含偏置单元）
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn input_activations(&self) -> &Array1<f64> {
        &self.input_activations
    }

    pub fn hidden_activations(&self) -> &Array1<f64> {
        &self.hidden_activations
    }

    pub fn output_activations(&self) -> &Array1<f64> {
        &self.output_activations
    }

    /// 输入层->隐藏层权重，形状`[input_size, hidden_size]`
    pub fn input_weights(&self) -> &Array2<f64> {
        &self.input_weights
    }

    /// 隐藏层->输出层权重，形状`[hidden_size, output_size]`
    pub fn output_weights(&self) -> &Array2<f64> {
        &self.output_weights
    }

    pub fn input_weight_delta_memory(&self) -> &Array2<f64> {
        &self.input_weight_delta_memory
    }

    pub fn output_weight_delta_memory(&self) -> &Array2<f64> {
        &self.output_weight_delta_memory
    }
}
