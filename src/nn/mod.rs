/*
 * @Date         : 2026-10-19
 * @Description  : 负责三层感知机的构建、前向/反向传播与训练
 */

pub mod activation;
mod init;
mod network;
mod train;

pub use activation::{dsigmoid, sigmoid};
pub use init::normal_matrix;
pub use network::Network;
pub use train::{EpochRecord, TrainConfig};

#[cfg(test)]
mod tests;
