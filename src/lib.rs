//! # Simple Net
//!
//! `simple_net`是一个极简的有监督学习训练器：输入层、单隐藏层、输出层全连接的三层感知机，
//! 使用 Sigmoid 激活，以带“增量记忆”（delta memory）项的在线反向传播进行训练。
//!
//! ```ignore
//! use simple_net::data::datasets::reference_patterns;
//! use simple_net::nn::{Network, TrainConfig};
//!
//! let mut net = Network::new_seeded(4, 6, 3, 42);
//! net.train(&reference_patterns(), &TrainConfig::default())?;
//! let predictions = net.predict(&[vec![2.0, 3.0, 5.0, 6.0]])?;
//! ```

pub mod data;
pub mod errors;
pub mod nn;
pub mod utils;
