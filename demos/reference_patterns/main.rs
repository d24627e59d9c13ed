//! # 内置 reference 数据集示例
//!
//! 构建 Network(4, 6, 3)，在9个手工标注的样本上训练，再对两个新样本做预测。
//! 训练误差每500轮以日志输出一次。
//!
//! ## 运行
//! ```bash
//! cargo run --example reference_patterns
//! # 可选：从 JSON 文件加载训练配置
//! cargo run --example reference_patterns -- train_config.json
//! ```

use anyhow::Result;
use simple_net::data::datasets::reference_patterns;
use simple_net::nn::{Network, TrainConfig};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // 日志
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match std::env::args().nth(1) {
        Some(path) => TrainConfig::from_json_file(&path)?,
        None => TrainConfig::default(),
    };
    info!(?config, "训练配置");

    println!("网络: Input(4) -> Hidden(6, Sigmoid) -> Output(3, Sigmoid)\n");
    let mut net = Network::new(4, 6, 3);
    net.train(&reference_patterns(), &config)?;

    let inputs = [vec![2.0, 3.0, 5.0, 6.0], vec![5.2, 4.9, 2.0, 0.1]];
    for (input, prediction) in inputs.iter().zip(net.predict(&inputs)?) {
        println!("{:?} -> {:.4?}", input, prediction);
    }
    Ok(())
}
