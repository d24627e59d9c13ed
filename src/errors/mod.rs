use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 网络运算相关错误
#[derive(Error, Debug, PartialEq)]
pub enum NetworkError {
    /// 向量长度与网络结构不符（`feed_forward`的输入或`back_propagate`的目标）
    #[error("{argument}长度错误：期望{expected}，实际为{got}")]
    InvalidArgument {
        argument: Argument,
        expected: usize,
        got: usize,
    },

    // 仅由`Network::from_weights`产生
    #[error("{message}：期望形状{expected:?}，实际形状{got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
}

impl NetworkError {
    pub(crate) fn check_len(argument: Argument, expected: usize, got: usize) -> Result<(), Self> {
        if expected == got {
            Ok(())
        } else {
            Err(Self::InvalidArgument {
                argument,
                expected,
                got,
            })
        }
    }
}

/// 训练配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    Parse(#[from] serde_json::Error),
}
