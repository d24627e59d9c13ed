use std::fmt::{self, Display};

/// 长度受网络结构约束的调用参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// `feed_forward`的输入向量，长度须为输入单元数（不含偏置）
    Inputs,
    /// `back_propagate`的目标向量，长度须为输出单元数
    Targets,
}
impl Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let argument_name = match self {
            Argument::Inputs => "输入向量",
            Argument::Targets => "目标向量",
        };
        write!(f, "{}", argument_name)
    }
}
