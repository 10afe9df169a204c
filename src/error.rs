//! # 错误类型模块
//!
//! 定义隐写核心的错误分类。所有核心函数都返回结构化错误，
//! 以便边界层按具体类别作出不同处理（例如将 `NoMarkerFound`
//! 报告为"未找到隐藏信息"而非程序失败）。

use thiserror::Error;

/// 隐写核心操作的错误类型。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StegoError {
    /// 提取出的比特流中不存在结束标记，说明图像不含（或已损坏的）隐藏载荷。
    #[error("no end-of-message marker found in the carrier data")]
    NoMarkerFound,

    /// 载体比它自身的头部区域还小，无法划分出像素区域。
    #[error("carrier is {len} bytes, smaller than its {header_size}-byte header")]
    ImageTooSmall { len: usize, header_size: usize },

    /// 比特流长度超过像素区域容量，且调用方未选择截断模式。
    #[error("message needs {required} bits but the carrier holds only {available}")]
    InsufficientCapacity { required: usize, available: usize },
}

/// 核心模块统一使用的 Result 别名。
pub type Result<T> = std::result::Result<T, StegoError>;
