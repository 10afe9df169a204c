/// BMP 文件的标准头部大小 (字节)。
/// 隐写操作将跳过这个头部，从像素数据开始。
pub const BMP_HEADER_SIZE: usize = 54;

/// 载荷结束标记：固定的 16 位哨兵模式 `1111111111111110`。
/// 解码端以该模式的首次出现作为载荷边界；
/// 为与已有隐写图像保持互操作，此模式不可更改。
pub const TERMINATOR: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];
