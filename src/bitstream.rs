//! # 比特流打包模块
//!
//! 负责载荷字节与比特流之间的双向转换。比特流中每个元素取值 0 或 1，
//! 按 MSB 优先展开，末尾附加一次 [`TERMINATOR`] 结束标记。

use crate::constants::TERMINATOR;
use crate::error::{Result, StegoError};

/// 将载荷字节序列展开为比特流，并附加结束标记。
///
/// 对任意字节序列（包括空序列）都能成功；空载荷的结果即为裸的结束标记。
pub fn pack(payload: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(payload.len() * 8 + TERMINATOR.len());

    for &byte in payload {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }

    bits.extend_from_slice(&TERMINATOR);
    bits
}

/// 从比特流中还原载荷字节序列。
///
/// 以结束标记的首次出现作为载荷边界；若载荷自身的比特恰好构成该模式，
/// 解码将在此提前截断。边界之前的比特按 8 位一组（MSB 优先）重组为字节，
/// 末尾不足 8 位的部分直接丢弃。
///
/// # Errors
///
/// 整个比特流中不存在结束标记时返回 [`StegoError::NoMarkerFound`]。
pub fn unpack(bits: &[u8]) -> Result<Vec<u8>> {
    let end = bits
        .windows(TERMINATOR.len())
        .position(|window| window == TERMINATOR)
        .ok_or(StegoError::NoMarkerFound)?;

    let payload = bits[..end]
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit))
        .collect();

    Ok(payload)
}
