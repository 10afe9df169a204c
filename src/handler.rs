//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `reveal` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::bitstream::{pack, unpack};
use crate::cli::{HideArgs, RevealArgs};
use crate::error::StegoError;
use crate::steganography::{capacity, embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 缺省的隐写输出路径：与源图像同目录的 `veiled_<文件名>`。
fn default_veiled_path(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map_or_else(|| "image.bmp".into(), |n| n.to_string_lossy().into_owned());
    image.with_file_name(format!("veiled_{name}"))
}

/// 缺省的提取输出路径：与源图像同目录的 `revealed_<主名>.txt`。
fn default_revealed_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map_or_else(|| "image".into(), |s| s.to_string_lossy().into_owned());
    image.with_file_name(format!("revealed_{stem}.txt"))
}

/// 覆盖保护：目标文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、检查隐写空间是否足够、将文本打包为带结束标记的
/// 比特流并写入像素区域的最低有效位，最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像的像素区域没有足够的空间，且未指定 `--truncate`。
/// * 核心嵌入函数 (`embed`) 在执行过程中失败。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let dest = args
        .dest
        .unwrap_or_else(|| default_veiled_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let bits = pack(&text);
    let available = capacity(&picture, args.header_size);

    if !args.truncate {
        anyhow::ensure!(
            available >= bits.len(),
            "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
            bits.len().to_string().red().bold(),
            available.to_string().green().bold()
        );
    }

    let veiled = embed(&picture, &bits, args.header_size, args.truncate).with_context(|| {
        format!(
            "Failed to embed the message into '{}'. \nThe image may be smaller than its {}-byte header region.",
            args.image.to_string_lossy().red().bold(),
            args.header_size.to_string().green()
        )
    })?;

    fs::write(&dest, veiled).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、提取像素区域的最低有效位并扫描结束标记，
/// 最后将还原的文本内容写入目标文本文件。
/// 未找到结束标记不视为失败，仅向用户报告图像不含隐藏信息。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及选项的 `RevealArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 图像比其头部区域还小，无法提取。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let bits = extract(&picture, args.header_size).with_context(|| {
        format!(
            "Failed to extract bits from '{}'. \nThe image may be smaller than its {}-byte header region.",
            args.image.to_string_lossy().red().bold(),
            args.header_size.to_string().green()
        )
    })?;

    let text = match unpack(&bits) {
        Ok(text) => text,
        Err(StegoError::NoMarkerFound) => {
            println!(
                "No hidden message was found in: {}",
                args.image.to_string_lossy().yellow().bold()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let dest = args
        .text
        .unwrap_or_else(|| default_revealed_path(&args.image));
    ensure_writable(&dest, args.force)?;

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully revealed and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}
