//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::BMP_HEADER_SIZE;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在未压缩的 BMP 图像中隐藏或提取文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在未压缩的 BMP 图像中隐藏或提取文本。载荷以 16 位哨兵标记结尾，每个像素字节承载 1 位。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 reveal (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在未压缩的 BMP 图像中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的图像中提取隐藏的文本。
    Reveal(RevealArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (未压缩 BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。缺省时在源图像目录下生成 `veiled_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,

    /// 容量不足时按尽力而为的方式截断写入，而不是报错。
    /// 截断可能导致结束标记丢失，使后续提取失败。
    #[arg(long)]
    pub truncate: bool,

    /// 载体头部区域的大小 (字节)，该区域不参与隐写。
    #[arg(long, default_value_t = BMP_HEADER_SIZE)]
    pub header_size: usize,
}

/// 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取文本后，保存文本内容的输出路径。缺省时在源图像目录下生成 `revealed_<主名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,

    /// 载体头部区域的大小 (字节)，该区域不参与隐写。
    #[arg(long, default_value_t = BMP_HEADER_SIZE)]
    pub header_size: usize,
}
