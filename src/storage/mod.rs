pub mod config;

use std::path::PathBuf;

/// 获取 ~/.coredo/ 目录路径
///
/// 只存放应用配置（主题、API 地址）。任务数据不落盘，
/// 全部持久化委托给远程存储。
pub fn coredo_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".coredo")
}
