mod colors;

use std::process::Command;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Core,
    Dark,
    Light,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Core => "Core",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[Theme::Auto, Theme::Core, Theme::Dark, Theme::Light]
    }

    /// 按名称解析主题，大小写不敏感；未知名称返回 None
    pub fn try_from_name(name: &str) -> Option<Self> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(name))
    }

    /// 按名称解析主题（用于配置加载），未知名称回落 Auto
    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or_default()
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// Logo 颜色
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 状态 - 已完成
    pub status_done: Color,
    /// 状态 - 未完成
    pub status_pending: Color,
    /// 错误色（失败 Toast）
    pub error: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                core_colors()
            } else {
                light_colors()
            }
        }
        Theme::Core => core_colors(),
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
    }
}

/// Auto 模式下探测系统外观，true 表示深色
///
/// 只有 macOS 提供可查询的全局外观：`defaults read -g AppleInterfaceStyle`
/// 在深色外观下输出 "Dark"，浅色外观下该键不存在、命令以非零退出。
/// 命令本身不存在（非 macOS）或执行失败时按浅色处理。
pub fn detect_system_theme() -> bool {
    let Ok(output) = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    else {
        return false;
    };
    output.status.success()
        && String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark")
}
