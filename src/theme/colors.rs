//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// Core 主题（默认深色）- 以绿色 rgb(13,177,130) 为主色
pub fn core_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(18, 22, 21),            // 深灰绿背景
        bg_secondary: Color::Rgb(36, 44, 42),  // 选中行背景
        logo: Color::Rgb(13, 177, 130),        // 主绿色
        highlight: Color::Rgb(13, 177, 130),   // 主绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),      // 灰色
        border: Color::Rgb(58, 68, 64),        // 深灰边框
        status_done: Color::Rgb(13, 177, 130), // 绿色对勾
        status_pending: Color::Rgb(160, 160, 160),
        error: Color::Rgb(255, 85, 85), // 红色
    }
}

/// 深色主题（中性灰）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),
        bg_secondary: Color::Rgb(48, 48, 48),
        logo: Color::Rgb(0, 255, 136),
        highlight: Color::Rgb(0, 255, 136),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        status_done: Color::Rgb(0, 255, 136),
        status_pending: Color::Rgb(160, 160, 160),
        error: Color::Rgb(255, 85, 85),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(248, 250, 249),         // 近白背景
        bg_secondary: Color::Rgb(224, 232, 229),
        logo: Color::Rgb(11, 145, 107),        // 深一档的主绿
        highlight: Color::Rgb(11, 145, 107),
        text: Color::Rgb(20, 20, 20),
        muted: Color::Rgb(130, 140, 136),
        border: Color::Rgb(190, 200, 196),
        status_done: Color::Rgb(11, 145, 107),
        status_pending: Color::Rgb(120, 130, 126),
        error: Color::Rgb(200, 40, 40),
    }
}
