use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// 在屏幕底部居中显示 Toast 消息
pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    render_box(frame, message, colors.highlight, colors);
}

/// 失败 Toast（错误色边框）
pub fn render_error(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    render_box(frame, message, colors.error, colors);
}

/// 在屏幕底部居中显示 Loading Toast（带 spinner 动画）
pub fn render_loading(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    // 选择 spinner 帧（基于时间，每 100ms 切换）
    let tick = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / 100;
    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    let display = format!("{} {}", spinner, message);

    render_box(frame, &display, colors.highlight, colors);
}

fn render_box(frame: &mut Frame, message: &str, border: Color, colors: &ThemeColors) {
    let area = frame.area();

    // 计算 Toast 尺寸和位置；终端过小时放弃渲染
    let toast_height = 3;
    if area.height < toast_height || area.width < 4 {
        return;
    }
    let toast_width = (message.chars().count() + 6).min((area.width as usize).saturating_sub(4)) as u16;
    let toast_x = area.width.saturating_sub(toast_width) / 2;
    let toast_y = area.height.saturating_sub(toast_height + 3);

    let toast_area = Rect::new(toast_x, toast_y, toast_width, toast_height);

    // 清除背景
    frame.render_widget(Clear, toast_area);

    let toast = Paragraph::new(message)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_colors;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_all(width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let colors = dark_colors();
        terminal
            .draw(|frame| render(frame, "network unreachable", &colors))
            .unwrap();
        terminal
            .draw(|frame| render_error(frame, "request failed: timeout", &colors))
            .unwrap();
        terminal
            .draw(|frame| render_loading(frame, "Creating task...", &colors))
            .unwrap();
    }

    #[test]
    fn test_render_on_normal_terminal() {
        draw_all(80, 24);
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        // 比 Toast 边框还窄/矮的终端不能 panic
        draw_all(3, 3);
        draw_all(2, 2);
        draw_all(1, 6);
    }
}
