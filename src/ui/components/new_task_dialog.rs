//! New Task 弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染 New Task 弹窗
pub fn render(frame: &mut Frame, input: &str, colors: &ThemeColors) {
    let area = frame.area();

    // 计算弹窗尺寸
    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_height = 7u16;

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(" New Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // 内部布局: 空行 + 输入行 + 空行 + 提示行
    let [_, input_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    // 渲染输入行: "Title: {input}█"
    let input_line = if input.is_empty() {
        Line::from(vec![
            Span::styled("  Title: ", Style::default().fg(colors.muted)),
            Span::styled("█", Style::default().fg(colors.highlight)), // 光标
            Span::styled(" (enter task title)", Style::default().fg(colors.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled("  Title: ", Style::default().fg(colors.muted)),
            Span::styled(input, Style::default().fg(colors.text)),
            Span::styled("█", Style::default().fg(colors.highlight)), // 光标
        ])
    };
    frame.render_widget(Paragraph::new(input_line), input_area);

    // 渲染底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" create  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}
