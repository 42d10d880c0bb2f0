use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::logo;

/// Header 总高度：1 (边框) + 6 (Logo) + 1 (下边距) + 1 (状态行) = 9
pub const HEADER_HEIGHT: u16 = 9;

/// 渲染顶部区域（Logo + 时钟 + 统计）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    node_count: usize,
    done_count: usize,
    colors: &ThemeColors,
) {
    // 外框
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 内部垂直布局
    let [logo_area, bottom_padding, status_area] = Layout::vertical([
        Constraint::Length(logo::LOGO_HEIGHT), // Logo
        Constraint::Length(1),                 // 下边距
        Constraint::Length(1),                 // 状态行
    ])
    .areas(inner_area);

    // 渲染 Logo
    logo::render(frame, logo_area, colors);

    // 渲染状态行（左：系统时间，右：统计）
    render_status_line(frame, status_area, node_count, done_count, colors);

    // 填充空白区域（防止残留）
    let empty = Paragraph::new("");
    frame.render_widget(empty, bottom_padding);
}

fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    node_count: usize,
    done_count: usize,
    colors: &ThemeColors,
) {
    // 每帧取一次本地时间；100ms 的事件轮询周期保证秒级刷新
    let clock = Local::now().format("%H:%M:%S").to_string();

    let left = Span::styled(
        format!(" {}", clock),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    );

    let right_spans = [
        Span::styled(format!("{} nodes", node_count), Style::default().fg(colors.muted)),
        Span::styled(" · ", Style::default().fg(colors.border)),
        Span::styled(
            format!("{} done ", done_count),
            Style::default().fg(colors.status_done),
        ),
    ];

    // 计算中间填充空格
    let total_width = area.width as usize;
    let used_width = left.width() + right_spans.iter().map(|s| s.width()).sum::<usize>();
    let padding_len = total_width.saturating_sub(used_width);
    let padding = " ".repeat(padding_len);

    let mut spans = vec![left, Span::raw(padding)];
    spans.extend(right_spans);

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
