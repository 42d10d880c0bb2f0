use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    table_state: &mut TableState,
    colors: &ThemeColors,
) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 状态图标
        Cell::from("TITLE"),
        Cell::from("UPDATED"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    let selected_index = table_state.selected();

    // 数据行
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            // 状态图标样式
            let icon_style = if task.completed {
                Style::default().fg(colors.status_done)
            } else {
                Style::default().fg(colors.status_pending)
            };

            // 已完成任务：灰显 + 删除线
            let title_style = if task.completed {
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(task.icon()).style(icon_style),
                Cell::from(task.title.clone()).style(title_style),
                Cell::from(task.updated_at.clone()).style(Style::default().fg(colors.muted)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Length(2),  // 状态图标
        Constraint::Fill(1),    // TITLE (flex)
        Constraint::Length(22), // UPDATED 时间戳
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(table, area, table_state);
}
