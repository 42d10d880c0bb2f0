//! 页面渲染

pub mod components;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use components::{
    empty_state, footer, header, new_task_dialog, rename_dialog, task_list, theme_selector, toast,
};

/// 渲染主页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    // 上下布局：Header + 列表 + Footer
    let [header_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // Header：Logo + 时钟 + 统计
    header::render(
        frame,
        header_area,
        app.list.len(),
        app.list.done_count(),
        &colors,
    );

    // 内容：任务列表或空状态
    if app.list.is_empty() {
        empty_state::render(frame, content_area, &colors);
    } else {
        task_list::render(
            frame,
            content_area,
            app.list.tasks(),
            &mut app.table_state,
            &colors,
        );
    }

    // Footer：快捷键提示
    footer::render(frame, footer_area, !app.list.is_empty(), &colors);

    // Create 往返进行中：loading spinner
    if app.list.creating() {
        toast::render_loading(frame, "Creating task...", &colors);
    } else if let Some(ref t) = app.toast {
        if !t.is_expired() {
            if t.is_error {
                toast::render_error(frame, &t.message, &colors);
            } else {
                toast::render(frame, &t.message, &colors);
            }
        }
    }

    // 弹窗
    if app.show_new_task_dialog {
        new_task_dialog::render(frame, &app.new_task_input, &colors);
    }
    if let Some(ref dialog) = app.rename_dialog {
        rename_dialog::render(frame, dialog, &colors);
    }
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, &colors);
    }
}
