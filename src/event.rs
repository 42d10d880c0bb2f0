use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时，同时驱动时钟与 spinner 重绘）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // New Task 弹窗
    if app.show_new_task_dialog {
        handle_new_task_dialog_key(app, key);
        return;
    }

    // Rename 弹窗
    if app.rename_dialog.is_some() {
        handle_rename_dialog_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理主列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 翻转完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 新建任务
        KeyCode::Char('n') | KeyCode::Char('a') => app.open_new_task_dialog(),

        // 改名
        KeyCode::Char('e') => app.open_rename_dialog(),

        // 删除
        KeyCode::Char('d') | KeyCode::Char('x') => app.delete_selected(),

        // 手动 Refresh
        KeyCode::Char('r') => {
            app.refresh();
            app.show_toast("Refreshing...");
        }

        // 主题选择器
        KeyCode::Char('t') => app.open_theme_selector(),

        _ => {}
    }
}

/// 处理 New Task 弹窗的键盘事件
fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_new_task_dialog(),
        KeyCode::Enter => app.submit_new_task(),
        KeyCode::Backspace => app.new_task_delete_char(),
        KeyCode::Char(c) => app.new_task_input_char(c),
        _ => {}
    }
}

/// 处理 Rename 弹窗的键盘事件
fn handle_rename_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_rename_dialog(),
        KeyCode::Enter => app.submit_rename(),
        KeyCode::Backspace => app.rename_delete_char(),
        KeyCode::Char(c) => app.rename_input_char(c),
        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_theme_selector(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        _ => {}
    }
}
