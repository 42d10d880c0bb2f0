use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::controller::TaskList;
use crate::storage;
use crate::store::RecordStore;
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
    /// 失败提示（用错误色渲染）
    pub is_error: bool,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
            is_error: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Rename 弹窗状态
#[derive(Debug, Clone)]
pub struct RenameDialog {
    /// 被改名记录的 id
    pub id: String,
    /// 原标题（展示用）
    pub original: String,
    /// 输入缓冲
    pub input: String,
}

/// 全局应用状态
///
/// 任务集合只存在一处（控制器内），渲染层按引用读取。
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表控制器
    pub list: TaskList,
    /// 列表选择状态
    pub table_state: TableState,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 是否显示 New Task 弹窗
    pub show_new_task_dialog: bool,
    /// New Task 输入内容
    pub new_task_input: String,
    /// Rename 弹窗
    pub rename_dialog: Option<RenameDialog>,
}

impl App {
    pub fn new(store: Arc<dyn RecordStore>, theme: Theme) -> Self {
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        let mut list = TaskList::new(store);
        // 启动即做一次整体 Refresh
        list.refresh();

        Self {
            should_quit: false,
            list,
            table_state: TableState::default(),
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            show_new_task_dialog: false,
            new_task_input: String::new(),
            rename_dialog: None,
        }
    }

    /// 处理后台请求结果（主循环每帧调用）
    pub fn poll_bg(&mut self) {
        if self.list.poll() {
            self.ensure_selection();
        }
        if let Some(err) = self.list.take_error() {
            self.show_error_toast(err);
        }
    }

    // ========== 选择 ==========

    /// 当前选中记录的 id
    pub fn selected_id(&self) -> Option<String> {
        let index = self.table_state.selected()?;
        self.list.tasks().get(index).map(|t| t.id.clone())
    }

    /// 确保选中项落在集合范围内
    pub fn ensure_selection(&mut self) {
        let len = self.list.len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        match self.table_state.selected() {
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.list.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.list.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.table_state.select(Some(prev));
    }

    // ========== 操作 ==========

    /// 手动 Refresh
    pub fn refresh(&mut self) {
        self.list.refresh();
    }

    /// 翻转当前选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.list.toggle(&id);
        }
    }

    /// 删除当前选中任务（本地立即移除）
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.list.delete(&id);
            self.ensure_selection();
        }
    }

    // ========== New Task 弹窗 ==========

    /// 打开 New Task 弹窗（Create 往返进行中时禁用）
    pub fn open_new_task_dialog(&mut self) {
        if self.list.creating() {
            self.show_toast("Create in progress...");
            return;
        }
        self.new_task_input.clear();
        self.show_new_task_dialog = true;
    }

    /// 关闭 New Task 弹窗
    pub fn close_new_task_dialog(&mut self) {
        self.show_new_task_dialog = false;
        self.new_task_input.clear();
    }

    /// New Task 输入字符
    pub fn new_task_input_char(&mut self, c: char) {
        self.new_task_input.push(c);
    }

    /// New Task 删除字符
    pub fn new_task_delete_char(&mut self) {
        self.new_task_input.pop();
    }

    /// 提交新任务
    ///
    /// 空白标题是 no-op（弹窗保持打开）。提交后 UI 等待往返完成，
    /// 期间显示 loading spinner，完成后由控制器触发整体 Refresh。
    pub fn submit_new_task(&mut self) {
        let title = self.new_task_input.clone();
        if self.list.create(&title) {
            self.close_new_task_dialog();
        }
    }

    // ========== Rename 弹窗 ==========

    /// 打开 Rename 弹窗（预填当前标题）
    pub fn open_rename_dialog(&mut self) {
        let Some(index) = self.table_state.selected() else {
            return;
        };
        let Some(task) = self.list.tasks().get(index) else {
            return;
        };
        self.rename_dialog = Some(RenameDialog {
            id: task.id.clone(),
            original: task.title.clone(),
            input: task.title.clone(),
        });
    }

    /// 关闭 Rename 弹窗
    pub fn close_rename_dialog(&mut self) {
        self.rename_dialog = None;
    }

    /// Rename 输入字符
    pub fn rename_input_char(&mut self, c: char) {
        if let Some(ref mut dialog) = self.rename_dialog {
            dialog.input.push(c);
        }
    }

    /// Rename 删除字符
    pub fn rename_delete_char(&mut self) {
        if let Some(ref mut dialog) = self.rename_dialog {
            dialog.input.pop();
        }
    }

    /// 提交改名；空白标题是 no-op（弹窗保持打开）
    pub fn submit_rename(&mut self) {
        let Some(dialog) = self.rename_dialog.clone() else {
            return;
        };
        if dialog.input.trim().is_empty() {
            return;
        }
        self.list.rename(&dialog.id, &dialog.input);
        self.close_rename_dialog();
    }

    // ========== 主题 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        let themes = Theme::all();
        self.theme_selector_index = themes
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个（实时预览）
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个（实时预览）
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并持久化
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;
        self.save_theme();
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    fn save_theme(&self) {
        let mut config = storage::config::load_config();
        config.theme = crate::storage::config::ThemeConfig {
            name: self.theme.label().to_string(),
        };
        let _ = storage::config::save_config(&config);
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }
        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 显示失败 Toast（停留更久一些）
    pub fn show_error_toast(&mut self, message: impl Into<String>) {
        let mut toast = Toast::new(message, Duration::from_secs(3));
        toast.is_error = true;
        self.toast = Some(toast);
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockStore;

    fn app() -> App {
        App::new(Arc::new(MockStore::new()), Theme::Dark)
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("hello", Duration::from_millis(0));
        assert!(toast.is_expired());

        let toast = Toast::new("hello", Duration::from_secs(60));
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        // 空集合：导航是 no-op
        app.select_next();
        assert!(app.table_state.selected().is_none());
    }

    #[test]
    fn test_new_task_dialog_input() {
        let mut app = app();
        app.open_new_task_dialog();
        assert!(app.show_new_task_dialog);

        app.new_task_input_char('h');
        app.new_task_input_char('i');
        assert_eq!(app.new_task_input, "hi");

        app.new_task_delete_char();
        assert_eq!(app.new_task_input, "h");

        app.close_new_task_dialog();
        assert!(!app.show_new_task_dialog);
        assert!(app.new_task_input.is_empty());
    }

    #[test]
    fn test_submit_blank_title_keeps_dialog_open() {
        let mut app = app();
        app.open_new_task_dialog();
        app.new_task_input_char(' ');
        app.submit_new_task();
        assert!(app.show_new_task_dialog);
    }
}
