mod app;
mod cli;
mod controller;
mod error;
mod event;
mod model;
mod storage;
mod store;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::sync::Arc;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use store::HttpStore;
use theme::Theme;

/// 默认的远程记录存储端点（mockapi.io 托管）
const DEFAULT_API_URL: &str = "https://69080b1eb49bea95fbf23575.mockapi.io/api/v1/Todo";

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数与配置
    let cli = Cli::parse();
    let config = storage::config::load_config();

    // 优先级：命令行 > 配置文件 > 内置默认
    let api_url = cli
        .api_url
        .or(config.api.url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    // 未知的 --theme 不静默回落：启动后用 Toast 提示
    let mut theme_warning = None;
    let theme = match cli.theme {
        Some(ref name) => Theme::try_from_name(name).unwrap_or_else(|| {
            theme_warning = Some(format!("Unknown theme: {}", name));
            Theme::from_name(&config.theme.name)
        }),
        None => Theme::from_name(&config.theme.name),
    };

    let store = Arc::new(HttpStore::new(api_url));

    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用（构造时即发起首次 Refresh）
    let mut app = App::new(store, theme);
    if let Some(message) = theme_warning {
        app.show_error_toast(message);
    }

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 处理后台请求结果
        app.poll_bg();

        // 渲染界面
        terminal.draw(|frame| ui::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
