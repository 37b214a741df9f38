mod app;
mod config;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::{anyhow, Context};
use app::App;
use config::{AppConfig, LOG_ENV};
use crate::core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utils::error::Result;
use ui::{CommandBar, Sidebar, StatusBar, WarningScreen, Workspace};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    if let Err(err) = init_logging(&config) {
        // 로그 없이 계속 진행
        eprintln!("warning: {err:#}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "paneldeck starting");

    // Create app
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "app loop failed");
        eprintln!("Error: {:?}", err);
    }
    info!("paneldeck stopped");

    Ok(())
}

/// 로그 파일 경로 (설정 > 캐시 디렉토리)
fn log_file_path(config: &AppConfig) -> Option<PathBuf> {
    config.log_file.clone().or_else(|| {
        dirs::cache_dir().map(|dir| dir.join("paneldeck").join("paneldeck.log"))
    })
}

/// tracing 초기화. 화면을 가리지 않도록 파일로만 기록한다
fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let Some(path) = log_file_path(config) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // 스코프가 없으면 기본값으로 그리지 않고 바로 실패
        let inputs = app.layout_inputs()?;

        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size, inputs);

            if app.layout.is_too_small() {
                // 경고 화면 표시
                let (width, height) = app.layout.terminal_size();
                let warning = WarningScreen::new().current_size(width, height);
                f.render_widget(warning, size);
            } else {
                render_main_ui(f, app, inputs);
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = find_action(key.modifiers, key.code) {
                        app.execute_action(action);
                    }
                }
                Event::Resize(columns, _) => app.handle_resize(columns),
                // 포커스를 잃은 동안의 크기 변화 반영
                Event::FocusGained => app.refresh_viewport(),
                _ => {}
            }
        }

        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App, inputs: ui::LayoutInputs) {
    let areas = app.layout.areas().clone();
    let position = inputs.position.as_str();
    let panel_label = inputs.panel.label();

    let workspace = Workspace::new()
        .viewport(app.viewport.width(), app.viewport.breakpoint(), inputs.is_compact)
        .panel(panel_label, position)
        .demo_mode(app.demo_mode.is_active())
        .recent(app.toast.recent());
    f.render_widget(workspace, areas.main);

    let status_bar = StatusBar::new()
        .toast(app.toast.current())
        .layout_mode(app.layout_mode_str())
        .panel_state(panel_label)
        .position(position)
        .demo_mode(app.demo_mode.is_active());
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new().commands(generate_command_bar_items());
    f.render_widget(command_bar, areas.command_bar);

    // 오버레이는 메인 위에 마지막으로 그린다
    if app.layout.sidebar_visible() {
        let sidebar = Sidebar::new()
            .expanded(inputs.panel.expanded || areas.sidebar_overlay)
            .position(inputs.position)
            .overlay(areas.sidebar_overlay);
        f.render_widget(sidebar, areas.sidebar);
    }
}
