//! Customer Console
//!
//! 客户记录管理服务的终端控制台。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新与操作派发 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 异步请求执行 (`backend/`)
//!
//! 启动流程：
//!     解析命令行 → 加载并校验配置 → 初始化文件日志
//!     → 创建 tokio 运行时与 HTTP 客户端 → 初始化终端
//!     → app::run() → 无论成功与否都恢复终端

mod app;
mod backend;
mod config;
mod event;
mod logger;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use customer_client::{CustomerApi, HttpCustomerClient};
use tokio::sync::mpsc;

use backend::CustomerService;
use config::{ConsoleConfig, LogLevel, Overrides};
use util::{init_terminal, install_panic_hook, restore_terminal};

/// Terminal console for the customer record-management service
#[derive(Debug, Parser)]
#[command(name = "customer-console", version, about)]
struct Cli {
    /// Collection endpoint, e.g. http://127.0.0.1:8080/api/customers
    #[arg(long, env = "CUSTOMER_API_ENDPOINT")]
    endpoint: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, env = "CUSTOMER_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    /// Directory holding config.json and the log file
    #[arg(long, env = "CUSTOMER_CONFIG_DIR")]
    config_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 配置
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => ConsoleConfig::default_dir()?,
    };
    let mut config = ConsoleConfig::load(&config_dir)?;
    config.apply_overrides(Overrides {
        endpoint: cli.endpoint,
        log_level: cli.log_level,
    });
    config.validate()?;

    // 2. 日志
    logger::initialize(config.logging.level.into(), &config.log_file(&config_dir))?;
    config.log_summary();
    view::theme::set_theme(config.theme);

    // 3. 运行时与客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let api: Arc<dyn CustomerApi> = Arc::new(HttpCustomerClient::new(&config.client_config())?);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = CustomerService::new(api, runtime.handle().clone(), tx);

    // 4. 终端
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut app = model::App::new();

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &service, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
