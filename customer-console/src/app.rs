//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Ok(msg) = completions.try_recv() {    // 取出已完成的后台请求
//!         step(msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         step(handle_event(event, &app))
//!     }
//! }
//!
//! step 调用 update::update；若返回 ApiRequest，则交给 CustomerService 在后台执行。
//! update 只在主线程上运行，因此状态永远不会被并发修改。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CustomerService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    service: &CustomerService,
    completions: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用已完成的请求
        while let Ok(msg) = completions.try_recv() {
            step(app, service, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            step(app, service, msg);
        }
    }

    log::info!("Main loop exited");
    Ok(())
}

fn step(app: &mut App, service: &CustomerService, msg: AppMessage) {
    if let Some(request) = update::update(app, msg) {
        service.dispatch(request);
    }
}
