//! zdesk - 编辑器会话控制核心库
//!
//! 模块结构：
//! - models: 数据模型（DirTree）
//! - kernel: 核心层（state/action/effect/event，service ports/adapters）
//! - session: 会话层（Session：store + runtime + notifications）
//! - logging: tracing 初始化

pub mod kernel;
pub mod logging;
pub mod models;
pub mod session;
