// ==========================================
// 钢结构 ERP - 日志系统
// ==========================================
// 工具: tracing + tracing-subscriber
// 级别: RUST_LOG 优先, 未设置时使用 DEFAULT_DIRECTIVES
// ==========================================

use crate::error::{ErpError, ErpResult};
use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤: 本库 info, 依赖库只输出 warn 及以上
pub const DEFAULT_DIRECTIVES: &str = "warn,steel_erp_core=info";

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 人类可读（终端）
    #[default]
    Pretty,
    /// 每行一个 JSON 对象（日志采集）
    Json,
}

/// 初始化全局日志订阅器
///
/// # 环境变量
/// - RUST_LOG: 例如 RUST_LOG=steel_erp_core=debug
///
/// # 示例
/// ```no_run
/// use steel_erp_core::logging::{self, LogFormat};
/// logging::init(LogFormat::Pretty).expect("日志初始化失败");
/// ```
///
/// # 错误
/// 全局订阅器已被设置时返回 ErpError::Config
pub fn init(format: LogFormat) -> ErpResult<()> {
    let filter = env_filter(DEFAULT_DIRECTIVES);

    let result = match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .try_init(),
        LogFormat::Json => fmt()
            .json()
            .with_current_span(false)
            .with_env_filter(filter)
            .try_init(),
    };

    result.map_err(|e| ErpError::Config(format!("日志系统初始化失败: {}", e)))
}

/// 测试用: debug 级别, 输出交给测试框架捕获; 重复调用静默忽略
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(env_filter("steel_erp_core=debug"))
        .with_test_writer()
        .try_init();
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
