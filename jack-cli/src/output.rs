//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Coloured terminal messages for the CLI, and the stderr logger installed
//! by `--verbose`.
//! 为 CLI 提供彩色终端输出，以及 `--verbose` 启用的标准错误日志记录器。

use log::{LevelFilter, Log, Metadata, Record};

/// Print a success message in green.
/// 以绿色打印成功消息。
pub fn success(msg: &str) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    println!("\x1b[34minfo:\x1b[0m {msg}");
}

/// Writes every record to stderr, dimmed so it stays apart from real output.
/// 将每条日志以暗色写入标准错误输出，与正常输出区分开。
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!(
            "\x1b[90m{:<5} {}: {}\x1b[0m",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Route `log` output to stderr when running verbosely.
/// 详细模式下将 `log` 输出重定向到标准错误。
pub fn init_logger(verbose: bool) {
    if verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}
