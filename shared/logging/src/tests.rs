use std::sync::Mutex;

use once_cell::sync::OnceCell;
use slog::Drain;
use slog_scope::GlobalLoggerGuard;

static LOGGER: OnceCell<GlobalLoggerGuard> = OnceCell::new();

/// Installs a synchronous stdout logger for the remainder of the test binary. Subsequent calls are
/// no-ops
pub fn for_tests() {
    LOGGER.get_or_init(|| {
        let drain = slog_term::PlainSyncDecorator::new(slog_term::TestStdoutWriter);
        let drain = slog_term::CompactFormat::new(drain).build();
        let drain = Mutex::new(drain).fuse();
        let logger = slog::Logger::root(drain, slog::o!());
        slog_scope::set_global_logger(logger)
    });
}
