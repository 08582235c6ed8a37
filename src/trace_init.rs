use std::path::Path;
use std::sync::Once;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "ku_engine=info,ku_core=info";

/// Install the global subscriber once per process.
///
/// Logs go to stderr unless `log_dir` is given, in which case they are
/// appended to `haikud.log` there. `RUST_LOG` overrides the default filter.
pub fn init_tracing(json: bool, log_dir: Option<&Path>) {
    INIT.call_once(|| {
        let writer = match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "haikud.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                std::mem::forget(guard); // server runs until the process exits
                BoxMakeWriter::new(non_blocking)
            }
            None => BoxMakeWriter::new(std::io::stderr),
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let builder = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_target(true)
            .with_env_filter(filter);
        let result = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if let Err(e) = result {
            eprintln!("tracing already initialized: {e}");
        }
    });
}
