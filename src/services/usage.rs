use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Best-effort "screen viewed" reporting. Sinks must never fail the form:
/// every error ends here.
pub trait UsageSink {
    fn screen_viewed(&self, screen: &str);
}

pub struct NullSink;

impl UsageSink for NullSink {
    fn screen_viewed(&self, _screen: &str) {}
}

/// Appends one line per viewed screen to a log file in the config dir.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl UsageSink for FileSink {
    fn screen_viewed(&self, screen: &str) {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| writeln!(f, "{secs} viewed {screen}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_appends_one_line_per_view() {
        let path = std::env::temp_dir().join(format!("api-prompt-usage-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let sink = FileSink::new(path.clone());
        sink.screen_viewed("api_prompt");
        sink.screen_viewed("api_prompt");
        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(body.lines().count(), 2);
        assert!(body.lines().all(|l| l.ends_with("viewed api_prompt")));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn file_sink_swallows_io_errors() {
        let sink = FileSink::new(PathBuf::from("/definitely/not/a/dir/usage.log"));
        // Must not panic or surface the failure.
        sink.screen_viewed("api_prompt");
    }

    #[test]
    fn null_sink_is_a_noop() {
        NullSink.screen_viewed("api_prompt");
    }
}
