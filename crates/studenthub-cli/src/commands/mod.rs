pub mod config;
pub mod show;
pub mod watch;

use clap::Args;
use studenthub_core::{Config, NoTrace, SnapshotSource, TraceSink, TracingSink};

/// Options shared by the dashboard views.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Snapshot file path or URL (defaults to config `source.snapshot`)
    #[arg(long, value_name = "PATH|URL")]
    pub source: Option<String>,
    /// Show only the next assignment and next class
    #[arg(long)]
    pub focus: bool,
    /// Emit evaluation trace events to the log
    #[arg(long)]
    pub trace: bool,
}

/// View settings after applying CLI overrides to the config.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub source: SnapshotSource,
    pub focus: bool,
    pub trace: bool,
    pub list_all_when_empty: bool,
}

impl ViewOptions {
    pub fn resolve(args: &ViewArgs, config: &Config) -> Self {
        let source = match &args.source {
            Some(s) => match s.parse() {
                Ok(source) => source,
                Err(never) => match never {},
            },
            None => config.snapshot_source(),
        };
        Self {
            source,
            focus: args.focus || config.display.focus_mode,
            trace: args.trace || config.trace.enabled,
            list_all_when_empty: config.display.list_all_when_empty,
        }
    }

    pub fn sink(&self) -> &'static dyn TraceSink {
        if self.trace {
            &TracingSink
        } else {
            &NoTrace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.source.snapshot = "from-config.json".to_string();

        let opts = ViewOptions::resolve(&ViewArgs::default(), &config);
        assert_eq!(opts.source, "from-config.json".parse::<SnapshotSource>().unwrap());
        assert!(!opts.focus);
        assert!(!opts.trace);

        let args = ViewArgs {
            source: Some("https://example.edu/data.json".to_string()),
            focus: true,
            trace: true,
        };
        let opts = ViewOptions::resolve(&args, &config);
        assert!(matches!(opts.source, SnapshotSource::Url(_)));
        assert!(opts.focus);
        assert!(opts.trace);
    }

    #[test]
    fn config_can_enable_focus_and_trace() {
        let mut config = Config::default();
        config.display.focus_mode = true;
        config.trace.enabled = true;
        let opts = ViewOptions::resolve(&ViewArgs::default(), &config);
        assert!(opts.focus);
        assert!(opts.trace);
    }
}
