use chrono::{DateTime, Local};
use clap::Args;
use studenthub_core::{evaluate, parse_instant, trace, Config, Moment, Snapshot};

use super::{ViewArgs, ViewOptions};
use crate::render::{DashboardText, FocusText, LoadErrorText};

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub view: ViewArgs,
    /// Evaluate at this time instead of now (YYYY-MM-DDTHH:MM local, or RFC 3339)
    #[arg(long, value_name = "TIME")]
    pub at: Option<String>,
    /// Print the evaluated windows as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load the snapshot for a view, printing the error card and exiting on failure.
pub(crate) async fn load_or_exit(opts: &ViewOptions) -> Snapshot {
    match opts.source.load().await {
        Ok(snapshot) => {
            trace::snapshot_loaded(opts.sink(), &snapshot);
            snapshot
        }
        Err(e) => {
            tracing::debug!(source = %opts.source, error = %e, "snapshot load failed");
            eprint!("{}", LoadErrorText { error: &e });
            std::process::exit(1);
        }
    }
}

/// Render one evaluation to a string.
pub(crate) fn render(
    snapshot: &Snapshot,
    now: &DateTime<Local>,
    opts: &ViewOptions,
    json: bool,
) -> Result<String, serde_json::Error> {
    let dashboard = evaluate(snapshot, Moment::from_datetime(now), opts.sink());
    let out = match (json, opts.focus) {
        (true, true) => serde_json::to_string_pretty(&dashboard.focus())? + "\n",
        (true, false) => serde_json::to_string_pretty(&dashboard)? + "\n",
        (false, true) => FocusText {
            view: dashboard.focus(),
        }
        .to_string(),
        (false, false) => DashboardText {
            dashboard: &dashboard,
            snapshot,
            list_all_when_empty: opts.list_all_when_empty,
        }
        .to_string(),
    };
    Ok(out)
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let opts = ViewOptions::resolve(&args.view, &config);
    let now = match args.at.as_deref() {
        Some(at) => parse_instant(at)?,
        None => Local::now(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let snapshot = runtime.block_on(load_or_exit(&opts));

    print!("{}", render(&snapshot, &now, &opts, args.json)?);
    Ok(())
}
