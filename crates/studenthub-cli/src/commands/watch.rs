use std::future::Future;
use std::time::Duration;

use chrono::Local;
use clap::Args;
use studenthub_core::{Config, RefreshTicker, MAX_INTERVAL_SECS};

use super::show::{load_or_exit, render};
use super::{ViewArgs, ViewOptions};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

type BoxError = Box<dyn std::error::Error>;

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub view: ViewArgs,
    /// Seconds between refreshes, at most one day (defaults to config `refresh.interval_secs`)
    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL_SECS)
    )]
    pub interval: Option<u64>,
}

pub fn run(args: WatchArgs) -> Result<(), BoxError> {
    let config = Config::load_or_default();
    let opts = ViewOptions::resolve(&args.view, &config);
    let period = args
        .interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.refresh_interval());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        eprintln!("Loading your student hub...");
        let snapshot = load_or_exit(&opts).await;

        let mut ticker = RefreshTicker::start(period, Local::now)?;
        print!("{CLEAR_SCREEN}{}", render(&snapshot, &ticker.current(), &opts, false)?);

        refresh_until(&mut ticker, tokio::signal::ctrl_c(), |now| {
            print!("{CLEAR_SCREEN}{}", render(&snapshot, &now, &opts, false)?);
            Ok(())
        })
        .await?;
        tracing::debug!("watch stopped");
        Ok::<(), BoxError>(())
    })
}

/// Feed every refresh to `on_refresh` until `shutdown` resolves.
///
/// Shutdown cancels the ticker and returns `Ok`. A ticker that stops on its
/// own is an error.
async fn refresh_until<T, S, F>(
    ticker: &mut RefreshTicker<T>,
    shutdown: S,
    mut on_refresh: F,
) -> Result<(), BoxError>
where
    T: Clone + Send + Sync + 'static,
    S: Future,
    F: FnMut(T) -> Result<(), BoxError>,
{
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            next = ticker.next() => match next {
                Some(now) => on_refresh(now)?,
                None if ticker.is_cancelled() => return Ok(()),
                None => return Err("refresh ticker stopped unexpectedly".into()),
            },
            _ = &mut shutdown => {
                ticker.cancel();
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        watch: WatchArgs,
    }

    #[test]
    fn interval_flag_is_capped_at_one_day() {
        assert!(Harness::try_parse_from(["t", "--interval", "0"]).is_err());
        assert!(Harness::try_parse_from(["t", "--interval", "86401"]).is_err());
        assert!(Harness::try_parse_from(["t", "--interval", "18446744073709551615"]).is_err());
        let ok = Harness::try_parse_from(["t", "--interval", "86400"]).unwrap();
        assert_eq!(ok.watch.interval, Some(86_400));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_after_refreshes() {
        let mut ticker = RefreshTicker::start(Duration::from_secs(60), || 1u32).unwrap();
        let mut seen = 0;
        let shutdown = tokio::time::sleep(Duration::from_secs(150));

        refresh_until(&mut ticker, shutdown, |_| {
            seen += 1;
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(seen, 2);
        assert!(ticker.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn dead_ticker_is_an_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let clock = move || {
            if calls.fetch_add(1, Ordering::SeqCst) == 1 {
                panic!("clock failed");
            }
            0u32
        };
        let mut ticker = RefreshTicker::start(Duration::from_secs(1), clock).unwrap();

        let result = refresh_until(&mut ticker, std::future::pending::<()>(), |_| Ok(())).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("stopped unexpectedly"));
    }

    #[tokio::test(start_paused = true)]
    async fn render_error_stops_the_loop() {
        let mut ticker = RefreshTicker::start(Duration::from_secs(1), || 0u32).unwrap();
        let result =
            refresh_until(&mut ticker, std::future::pending::<()>(), |_| Err("boom".into())).await;
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }
}
