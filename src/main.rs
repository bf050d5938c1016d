use clap::Parser;
use log::{error, info};
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;

use swarmtrack::config::structs::configuration::Configuration;
use swarmtrack::http::http::http_service;
use swarmtrack::logging::setup_logging;
use swarmtrack::queues::enums::flush_category::FlushCategory;
use swarmtrack::queues::impls::event_recorder::event_recorder;
use swarmtrack::queues::impls::flush_worker::flush_worker;
use swarmtrack::structs::Cli;
use swarmtrack::tracker::structs::torrent_tracker::TorrentTracker;

#[tokio::main]
async fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);
    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let tracker = Arc::new(TorrentTracker::new(config.clone(), true).await);

    // Warm start from the binary snapshots, then let the database correct it.
    if !args.skip_cache_load {
        tracker.load_cache();
    }
    info!("[BOOT] Backfilling caches from the database...");
    tracker.reload_from_database().await;

    let (terminate_tx, terminate_rx) = tokio::sync::watch::channel(false);

    let mut drain_handles = Vec::new();
    for category in FlushCategory::ALL {
        drain_handles.push(tokio::spawn(flush_worker(tracker.clone(), category, terminate_rx.clone())));
    }
    if config.record_announces {
        drain_handles.push(tokio::spawn(event_recorder(tracker.clone(), terminate_rx.clone())));
    }

    let tracker_clone = tracker.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(tracker_clone.config.intervals.database_reload)).await;
            tracker_clone.reload_from_database().await;
        }
    });

    let tracker_clone = tracker.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(tracker_clone.config.intervals.database_serialize)).await;
            if let Err(e) = tracker_clone.save_cache() {
                error!("[CACHE] Snapshot failed: {e}");
            }
        }
    });

    let tracker_clone = tracker.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(tracker_clone.config.intervals.purge_inactive_peers)).await;
            tracker_clone.purge_cycle().await;
        }
    });

    let address: SocketAddr = match config.http.addr.parse() {
        Ok(address) => address,
        Err(e) => {
            error!("[BOOT] Invalid http.addr {}: {e}", config.http.addr);
            exit(1);
        }
    };
    let (http_handle, http_server) = http_service(address, tracker.clone()).await;
    let http_join = tokio::spawn(http_server);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown request received, shutting down...");
            http_handle.stop(true).await;
            let _ = terminate_tx.send(true);
            for handle in drain_handles {
                let _ = handle.await;
            }
            info!("[SHUTDOWN] Queues drained, writing final cache snapshot...");
            if let Err(e) = tracker.save_cache() {
                error!("[SHUTDOWN] Cache snapshot failed: {e}");
            }
            info!("Server shutting down completed");
            Ok(())
        }
        result = http_join => {
            error!("[HTTP] Server exited unexpectedly: {result:?}");
            Ok(())
        }
    }
}
