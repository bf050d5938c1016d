mod common;

use std::time::Duration;
use swarmtrack::queues::enums::flush_category::FlushCategory;
use swarmtrack::queues::impls::flush_worker::flush_worker;
use swarmtrack::queues::structs::user_row::UserRow;

#[tokio::test]
async fn test_flush_worker_drains_snapshot_and_exits_on_terminate() {
    let tracker = common::create_test_tracker().await;
    for id in 1..=25u32 {
        tracker.queue_user_row(UserRow {
            id,
            uploaded_delta: 1,
            downloaded_delta: 0,
            raw_up_delta: 1,
            raw_down_delta: 0,
        });
    }
    assert_eq!(tracker.queues.users.len(), 25);

    let (terminate_tx, terminate_rx) = tokio::sync::watch::channel(false);
    let handle = tokio::spawn(flush_worker(tracker.clone(), FlushCategory::Users, terminate_rx));

    // without a database connection the executor acknowledges the batch,
    // so the queue must drain on the first cycle
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(tracker.queues.users.is_empty());
    assert_eq!(tracker.get_stats().flushed_user_rows, 25);

    terminate_tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle).await
        .expect("worker must exit once terminated with an empty queue")
        .unwrap();
}

#[tokio::test]
async fn test_producers_never_block_on_full_queue() {
    let tracker = common::create_test_tracker().await;
    let capacity = tracker.queues.snatches.capacity;
    // push past the bound; the overflow rides on detached blocking sends
    for id in 0..(capacity as u32 + 10) {
        tracker.queue_snatch_row(swarmtrack::queues::structs::snatch_row::SnatchRow {
            user_id: id,
            torrent_id: 1,
            snatched_time: 1700000000,
        });
    }
    assert_eq!(tracker.queues.snatches.len(), capacity);

    let (terminate_tx, terminate_rx) = tokio::sync::watch::channel(false);
    let handle = tokio::spawn(flush_worker(tracker.clone(), FlushCategory::Snatches, terminate_rx));
    tokio::time::sleep(Duration::from_millis(500)).await;
    terminate_tx.send(true).unwrap();
    tokio::time::timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
    assert!(tracker.queues.snatches.is_empty(), "every overflow row must eventually land");
    assert_eq!(tracker.get_stats().flushed_snatch_rows, capacity as i64 + 10);
}
