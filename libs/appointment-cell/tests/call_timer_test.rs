use std::time::Duration;

use appointment_cell::services::call_timer::{format_call_duration, CallTimer};

#[tokio::test(start_paused = true)]
async fn test_timer_counts_whole_seconds() {
    let mut timer = CallTimer::new();
    timer.start();
    assert!(timer.is_running());
    assert_eq!(timer.display(), "00:00");

    tokio::time::sleep(Duration::from_millis(3500)).await;

    assert_eq!(timer.elapsed_seconds(), 3);
    assert_eq!(timer.display(), "00:03");
}

#[tokio::test(start_paused = true)]
async fn test_stop_freezes_value() {
    let mut timer = CallTimer::new();
    timer.start();
    tokio::time::sleep(Duration::from_millis(2500)).await;

    timer.stop();
    assert!(!timer.is_running());
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(timer.elapsed_seconds(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_restart_counts_from_zero() {
    let mut timer = CallTimer::new();
    timer.start();
    tokio::time::sleep(Duration::from_millis(5500)).await;
    timer.stop();

    timer.start();
    assert_eq!(timer.elapsed_seconds(), 0);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(timer.elapsed_seconds(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_start_while_running_keeps_counting() {
    let mut timer = CallTimer::new();
    timer.start();
    tokio::time::sleep(Duration::from_millis(2500)).await;

    timer.start();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(timer.elapsed_seconds(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_display_rolls_over_to_hours() {
    let mut timer = CallTimer::new();
    timer.start();
    tokio::time::sleep(Duration::from_millis(3_661_500)).await;

    assert_eq!(timer.display(), "1:01:01");
    assert_eq!(format_call_duration(59 * 60 + 59), "59:59");
}
