use estatelist::ui::notifications::{NotificationQueue, Severity};
use std::thread::sleep;
use std::time::Duration;

const TTL: Duration = Duration::from_millis(30);

#[test]
fn test_notifications_show_in_arrival_order() {
    let mut queue = NotificationQueue::new(TTL);
    queue.success("first");
    queue.error("second");
    queue.info("third");

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.current().map(|n| n.message.as_str()), Some("first"));
    assert_eq!(queue.current().map(|n| n.severity), Some(Severity::Success));

    sleep(TTL + Duration::from_millis(5));
    queue.tick();
    assert_eq!(queue.current().map(|n| n.message.as_str()), Some("second"));
    assert_eq!(queue.current().map(|n| n.severity), Some(Severity::Error));
}

#[test]
fn test_current_survives_until_its_time_is_up() {
    let mut queue = NotificationQueue::new(TTL);
    queue.info("stay a while");

    // Ticks before the deadline leave the head alone
    queue.tick();
    queue.tick();
    assert_eq!(queue.len(), 1);

    sleep(TTL + Duration::from_millis(5));
    queue.tick();
    assert!(queue.is_empty());
    assert!(queue.current().is_none());
}

#[test]
fn test_display_clock_restarts_for_each_notification() {
    let mut queue = NotificationQueue::new(TTL);
    queue.info("first");
    sleep(TTL / 2);
    // Queued while the first is on display; its clock must not start yet
    queue.info("second");

    sleep(TTL / 2 + Duration::from_millis(5));
    queue.tick();
    assert_eq!(queue.current().map(|n| n.message.as_str()), Some("second"));

    // The second gets its full display window from now
    queue.tick();
    assert_eq!(queue.len(), 1);
    sleep(TTL + Duration::from_millis(5));
    queue.tick();
    assert!(queue.is_empty());
}

#[test]
fn test_tick_on_an_empty_queue_is_a_no_op() {
    let mut queue = NotificationQueue::new(TTL);
    queue.tick();
    assert!(queue.is_empty());

    // Queue becomes usable again after draining
    queue.error("late arrival");
    assert_eq!(queue.current().map(|n| n.severity), Some(Severity::Error));
}
