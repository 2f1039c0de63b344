use topfreq::tracker::TopNTracker;

fn main() {
    let mut tracker: TopNTracker<&str> = TopNTracker::default();

    tracker.record_hit("192.168.0.1");
    tracker.record_hit("10.0.0.1");
    tracker.record_hit("8.8.8.8");
    tracker.record_hit("8.8.8.8");
    tracker.record_hit("8.8.8.8");
    tracker.record_hit("192.168.0.1");

    for (key, count) in tracker.top_n() {
        println!("{} ({})", key, count);
    }
}

// Expected output:
// 8.8.8.8 (3)
// 192.168.0.1 (2)
// 10.0.0.1 (1)
