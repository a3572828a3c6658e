//! Headless demo: runs the pool mission with a second of scripted thrust
//! and prints the resulting snapshot summary.

use std::thread;
use std::time::Duration;

use eva_app::audio::LogSink;
use eva_app::input;
use eva_app::runner::MissionRunner;
use eva_core::commands::MissionCommand;
use eva_sim::engine::MissionConfig;

fn main() {
    let mut runner = MissionRunner::spawn(
        MissionConfig::default(),
        Box::new(LogSink),
        Some(Box::new(|| println!("mission completion recorded"))),
    );

    runner
        .send(MissionCommand::Start)
        .expect("runner accepts commands");

    // Hold ArrowUp for half a second, then release and let drag settle.
    if let Some(press) = input::key_command("ArrowUp", true) {
        runner.send(press).expect("runner accepts commands");
    }
    thread::sleep(Duration::from_millis(500));
    if let Some(release) = input::key_command("ArrowUp", false) {
        runner.send(release).expect("runner accepts commands");
    }
    thread::sleep(Duration::from_millis(500));

    if let Ok(Some(snapshot)) = runner.latest_snapshot() {
        println!(
            "t={:.2}s phase={:?} zones {}/{} bubbles={}",
            snapshot.time.elapsed_secs,
            snapshot.phase,
            snapshot.completed_zones,
            snapshot.zone_total,
            snapshot.bubbles.len(),
        );
    }
    if let Ok(status) = runner.status_text() {
        println!("status: {}", status);
    }

    runner.stop();
}
