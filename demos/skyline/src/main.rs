//! skyline — smallest example for the rust_flyin fleet router.
//!
//! Routes a fleet of 4 drones across a 7-hub city network that exercises
//! every zone kind: a blocked hub the planner must route around, a priority
//! hub that wins route ties, and a restricted hub that costs a gate turn to
//! enter.  Writes the finished schedule to `output/skyline/`.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use fly_core::{DroneId, DroneSeq, Turn};
use fly_fleet::{FleetObserver, FleetScheduler};
use fly_network::NetworkSpec;
use fly_output::{export_outcome, CsvWriter};
use fly_route::{BfsPlanner, FlightPath};

// ── Network ───────────────────────────────────────────────────────────────────

// Downtown ("DT") is blocked; the mall ("ML") is priority, so ties between
// the mall route and the park route resolve toward the mall; the hospital
// ("HP") is restricted and costs one gate turn to enter.
const NETWORK_JSON: &str = r#"{
  "nb_drones": 4,
  "hubs": {
    "BASE":  { "x": 0, "y": 1, "zone": "normal",     "color": "green",  "max_drones": 4, "start_hub": true },
    "DT":    { "x": 1, "y": 1, "zone": "blocked",    "color": "black",  "max_drones": 9 },
    "ML":    { "x": 1, "y": 0, "zone": "priority",   "color": "gold",   "max_drones": 1 },
    "PK":    { "x": 1, "y": 2, "zone": "normal",     "color": "grey",   "max_drones": 1 },
    "HP":    { "x": 2, "y": 2, "zone": "restricted", "color": "white",  "max_drones": 2 },
    "PORT":  { "x": 2, "y": 1, "zone": "normal",     "color": "blue",   "max_drones": 2 },
    "TOWER": { "x": 3, "y": 1, "zone": "normal",     "color": "red",    "max_drones": 4, "end_hub": true }
  },
  "connections": [
    ["BASE", "DT",    2],
    ["BASE", "ML",    1],
    ["BASE", "PK",    1],
    ["DT",   "PORT",  2],
    ["ML",   "PORT",  1],
    ["PK",   "PORT",  1],
    ["PK",   "HP",    1],
    ["HP",   "TOWER", 1],
    ["PORT", "TOWER", 2]
  ]
}"#;

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints each routed drone and counts turn-by-turn movement.
#[derive(Default)]
struct ProgressObserver {
    moves: usize,
}

impl FleetObserver for ProgressObserver {
    fn on_drone_routed(&mut self, drone: DroneId, path: &FlightPath) {
        println!(
            "  {drone}: {} turns ({} waiting at base)",
            path.len() - 1,
            path.delay()
        );
    }

    fn on_turn_changes(&mut self, _turn: Turn, moved: &[DroneId]) {
        self.moves += moved.len();
    }

    fn on_complete(&mut self, turn_count: u32) {
        println!("Schedule spans {turn_count} turns");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== skyline — rust_flyin fleet router ===");
    println!();

    // 1. Parse and validate the network.
    let spec = NetworkSpec::from_json_reader(Cursor::new(NETWORK_JSON))?;
    let net = spec.build()?;
    println!(
        "Network: {} hubs, {} links, fleet of {}",
        net.hub_count(),
        net.link_count(),
        net.fleet_size()
    );

    // 2. Route the fleet.
    let scheduler = FleetScheduler::new(net, BfsPlanner);
    let mut observer = ProgressObserver::default();

    let t0 = Instant::now();
    let outcome = scheduler.run(&mut DroneSeq::new(), &mut observer)?;
    let elapsed = t0.elapsed();

    println!("Routed in {:.3} ms, {} site changes total", elapsed.as_secs_f64() * 1e3, observer.moves);
    println!();

    // 3. Per-drone itinerary table.
    let net = scheduler.network();
    println!("{:<10} {}", "Drone", "Itinerary");
    println!("{}", "-".repeat(48));
    for (drone, path) in outcome.drones.iter().zip(&outcome.paths) {
        let stops: Vec<String> = path.steps().iter().map(|&s| net.site_name(s)).collect();
        println!("{:<10} {}", drone.to_string(), stops.join(" > "));
    }
    println!();

    // 4. Export CSVs.
    std::fs::create_dir_all("output/skyline")?;
    let mut writer = CsvWriter::new(Path::new("output/skyline"))?;
    export_outcome(&mut writer, net, &outcome)?;
    println!("Wrote output/skyline/occupancy.csv and output/skyline/paths.csv");

    Ok(())
}
