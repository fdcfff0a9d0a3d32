//! Integration tests for fly-fleet.

#[cfg(test)]
mod helpers {
    use fly_core::{DroneId, HubId, Turn, Zone};
    use fly_network::{Hub, NetworkBuilder, NetworkModel};
    use fly_route::FlightPath;

    use crate::FleetObserver;

    /// S(cap 2) —(1)— A(cap 1) —(1)— E(cap 2), fleet of 2.
    ///
    /// The corridor only admits one drone at a time, so the second drone
    /// must wait one turn at S.
    pub fn corridor_fleet2() -> (NetworkModel, [HubId; 3]) {
        let mut b = NetworkBuilder::new(2);
        let s = b.add_hub(Hub::new("S", Zone::Normal, 2).as_start());
        let a = b.add_hub(Hub::new("A", Zone::Normal, 1));
        let e = b.add_hub(Hub::new("E", Zone::Normal, 2).as_end());
        b.add_link(s, a, 1);
        b.add_link(a, e, 1);
        (b.build().unwrap(), [s, a, e])
    }

    /// Records every observer callback for assertion.
    #[derive(Default)]
    pub struct Recorder {
        pub routed:  Vec<(DroneId, u32)>,
        pub changes: Vec<(Turn, Vec<DroneId>)>,
        pub completed_with: Option<u32>,
    }

    impl FleetObserver for Recorder {
        fn on_drone_routed(&mut self, drone: DroneId, path: &FlightPath) {
            self.routed.push((drone, path.len()));
        }
        fn on_turn_changes(&mut self, turn: Turn, moved: &[DroneId]) {
            self.changes.push((turn, moved.to_vec()));
        }
        fn on_complete(&mut self, turn_count: u32) {
            self.completed_with = Some(turn_count);
        }
    }
}

#[cfg(test)]
mod runs {
    use fly_core::{DroneId, DroneSeq, Site, Turn, Zone};
    use fly_network::{Hub, NetworkBuilder};
    use fly_route::BfsPlanner;

    use crate::{FleetError, FleetScheduler, NoopObserver};

    #[test]
    fn corridor_schedule_is_exact() {
        let (net, [s, a, e]) = super::helpers::corridor_fleet2();
        let scheduler = FleetScheduler::new(net, BfsPlanner);
        let outcome = scheduler
            .run(&mut DroneSeq::new(), &mut NoopObserver)
            .unwrap();

        assert_eq!(outcome.turn_count, 4);
        assert_eq!(outcome.drones, vec![DroneId(0), DroneId(1)]);
        assert_eq!(
            outcome.paths[0].steps(),
            &[Site::Hub(s), Site::Hub(a), Site::Hub(e)]
        );
        assert_eq!(
            outcome.paths[1].steps(),
            &[Site::Hub(s), Site::Hub(s), Site::Hub(a), Site::Hub(e)]
        );

        // The corridor hub is handed over turn by turn, never shared.
        assert_eq!(outcome.ledger.occupants(Site::Hub(a), Turn(1)), &[DroneId(0)]);
        assert_eq!(outcome.ledger.occupants(Site::Hub(a), Turn(2)), &[DroneId(1)]);
    }

    #[test]
    fn initial_placement_is_exactly_once() {
        let (net, [s, ..]) = super::helpers::corridor_fleet2();
        let scheduler = FleetScheduler::new(net, BfsPlanner);
        let outcome = scheduler
            .run(&mut DroneSeq::new(), &mut NoopObserver)
            .unwrap();

        let at_start = outcome.ledger.occupants(Site::Hub(s), Turn::ZERO);
        assert_eq!(at_start, &[DroneId(0), DroneId(1)]);
    }

    #[test]
    fn capacity_never_exceeded_anywhere() {
        let (net, _) = super::helpers::corridor_fleet2();
        let scheduler = FleetScheduler::new(net, BfsPlanner);
        let outcome = scheduler
            .run(&mut DroneSeq::new(), &mut NoopObserver)
            .unwrap();

        let net = scheduler.network();
        for t in 0..outcome.turn_count {
            for h in 0..net.hub_count() {
                let site = Site::Hub(fly_core::HubId(h as u32));
                let count = outcome.ledger.occupants(site, Turn(t)).len() as u32;
                assert!(
                    count <= net.capacity(site),
                    "{} over-occupied at T{t}",
                    net.site_name(site)
                );
            }
            for l in 0..net.link_count() {
                let site = Site::Link(fly_core::LinkId(l as u32));
                let count = outcome.ledger.occupants(site, Turn(t)).len() as u32;
                assert!(
                    count <= net.capacity(site),
                    "{} over-occupied at T{t}",
                    net.site_name(site)
                );
            }
        }
    }

    #[test]
    fn end_hub_absorption_is_sticky() {
        let (net, [_, _, e]) = super::helpers::corridor_fleet2();
        let scheduler = FleetScheduler::new(net, BfsPlanner);
        let outcome = scheduler
            .run(&mut DroneSeq::new(), &mut NoopObserver)
            .unwrap();

        // Drone 0 lands at T2 and stays; drone 1 joins at T3.
        assert_eq!(outcome.ledger.occupants(Site::Hub(e), Turn(2)), &[DroneId(0)]);
        let final_turn = outcome.ledger.occupants(Site::Hub(e), Turn(3));
        assert!(final_turn.contains(&DroneId(0)));
        assert!(final_turn.contains(&DroneId(1)));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let (net_a, _) = super::helpers::corridor_fleet2();
        let (net_b, _) = super::helpers::corridor_fleet2();
        let first = FleetScheduler::new(net_a, BfsPlanner)
            .run(&mut DroneSeq::new(), &mut NoopObserver)
            .unwrap();
        let second = FleetScheduler::new(net_b, BfsPlanner)
            .run(&mut DroneSeq::new(), &mut NoopObserver)
            .unwrap();

        assert_eq!(first.turn_count, second.turn_count);
        assert_eq!(first.paths, second.paths);
    }

    #[test]
    fn caller_owned_sequence_offsets_ids() {
        let (net, _) = super::helpers::corridor_fleet2();
        let mut seq = DroneSeq::new();
        seq.next_id();
        seq.next_id();
        seq.next_id();

        let outcome = FleetScheduler::new(net, BfsPlanner)
            .run(&mut seq, &mut NoopObserver)
            .unwrap();
        assert_eq!(outcome.drones, vec![DroneId(3), DroneId(4)]);
        assert_eq!(outcome.path_of(DroneId(4)).unwrap().delay(), 1);
        assert!(outcome.path_of(DroneId(0)).is_none());
    }

    #[test]
    fn unroutable_network_aborts_the_run() {
        let mut b = NetworkBuilder::new(1);
        let s = b.add_hub(Hub::new("S", Zone::Normal, 1).as_start());
        let x = b.add_hub(Hub::new("X", Zone::Blocked, 9));
        let e = b.add_hub(Hub::new("E", Zone::Normal, 1).as_end());
        b.add_link(s, x, 1);
        b.add_link(x, e, 1);
        let net = b.build().unwrap();

        let result = FleetScheduler::new(net, BfsPlanner)
            .run(&mut DroneSeq::new(), &mut NoopObserver);
        assert!(matches!(result, Err(FleetError::Route(_))));
    }

    #[test]
    fn empty_fleet_is_a_valid_run() {
        let mut b = NetworkBuilder::new(0);
        let s = b.add_hub(Hub::new("S", Zone::Normal, 1).as_start());
        let e = b.add_hub(Hub::new("E", Zone::Normal, 1).as_end());
        b.add_link(s, e, 1);
        let net = b.build().unwrap();

        let outcome = FleetScheduler::new(net, BfsPlanner)
            .run(&mut DroneSeq::new(), &mut NoopObserver)
            .unwrap();
        assert_eq!(outcome.turn_count, 0);
        assert!(outcome.paths.is_empty());
    }
}

#[cfg(test)]
mod observers {
    use fly_core::{DroneId, DroneSeq, Turn};
    use fly_route::BfsPlanner;

    use crate::FleetScheduler;
    use super::helpers::Recorder;

    #[test]
    fn change_log_tracks_movement_only() {
        let (net, _) = super::helpers::corridor_fleet2();
        let mut recorder = Recorder::default();
        FleetScheduler::new(net, BfsPlanner)
            .run(&mut DroneSeq::new(), &mut recorder)
            .unwrap();

        assert_eq!(recorder.routed, vec![(DroneId(0), 3), (DroneId(1), 4)]);
        assert_eq!(
            recorder.changes,
            vec![
                // T1: drone 0 moves to A; drone 1 waits at S.
                (Turn(1), vec![DroneId(0)]),
                // T2: drone 0 lands at E; drone 1 moves to A.
                (Turn(2), vec![DroneId(0), DroneId(1)]),
                // T3: drone 0 is absorbed (no change); drone 1 lands at E.
                (Turn(3), vec![DroneId(1)]),
            ]
        );
        assert_eq!(recorder.completed_with, Some(4));
    }
}
