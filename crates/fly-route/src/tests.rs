//! Unit tests for fly-route.
//!
//! Fixture networks are tiny and hand-built so every expected path can be
//! worked out on paper.

#[cfg(test)]
mod helpers {
    use fly_core::{HubId, Zone};
    use fly_network::{Hub, NetworkBuilder, NetworkModel};

    /// S —(1)— A —(1)— E with hub capacities 2 / 1 / 2.
    pub fn corridor() -> (NetworkModel, [HubId; 3]) {
        let mut b = NetworkBuilder::new(2);
        let s = b.add_hub(Hub::new("S", Zone::Normal, 2).as_start());
        let a = b.add_hub(Hub::new("A", Zone::Normal, 1));
        let e = b.add_hub(Hub::new("E", Zone::Normal, 2).as_end());
        b.add_link(s, a, 1);
        b.add_link(a, e, 1);
        (b.build().unwrap(), [s, a, e])
    }

    /// Two equal-length routes S→A→E and S→P→E; P is a priority zone.
    /// The S–A link is declared first, so hop order alone would pick A.
    pub fn priority_diamond() -> (NetworkModel, [HubId; 4]) {
        let mut b = NetworkBuilder::new(1);
        let s = b.add_hub(Hub::new("S", Zone::Normal, 1).as_start());
        let a = b.add_hub(Hub::new("A", Zone::Normal, 1));
        let p = b.add_hub(Hub::new("P", Zone::Priority, 1));
        let e = b.add_hub(Hub::new("E", Zone::Normal, 1).as_end());
        b.add_link(s, a, 1);
        b.add_link(s, p, 1);
        b.add_link(a, e, 1);
        b.add_link(p, e, 1);
        (b.build().unwrap(), [s, a, p, e])
    }

    /// S —(1)— R(restricted) —(1)— E.
    pub fn restricted_corridor() -> (NetworkModel, [HubId; 3]) {
        let mut b = NetworkBuilder::new(1);
        let s = b.add_hub(Hub::new("S", Zone::Normal, 1).as_start());
        let r = b.add_hub(Hub::new("R", Zone::Restricted, 1));
        let e = b.add_hub(Hub::new("E", Zone::Normal, 1).as_end());
        b.add_link(s, r, 1);
        b.add_link(r, e, 1);
        (b.build().unwrap(), [s, r, e])
    }

    /// The only route runs through a blocked hub.
    pub fn blocked_corridor() -> NetworkModel {
        let mut b = NetworkBuilder::new(1);
        let s = b.add_hub(Hub::new("S", Zone::Normal, 1).as_start());
        let x = b.add_hub(Hub::new("X", Zone::Blocked, 9));
        let e = b.add_hub(Hub::new("E", Zone::Normal, 1).as_end());
        b.add_link(s, x, 1);
        b.add_link(x, e, 1);
        b.build().unwrap()
    }
}

// ── Path type ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use fly_core::{DroneId, Site, Turn};
    use fly_occupancy::OccupancyLedger;

    use crate::FlightPath;

    #[test]
    fn length_delay_and_lookup() {
        let (_net, [s, a, e]) = super::helpers::corridor();
        let path = FlightPath::new(vec![
            Site::Hub(s),
            Site::Hub(s),
            Site::Hub(a),
            Site::Hub(e),
        ]);
        assert_eq!(path.len(), 4);
        assert_eq!(path.delay(), 1);
        assert_eq!(path.site_at(Turn(2)), Some(Site::Hub(a)));
        assert_eq!(path.site_at(Turn(4)), None);
        // Past the end the drone is absorbed at its final hub.
        assert_eq!(path.position_at(Turn(9)), Site::Hub(e));
    }

    #[test]
    fn booking_shape_hub_to_hub() {
        let (net, [s, a, e]) = super::helpers::corridor();
        let mut ledger = OccupancyLedger::new(&net);
        let d = DroneId(0);
        let link_sa = net.link_between(s, a).unwrap();
        let link_ae = net.link_between(a, e).unwrap();

        let path = FlightPath::new(vec![Site::Hub(s), Site::Hub(a), Site::Hub(e)]);
        path.book(&net, &mut ledger, d);

        // Turn 0 belongs to the fleet's initial placement, not the path.
        assert!(ledger.occupants(Site::Hub(s), Turn(0)).is_empty());
        assert_eq!(ledger.occupants(Site::Hub(a), Turn(1)), &[d]);
        assert_eq!(ledger.occupants(Site::Link(link_sa), Turn(1)), &[d]);
        assert_eq!(ledger.occupants(Site::Hub(e), Turn(2)), &[d]);
        assert_eq!(ledger.occupants(Site::Link(link_ae), Turn(2)), &[d]);
    }

    #[test]
    fn booking_shape_waiting_turns() {
        let (net, [s, a, e]) = super::helpers::corridor();
        let mut ledger = OccupancyLedger::new(&net);
        let d = DroneId(1);

        let path = FlightPath::new(vec![
            Site::Hub(s),
            Site::Hub(s),
            Site::Hub(a),
            Site::Hub(e),
        ]);
        path.book(&net, &mut ledger, d);

        // The waiting turn books the start hub again, with no link transit.
        assert_eq!(ledger.occupants(Site::Hub(s), Turn(1)), &[d]);
        let link_sa = net.link_between(s, a).unwrap();
        assert!(ledger.occupants(Site::Link(link_sa), Turn(1)).is_empty());
        assert_eq!(ledger.occupants(Site::Hub(a), Turn(2)), &[d]);
    }
}

// ── Search behavior ───────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use fly_core::{DroneId, Site, Turn};
    use fly_occupancy::OccupancyLedger;

    use crate::{BfsPlanner, Planner, RouteError};

    #[test]
    fn shortest_path_on_empty_ledger() {
        let (net, [s, a, e]) = super::helpers::corridor();
        let ledger = OccupancyLedger::new(&net);
        let path = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        assert_eq!(
            path.steps(),
            &[Site::Hub(s), Site::Hub(a), Site::Hub(e)]
        );
        assert_eq!(path.delay(), 0);
    }

    #[test]
    fn waits_for_a_full_corridor() {
        let (net, [s, a, e]) = super::helpers::corridor();
        let mut ledger = OccupancyLedger::new(&net);

        // An earlier drone holds A and the S–A link at turn 1.
        let first = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        first.book(&net, &mut ledger, DroneId(0));

        let second = BfsPlanner.plan(&net, &ledger, DroneId(1)).unwrap();
        assert_eq!(
            second.steps(),
            &[Site::Hub(s), Site::Hub(s), Site::Hub(a), Site::Hub(e)]
        );
        assert_eq!(second.delay(), 1);
    }

    #[test]
    fn blocked_hub_is_never_crossed() {
        let net = super::helpers::blocked_corridor();
        let ledger = OccupancyLedger::new(&net);
        let err = BfsPlanner.plan(&net, &ledger, DroneId(3)).err().unwrap();
        let RouteError::NoRoute { drone, max_delay } = err;
        assert_eq!(drone, DroneId(3));
        assert_eq!(max_delay, crate::MAX_START_DELAY);
    }

    #[test]
    fn priority_zone_wins_the_tie() {
        let (net, [s, _a, p, e]) = super::helpers::priority_diamond();
        let ledger = OccupancyLedger::new(&net);
        let path = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        assert_eq!(
            path.steps(),
            &[Site::Hub(s), Site::Hub(p), Site::Hub(e)]
        );
    }

    #[test]
    fn restricted_entry_costs_one_extra_hop() {
        let (net, [s, r, e]) = super::helpers::restricted_corridor();
        let ledger = OccupancyLedger::new(&net);
        let gate = net.link_between(s, r).unwrap();

        let path = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        assert_eq!(
            path.steps(),
            &[Site::Hub(s), Site::Link(gate), Site::Hub(r), Site::Hub(e)]
        );
        // One more turn than the equivalent normal-zone corridor.
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn gate_booking_shape() {
        let (net, [s, r, e]) = super::helpers::restricted_corridor();
        let mut ledger = OccupancyLedger::new(&net);
        let d = DroneId(0);
        let gate = net.link_between(s, r).unwrap();
        let link_re = net.link_between(r, e).unwrap();

        let path = BfsPlanner.plan(&net, &ledger, d).unwrap();
        path.book(&net, &mut ledger, d);

        // Gate hop: the link is occupied one full turn before the hub.
        assert_eq!(ledger.occupants(Site::Link(gate), Turn(1)), &[d]);
        assert_eq!(ledger.occupants(Site::Hub(r), Turn(2)), &[d]);
        assert_eq!(ledger.occupants(Site::Hub(e), Turn(3)), &[d]);
        assert_eq!(ledger.occupants(Site::Link(link_re), Turn(3)), &[d]);
    }

    #[test]
    fn gate_probes_both_endpoints_origin_full() {
        let (net, [s, r, e]) = super::helpers::restricted_corridor();
        let mut ledger = OccupancyLedger::new(&net);
        let gate = net.link_between(s, r).unwrap();

        // Another drone fills S at turn 2, when the gate expands and probes
        // both of its endpoints.  The origin-side contact is non-minimal and
        // discarded, so the congestion must not disturb the plan.
        ledger.commit(Site::Hub(s), Turn(2), DroneId(7));

        let path = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        assert_eq!(
            path.steps(),
            &[Site::Hub(s), Site::Link(gate), Site::Hub(r), Site::Hub(e)]
        );
        assert_eq!(path.delay(), 0);
    }

    #[test]
    fn gate_judges_the_restricted_hub_at_its_expansion_turn() {
        let (net, [s, r, e]) = super::helpers::restricted_corridor();
        let mut ledger = OccupancyLedger::new(&net);
        let gate = net.link_between(s, r).unwrap();

        // R is full at turn 2 — exactly when a delay-0 gate would expand and
        // probe it.  The far-endpoint probe fails, the pass drains, and the
        // drone retries with one waiting turn.
        ledger.commit(Site::Hub(r), Turn(2), DroneId(7));

        let path = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        assert_eq!(
            path.steps(),
            &[
                Site::Hub(s),
                Site::Hub(s),
                Site::Link(gate),
                Site::Hub(r),
                Site::Hub(e),
            ]
        );
        assert_eq!(path.delay(), 1);
    }

    #[test]
    fn plans_are_deterministic() {
        let (net, _) = super::helpers::priority_diamond();
        let ledger = OccupancyLedger::new(&net);
        let one = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        let two = BfsPlanner.plan(&net, &ledger, DroneId(0)).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn capacity_respected_across_sequential_bookings() {
        let (net, [_, a, _]) = super::helpers::corridor();
        let mut ledger = OccupancyLedger::new(&net);

        for i in 0..2u32 {
            let d = DroneId(i);
            let path = BfsPlanner.plan(&net, &ledger, d).unwrap();
            path.book(&net, &mut ledger, d);
        }

        // A has capacity 1: never more than one occupant at any turn.
        for t in 0..6 {
            assert!(
                ledger.occupants(Site::Hub(a), Turn(t)).len() <= 1,
                "hub A over-occupied at T{t}"
            );
        }
    }
}
