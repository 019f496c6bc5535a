use autosnake_game::{Config, Simulation};

/// Two simulations built from the same configuration must emit identical
/// event streams and end in identical states, tick for tick.
#[test]
fn equal_configurations_replay_identically() {
    let config = Config::new(14, 10, 0x5eed);
    let mut first = Simulation::new(config);
    let mut second = Simulation::new(config);

    for tick in 0..100 {
        let first_events = first.tick().expect("tick completes");
        let second_events = second.tick().expect("tick completes");
        assert_eq!(first_events, second_events, "divergence at tick {tick}");

        assert_eq!(first.agent(), second.agent(), "divergence at tick {tick}");
        assert_eq!(first.target(), second.target(), "divergence at tick {tick}");
        assert_eq!(first.is_over(), second.is_over(), "divergence at tick {tick}");

        if first.is_over() {
            break;
        }
    }
}
