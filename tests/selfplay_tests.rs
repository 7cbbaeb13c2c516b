//! Self-play regression: the heuristic must never lose to random play.

use tictactoe_engine::{SelfPlay, SelfPlayConfig};

#[test]
fn heuristic_never_loses_to_random_play() {
    let config = SelfPlayConfig::new().with_rounds(1000).with_seed(42);
    let report = SelfPlay::new(config).run();

    assert_eq!(report.rounds, 1000);
    assert_eq!(report.x_wins + report.o_wins + report.draws, 1000);
    assert!(
        report.strategy_unbeaten(),
        "heuristic lost {} of {} rounds",
        report.x_wins,
        report.rounds
    );
    // Random play should lose most rounds outright.
    assert!(report.o_wins > report.draws);
}

#[test]
fn reports_are_reproducible_per_seed() {
    let run = |seed| SelfPlay::new(SelfPlayConfig::new().with_rounds(200).with_seed(seed)).run();

    assert_eq!(run(7), run(7));
}
