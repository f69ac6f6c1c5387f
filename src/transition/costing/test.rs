use crate::graph::RoadSegment;
use crate::transition::*;

use approx::assert_relative_eq;
use geo::point;
use std::f64::consts::PI;

fn emission(strategy: &GaussianEmission, distance: f64) -> f64 {
    let origin = point! { x: 0.0, y: 0.0 };
    strategy.log_probability(EmissionContext::new(&origin, &origin, distance))
}

fn candidate() -> Candidate {
    let edge = RoadSegment::new(point! { x: 0.0, y: 0.0 }, point! { x: 0.001, y: 0.0 });
    let location = CandidateLocation {
        layer_id: 0,
        node_id: 0,
    };

    Candidate::new(0, edge, edge.source, 0.0, location)
}

#[test]
fn emission_decreases_with_distance() {
    let strategy = GaussianEmission::default();

    let scores = [0.0, 0.5, 1.0, 4.07, 10.0, 50.0, 500.0]
        .map(|distance| emission(&strategy, distance));

    for (nearer, further) in scores.iter().zip(scores.iter().skip(1)) {
        assert!(nearer > further, "{nearer} should exceed {further}");
    }

    // Far beyond where the density itself underflows.
    assert!(emission(&strategy, 10_000.0).is_finite());
}

#[test]
fn emission_log_matches_density() {
    let strategy = GaussianEmission::new(4.07);
    let sigma: f64 = 4.07;

    let density = 1.0 / ((2.0 * PI).sqrt() * sigma) * (-0.5 * (3.0 / sigma).powi(2)).exp();
    assert_relative_eq!(emission(&strategy, 3.0), density.ln(), max_relative = 1e-12);

    let origin = point! { x: 0.0, y: 0.0 };
    let calculated = strategy
        .calculate(EmissionContext::new(&origin, &origin, 3.0))
        .unwrap_or_default();
    assert_relative_eq!(calculated, density, max_relative = 1e-12);
}

#[test]
fn transition_peaks_at_zero_discrepancy() {
    let strategy = ExponentialTransition::default();
    let (source, target) = (candidate(), candidate());

    let score = |straightline_distance: f64, route_length: f64| {
        let lengths = TransitionLengths {
            straightline_distance,
            route_length,
        };

        strategy.log_probability(TransitionContext::new(&source, &target, lengths))
    };

    assert_relative_eq!(score(100.0, 100.0), -(10.0f64.ln()));
    assert_relative_eq!(score(100.0, 90.0), -(10.0f64.ln()) - 1.0);
    assert_relative_eq!(score(100.0, 90.0), score(90.0, 100.0));
    assert!(score(100.0, 100.0) > score(100.0, 130.0));
}

#[test]
fn impossible_density_is_negative_infinity() {
    struct Never;

    impl<'a> Strategy<TransitionContext<'a>> for Never {
        fn calculate(&self, _: TransitionContext<'a>) -> Option<f64> {
            None
        }
    }

    let (source, target) = (candidate(), candidate());
    let lengths = TransitionLengths {
        straightline_distance: 1.0,
        route_length: 1.0,
    };

    let costing = CostingStrategies::new(GaussianEmission::default(), Never);
    let score = costing.transition(TransitionContext::new(&source, &target, lengths));

    assert_eq!(score, f64::NEG_INFINITY);
}

#[test]
fn configured_strategies_follow_config() {
    let config = crate::MatcherConfig::default()
        .with_emission_sigma(2.0)
        .with_transition_beta(5.0);

    let costing = CostingStrategies::from_config(&config);
    let origin = point! { x: 0.0, y: 0.0 };

    let expected = emission(&GaussianEmission::new(2.0), 6.0);
    let actual = costing.emission(EmissionContext::new(&origin, &origin, 6.0));

    assert_relative_eq!(actual, expected);
}
