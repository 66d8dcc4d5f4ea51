//! End-to-end behaviour of the sequential estimator.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use forage::prelude::*;

/// Sampler that reports the same walk length every time.
struct Constant(StepCount);

impl WalkSampler for Constant {
    fn sample(&mut self, _rng: &mut SimRng) -> ForageResult<StepCount> {
        Ok(self.0)
    }
}

// The default field has an exact expected hitting time of about 13.99 steps,
// well away from a rounding boundary.
#[test]
fn default_field_estimate_is_about_fourteen() {
    let report = forage::estimation::run(&ForageConfig::default()).unwrap();

    assert!(
        (13.0..=15.0).contains(&report.estimate),
        "estimate {} out of range",
        report.estimate
    );
    assert!(report.simulations > 30);
    assert!(report.interval.low <= report.interval.high);
    assert_eq!(report.estimator, "normal");
}

#[test]
fn default_field_reports_agreeing_bounds() {
    let config = ForageConfig::builder()
        .confidence_level(0.95)
        .digits(1)
        .seed(11)
        .build();
    let report = forage::estimation::run(&config).unwrap();

    let low = forage::stats::round_half_even(report.interval.low, 1);
    let high = forage::stats::round_half_even(report.interval.high, 1);
    assert!((low - high).abs() < 1e-9);
    assert!((report.estimate - low).abs() < 1e-9);
    assert!((report.estimate - 14.0).abs() <= 0.5);
}

#[test]
fn straight_walk_needs_two_steps() {
    let east = StepFn::new(|p: Position, _rng: &mut SimRng| p.offset(10, 0));
    let simulator = WalkSimulator::new(east, HalfPlaneFood::new(15)).unwrap();
    let mut controller = SequentialEstimator::new(simulator, NormalInterval, SimRng::new(1));

    let report = controller.estimate(0.999, 0).unwrap();

    assert!((report.estimate - 2.0).abs() < f64::EPSILON);
    assert_eq!(report.simulations, 31);
    assert_eq!(
        report.interval,
        ConfidenceInterval {
            low: 2.0,
            high: 2.0
        }
    );
}

#[test]
fn constant_sampler_stops_right_after_warmup() {
    let mut normal = SequentialEstimator::new(Constant(7), NormalInterval, SimRng::new(0));
    assert_eq!(normal.estimate(0.99, 2).unwrap().simulations, 31);

    let mut student = SequentialEstimator::new(Constant(7), StudentTInterval, SimRng::new(0));
    assert_eq!(student.estimate(0.99, 2).unwrap().simulations, 3);
}

#[test]
fn invalid_confidence_levels_are_rejected() {
    for level in [1.0, 0.0, -0.1, 1.5, f64::NAN] {
        let mut controller =
            SequentialEstimator::new(Constant(3), NormalInterval, SimRng::new(0));
        assert!(matches!(
            controller.estimate(level, 0),
            Err(ForageError::InvalidConfidenceLevel { .. })
        ));
    }
}

#[test]
fn negative_digits_are_rejected() {
    let mut controller = SequentialEstimator::new(Constant(3), NormalInterval, SimRng::new(0));
    assert!(matches!(
        controller.estimate(0.9, -1),
        Err(ForageError::InvalidDigits { digits: -1 })
    ));
}

#[test]
fn origin_inside_food_is_rejected() {
    let everywhere = BoundaryFn::new(|_: Position| true);
    assert!(matches!(
        WalkSimulator::new(AxisStep::default(), everywhere),
        Err(ForageError::OriginInsideFood { x: 0, y: 0 })
    ));
}

#[test]
fn step_ceiling_surfaces_non_termination() {
    let config = ForageConfig::builder()
        .food((0.0, 0.0), (1000.0, 1000.0))
        .max_steps_per_walk(50)
        .build();

    assert!(matches!(
        forage::estimation::run(&config),
        Err(ForageError::NonTermination {
            steps: 50,
            ceiling: 50
        })
    ));
}

#[test]
fn simulation_budget_surfaces_non_convergence() {
    let config = ForageConfig::builder()
        .digits(4)
        .max_simulations(200)
        .build();

    match forage::estimation::run(&config) {
        Err(ForageError::NonConvergence {
            simulations, low, high,
        }) => {
            assert_eq!(simulations, 200);
            assert!(low < high);
        }
        other => panic!("expected NonConvergence, got {other:?}"),
    }
}

#[test]
fn student_t_estimator_agrees_with_normal() {
    let normal_config = ForageConfig::builder()
        .confidence_level(0.95)
        .seed(3)
        .build();
    let normal = forage::estimation::run(&normal_config).unwrap();

    let student_config = ForageConfig::builder()
        .confidence_level(0.95)
        .seed(3)
        .estimator(EstimatorKind::StudentT)
        .build();
    let student = forage::estimation::run(&student_config).unwrap();

    assert_eq!(student.estimator, "student-t");
    assert!((normal.estimate - student.estimate).abs() <= 1.0);
}
