use approx::{assert_abs_diff_eq, assert_relative_eq};
use flexure_core::calculations::moment::{self, LoadResponse, PositionGrid};
use flexure_core::calculations::superposition::superpose_point_loads;
use flexure_core::{calculate, AnalysisSettings, Beam, BeamInput, LoadCase, MultiLoadExtremum, PointLoad};

const L: f64 = 10.0;

fn analyse(case: LoadCase) -> flexure_core::BeamResult {
    calculate(&BeamInput::new("test", Beam::new(L), case)).expect("valid input analyses")
}

fn sample_cases() -> Vec<LoadCase> {
    vec![
        LoadCase::point(100.0, 5.0),
        LoadCase::point(100.0, 2.5),
        LoadCase::point(-40.0, 9.1),
        LoadCase::distributed(10.0),
        LoadCase::distributed(-3.5),
        LoadCase::multiple(vec![PointLoad::new(50.0, 3.0), PointLoad::new(50.0, 7.0)]),
        LoadCase::multiple(vec![
            PointLoad::new(12.0, 0.4),
            PointLoad::new(33.0, 2.2),
            PointLoad::new(-8.0, 5.0),
            PointLoad::new(60.0, 6.6),
            PointLoad::new(5.0, 9.9),
        ]),
    ]
}

#[test]
fn equilibrium_holds_for_every_case() {
    for case in sample_cases() {
        let result = analyse(case.clone());
        assert_abs_diff_eq!(
            result.reactions.left_kn + result.reactions.right_kn,
            case.total_load_kn(L),
            epsilon = 1e-9
        );
    }
}

#[test]
fn moment_vanishes_at_supports() {
    for case in sample_cases() {
        let result = analyse(case);
        let samples = result.moment_diagram.samples();
        let (x0, m0) = samples[0];
        let (xl, ml) = samples[samples.len() - 1];

        assert_eq!(x0, 0.0);
        assert_eq!(xl, L);
        assert_abs_diff_eq!(m0, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ml, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn point_load_moment_is_continuous_at_load() {
    let load = PointLoad::new(100.0, 2.5);
    let reactions = load.reactions(L);
    let at_load = load.moment_at(load.position_m, &reactions);
    let just_right = load.moment_at(load.position_m + 1e-9, &reactions);

    assert_relative_eq!(at_load, reactions.left_kn * load.position_m);
    assert_abs_diff_eq!(at_load, just_right, epsilon = 1e-6);
}

#[test]
fn superposition_is_order_independent() {
    let loads = vec![
        PointLoad::new(12.0, 0.4),
        PointLoad::new(33.0, 2.2),
        PointLoad::new(-8.0, 5.0),
        PointLoad::new(60.0, 6.6),
    ];
    let grid = PositionGrid::uniform(L, 1000);
    let base = superpose_point_loads(&loads, L, &grid);

    let permutations = [[3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];
    for order in permutations {
        let permuted: Vec<PointLoad> = order.iter().map(|&i| loads[i]).collect();
        let other = superpose_point_loads(&permuted, L, &grid);

        assert_abs_diff_eq!(base.reactions.left_kn, other.reactions.left_kn, epsilon = 1e-9);
        assert_abs_diff_eq!(base.reactions.right_kn, other.reactions.right_kn, epsilon = 1e-9);
        for (a, b) in base.field.moments().zip(other.field.moments()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        }
    }
}

#[test]
fn uniform_load_diagram_is_symmetric() {
    let load = flexure_core::DistributedLoad::new(7.5);
    let reactions = load.reactions(L);
    let grid = PositionGrid::uniform(L, 1001);
    let field = moment::evaluate(&grid, &load, &reactions);

    for &(x, m) in field.samples() {
        assert_abs_diff_eq!(m, load.moment_at(L - x, &reactions), epsilon = 1e-9);
    }
}

#[test]
fn scenario_midspan_point_load() {
    let result = analyse(LoadCase::point(100.0, 5.0));
    assert_relative_eq!(result.reactions.left_kn, 50.0);
    assert_relative_eq!(result.reactions.right_kn, 50.0);
    assert_relative_eq!(result.max_moment.moment_knm, 250.0);
    assert_relative_eq!(result.max_moment.position_m, 5.0);
}

#[test]
fn scenario_offset_point_load() {
    let result = analyse(LoadCase::point(100.0, 2.5));
    assert_relative_eq!(result.reactions.left_kn, 75.0);
    assert_relative_eq!(result.reactions.right_kn, 25.0);
    assert_relative_eq!(result.max_moment.moment_knm, 187.5);
    assert_relative_eq!(result.max_moment.position_m, 2.5);
}

#[test]
fn scenario_uniform_load() {
    let result = analyse(LoadCase::distributed(10.0));
    assert_relative_eq!(result.reactions.left_kn, 50.0);
    assert_relative_eq!(result.reactions.right_kn, 50.0);
    assert_relative_eq!(result.max_moment.moment_knm, 125.0);
    assert_relative_eq!(result.max_moment.position_m, 5.0);
}

#[test]
fn scenario_two_symmetric_loads() {
    let case = LoadCase::multiple(vec![PointLoad::new(50.0, 3.0), PointLoad::new(50.0, 7.0)]);

    let exact = analyse(case.clone());
    assert_relative_eq!(exact.reactions.left_kn, 50.0);
    assert_relative_eq!(exact.reactions.right_kn, 50.0);
    assert_relative_eq!(exact.max_moment.moment_knm, 150.0, max_relative = 1e-12);
    assert_relative_eq!(exact.max_moment.position_m, 3.0);

    let sampled_input = BeamInput::new("sampled", Beam::new(L), case).with_settings(AnalysisSettings {
        multi_load_extremum: MultiLoadExtremum::Sampled,
        ..AnalysisSettings::default()
    });
    let sampled = calculate(&sampled_input).unwrap();
    assert_abs_diff_eq!(sampled.max_moment.moment_knm, 150.0, epsilon = 1e-6);
    assert!(sampled.max_moment.position_m > 2.99 && sampled.max_moment.position_m < 7.01);
}

#[test]
fn scenario_zero_load() {
    let result = analyse(LoadCase::point(0.0, 4.0));
    assert_eq!(result.reactions.left_kn, 0.0);
    assert_eq!(result.reactions.right_kn, 0.0);
    assert!(result.moment_diagram.moments().all(|m| m == 0.0));
}

#[test]
fn input_document_round_trips() {
    let input = BeamInput::new(
        "B-2",
        Beam::new(L),
        LoadCase::evenly_spaced(4, 25.0, L).unwrap(),
    );
    let json = serde_json::to_string(&input).unwrap();
    let parsed = BeamInput::from_json(&json).unwrap();

    assert_eq!(parsed, input);
    assert_eq!(calculate(&parsed).unwrap(), calculate(&input).unwrap());
}

#[test]
fn non_finite_inputs_fail_fast() {
    let cases = [
        (LoadCase::Point(PointLoad::new(100.0, f64::NAN)), "INVALID_GEOMETRY"),
        (LoadCase::distributed(f64::INFINITY), "INVALID_MAGNITUDE"),
        (
            LoadCase::multiple(vec![PointLoad::new(50.0, 3.0), PointLoad::new(f64::NAN, 7.0)]),
            "INVALID_MAGNITUDE",
        ),
    ];

    for (case, code) in cases {
        let err = calculate(&BeamInput::new("bad", Beam::new(L), case.clone())).unwrap_err();
        assert_eq!(err.error_code(), code, "unexpected error for {:?}", case);
    }
}

#[test]
fn overflowing_span_is_rejected() {
    let err = calculate(&BeamInput::new("huge", Beam::new(1e200), LoadCase::distributed(1e200))).unwrap_err();
    assert_eq!(err.error_code(), "NON_FINITE_RESULT");
}
