use lp_app::lp_core::View;
use lp_app::lp_matrix::{ConstraintRow, Goal, MatrixSpec, Relation};
use lp_app::*;

fn sample_spec() -> MatrixSpec {
    MatrixSpec {
        variable_names: vec!["x".into(), "y".into()],
        objective_coefficients: vec![2.0, 3.0],
        objective_goal: Goal::Maximize,
        target_value: None,
        constraints: vec![ConstraintRow {
            coefficients: vec![1.0, 1.0],
            relation: Relation::Le,
            rhs: 4.0,
        }],
    }
}

#[test]
fn matrix_spec_file_loads_into_session() {
    let path = std::env::temp_dir().join("lp_app_matrix_spec.yaml");
    save_matrix_spec(&path, &sample_spec()).unwrap();

    let spec = load_matrix_spec(&path).unwrap();
    assert_eq!(spec, sample_spec());

    let mut session = SessionState::default();
    session.apply(Event::MatrixFileLoaded {
        name: "lp_app_matrix_spec.yaml".into(),
        result: Ok(spec),
    });
    assert_eq!(session.matrix().variable_count(), 2);
    assert_eq!(session.matrix().constraint_count(), 1);

    session.apply(Event::MatrixParseRequested);
    assert!(
        session
            .buffers()
            .load(View::Source)
            .contains("c1: x + y <= 4;")
    );
}

#[test]
fn ragged_spec_file_is_rejected() {
    let path = std::env::temp_dir().join("lp_app_ragged_spec.yaml");
    std::fs::write(
        &path,
        "variable_names: [x, y]\nobjective_coefficients: [1]\n",
    )
    .unwrap();

    let err = load_matrix_spec(&path).unwrap_err();
    assert!(matches!(err, AppError::Matrix(_)), "{err}");
}

#[test]
fn export_writes_contents() {
    let path = std::env::temp_dir().join("lp_app_export_report.txt");
    write_export(&path, "Value of objective function: 23").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Value of objective function: 23"
    );

    let (name, bytes) = read_source_file(&path).unwrap();
    assert_eq!(name, "lp_app_export_report.txt");
    assert_eq!(decode_source(&name, &bytes).unwrap(), "Value of objective function: 23");
}

#[test]
fn missing_file_is_read_error() {
    let path = std::env::temp_dir().join("lp_app_does_not_exist.lp");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(
        read_source_file(&path),
        Err(AppError::FileRead { .. })
    ));
}
