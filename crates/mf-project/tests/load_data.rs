use std::path::{Path, PathBuf};

use mf_project::{FlowReportDef, NetworkDef, ProjectError, ValidationError};

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn solve(def: &NetworkDef) -> mf_solver::FlowReport {
    mf_solver::solve(&def.to_network())
        .unwrap_or_else(|e| panic!("solve failed: {e}"))
        .report
}

#[test]
fn data_files_load_and_validate() {
    for name in ["bottleneck.json", "city_water.yaml", "duplicate_edges.json"] {
        let def = mf_project::load(&data(name)).unwrap_or_else(|e| panic!("Failed to load {name}: {e}"));
        mf_project::validate_network(&def).unwrap_or_else(|e| panic!("Failed to validate {name}: {e}"));
    }
}

#[test]
fn bottleneck_file_solves_to_five() {
    let def = mf_project::load_json(&data("bottleneck.json")).unwrap();
    let report = solve(&def);
    assert_eq!(report.total_flow, 5);

    let out = FlowReportDef::from_report(&report);
    assert_eq!(out.nodes["a"].flow_used, 5);
    assert_eq!(out.edges["s->a"].capacity, 10);
}

#[test]
fn city_water_is_limited_by_pumps() {
    let def = mf_project::load_yaml(&data("city_water.yaml")).unwrap();
    let report = solve(&def);

    // north: min(30, 40, 35) = 30; south: min(30, 25) = 25 split over junction and district
    assert_eq!(report.total_flow, 55);
    assert_eq!(report.node("pump_south").unwrap().flow_used, 25);
    assert!(report.node("junction").unwrap().flow_used <= 50);
}

#[test]
fn duplicate_edges_use_last_capacity() {
    let def = mf_project::load(&data("duplicate_edges.json")).unwrap();
    let network = def.to_network();
    assert_eq!(network.duplicate_edges(), vec!["s->a"]);

    let report = solve(&def);
    assert_eq!(report.total_flow, 20);

    let out = FlowReportDef::from_report(&report);
    assert_eq!(out.edges.len(), 2);
    assert_eq!(out.edges["s->a"].capacity, 20);
}

#[test]
fn dangling_edge_is_rejected_on_load() {
    let err = mf_project::load(&data("dangling_edge.json")).unwrap_err();
    match err {
        ProjectError::Validation(ValidationError::MissingReference { id, context }) => {
            assert_eq!(id, "x");
            assert_eq!(context, "edges[1]");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = mf_project::load(&data("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}
