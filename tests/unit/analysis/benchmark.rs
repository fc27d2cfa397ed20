//! Tests for benchmark configuration, execution and summaries

#[cfg(test)]
mod tests {
    use gridbench::PlannerError;
    use gridbench::algorithm::{Heuristic, PlannerKind};
    use gridbench::analysis::benchmark::{
        BenchmarkConfig, BenchmarkReport, BenchmarkRunner, Experiment, ExperimentSummary,
        run_experiment,
    };
    use gridbench::generation::{MapConfig, MapKind};
    use gridbench::io::configuration::DEFAULT_REPEATS;
    use gridbench::spatial::Point;
    use std::f64::consts::SQRT_2;

    const CONFIG: &str = r#"{
        "experiments": [
            {
                "environment": {"width": 4, "height": 4, "type": "maze", "seed": 3},
                "planner": "dijkstra",
                "start": {"x": 1, "y": 1},
                "goal": {"x": 7, "y": 7},
                "repeats": 3
            },
            {
                "environment": {"width": 12, "height": 10, "type": "random_uniform"},
                "heuristic": "euclidean",
                "start": {"x": 0, "y": 0},
                "goal": {"x": 11, "y": 9}
            }
        ]
    }"#;

    fn maze_experiment(repeats: usize) -> Experiment {
        Experiment {
            environment: MapConfig::maze(4, 4, 3),
            planner: PlannerKind::AStar,
            heuristic: None,
            start: Point::new(1.0, 1.0),
            goal: Point::new(7.0, 7.0),
            repeats,
        }
    }

    fn parameter_of(error: &PlannerError) -> Option<&'static str> {
        match error {
            PlannerError::InvalidConfiguration { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }

    // Tests omitted planner and repeat fields take their defaults
    // Verified by defaulting the planner to Dijkstra
    #[test]
    fn test_config_defaults() {
        let config = BenchmarkConfig::from_json(CONFIG).expect("valid config");
        assert_eq!(config.experiments.len(), 2);

        let first = &config.experiments[0];
        assert_eq!(first.planner, PlannerKind::Dijkstra);
        assert_eq!(first.repeats, 3);
        assert_eq!(first.environment.kind, MapKind::Maze);

        let second = &config.experiments[1];
        assert_eq!(second.planner, PlannerKind::AStar);
        assert_eq!(second.heuristic, Some(Heuristic::Euclidean));
        assert_eq!(second.repeats, DEFAULT_REPEATS);
    }

    // Tests unknown planner names and invalid experiments are rejected
    // Verified by skipping per-experiment validation
    #[test]
    fn test_invalid_configs_rejected() {
        let unknown_planner = CONFIG.replace("\"dijkstra\"", "\"rrt\"");
        let error = BenchmarkConfig::from_json(&unknown_planner).expect_err("unknown planner");
        assert_eq!(parameter_of(&error), Some("benchmark_config"));

        let zero_repeats = CONFIG.replace("\"repeats\": 3", "\"repeats\": 0");
        let error = BenchmarkConfig::from_json(&zero_repeats).expect_err("zero repeats");
        assert_eq!(parameter_of(&error), Some("repeats"));

        let bad_density = CONFIG.replace(
            "\"type\": \"random_uniform\"",
            "\"type\": \"random_uniform\", \"obstacle_density\": 2.0",
        );
        let error = BenchmarkConfig::from_json(&bad_density).expect_err("bad density");
        assert_eq!(parameter_of(&error), Some("obstacle_density"));
    }

    // Tests that parse failures keep the serde message as the reason
    // Verified by passing the serde error as the rejected value
    #[test]
    fn test_parse_error_reports_serde_message() {
        let unknown_planner = CONFIG.replace("\"dijkstra\"", "\"rrt\"");
        let error = BenchmarkConfig::from_json(&unknown_planner).expect_err("unknown planner");

        let PlannerError::InvalidConfiguration { value, reason, .. } = &error else {
            unreachable!("parse failures are configuration errors: {error}");
        };
        assert_eq!(value, "<json>");
        assert!(reason.contains("rrt"), "reason was: {reason}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("benchmark.json");
        std::fs::write(&path, CONFIG).expect("writable");

        let config = BenchmarkConfig::load(&path).expect("valid file");
        assert_eq!(config.experiments.len(), 2);

        let missing = BenchmarkConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(PlannerError::FileSystem { .. })));
    }

    #[test]
    fn test_experiment_label() {
        assert_eq!(maze_experiment(1).label(), "astar on maze 4x4");
    }

    // Tests every repeat is timed and reported
    // Verified by reporting progress only once per experiment
    #[test]
    fn test_run_experiment_reports_each_repeat() {
        let mut seen = Vec::new();
        let summary =
            run_experiment(&maze_experiment(4), |repeat| seen.push(repeat)).expect("valid");

        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(summary.repeats, 4);
        assert_eq!(summary.planner, PlannerKind::AStar);
        assert_eq!(summary.map_type, MapKind::Maze);
        assert!((summary.success_rate - 1.0).abs() < f64::EPSILON);
        assert!(summary.mean_path_length >= 6.0 * SQRT_2 - 1e-9);
        assert!(summary.std_path_length.abs() < 1e-9);
        assert!(summary.mean_nodes >= 7.0);
        assert!(summary.ci_time_ms.0 <= summary.mean_time_ms);
        assert!(summary.ci_time_ms.1 >= summary.mean_time_ms);
    }

    // Tests failed runs count as zero length and zero success
    // Verified by dropping failed runs from the length mean
    #[test]
    fn test_unreachable_goal_summary() {
        let experiment = Experiment {
            environment: MapConfig::random_uniform(5, 5, 1.0, 0),
            planner: PlannerKind::Dijkstra,
            heuristic: None,
            start: Point::new(0.0, 0.0),
            goal: Point::new(4.0, 4.0),
            repeats: 2,
        };
        let summary = run_experiment(&experiment, |_| {}).expect("valid");

        assert!(summary.success_rate.abs() < f64::EPSILON);
        assert!(summary.mean_path_length.abs() < f64::EPSILON);
        assert!((summary.mean_nodes - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_run_experiment_validates() {
        let error = run_experiment(&maze_experiment(0), |_| {}).expect_err("zero repeats");
        assert_eq!(parameter_of(&error), Some("repeats"));
    }

    #[test]
    fn test_summary_of_no_runs() {
        let summary = ExperimentSummary::from_runs(PlannerKind::AStar, MapKind::Maze, &[]);
        assert_eq!(summary.repeats, 0);
        assert!(summary.success_rate.abs() < f64::EPSILON);
    }

    // Tests summaries come back in configuration order and encode as a report
    // Verified by sorting summaries by planner name
    #[test]
    fn test_runner_preserves_order() {
        let mut config = BenchmarkConfig::from_json(CONFIG).expect("valid config");
        for experiment in &mut config.experiments {
            experiment.repeats = 2;
        }

        let mut runner = BenchmarkRunner::new(config, false);
        let results = runner.run().expect("valid experiments");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].planner, PlannerKind::Dijkstra);
        assert_eq!(results[1].map_type, MapKind::RandomUniform);

        let value = serde_json::to_value(BenchmarkReport { results }).expect("serializable");
        assert_eq!(value["results"][0]["planner"], serde_json::json!("dijkstra"));
        assert_eq!(value["results"][0]["map_type"], serde_json::json!("maze"));
        assert!(value["results"][1]["ci_time_ms"].is_array());
    }
}
