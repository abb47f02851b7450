use route_optimizer::optimizer::{OptimizerConfig, RouteOptimizer};
use route_optimizer::request::{RouteRequest, RouteResponse};
use route_optimizer::Error;

fn solve(body: &str, config: OptimizerConfig) -> Result<serde_json::Value, Error> {
    let request: RouteRequest = serde_json::from_str(body).expect("request json");
    let tour = RouteOptimizer::new(config).plan(&request, &request.locations)?;
    Ok(serde_json::to_value(RouteResponse::from(tour)).expect("response json"))
}

#[test]
fn three_stop_request() {
    let body = r#"{
        "locations": ["A", "B", "C"],
        "matrix": [[null, 1, 100], [1, null, 1], [100, 1, null]]
    }"#;
    let response = solve(body, OptimizerConfig::default()).unwrap();

    let path: Vec<&str> = response["shortestPath"]
        .as_array()
        .unwrap()
        .iter()
        .map(|leg| leg["location"].as_str().unwrap())
        .collect();
    assert_eq!(path, vec!["A", "B", "C", "A"]);
    assert_eq!(response["totalTime"], 102.0);
}

#[test]
fn unreachable_pair_in_request() {
    let body = r#"{
        "locations": ["A", "B"],
        "matrix": [[0, 7], [null, 0]]
    }"#;
    let err = solve(body, OptimizerConfig::default()).unwrap_err();
    assert_eq!(err, Error::NoRouteFound);
}

#[test]
fn oversized_request_is_rejected() {
    let n = 6;
    let locations: Vec<String> = (0..n).map(|i| format!("\"L{i}\"")).collect();
    let row = format!("[{}]", vec!["1"; n].join(","));
    let matrix = vec![row; n].join(",");
    let body = format!(
        r#"{{ "locations": [{}], "matrix": [{}] }}"#,
        locations.join(","),
        matrix
    );
    let config = OptimizerConfig {
        max_locations: 5,
        time_limit_ms: None,
    };
    let err = solve(&body, config).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}
