use super::*;

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

fn usage_error(line: &str) -> bool {
    matches!(RunArgs::parse(&args(line)), Err(SelfPlayError::Usage(_)))
}

#[test]
fn test_parse_full_command() {
    let parsed =
        RunArgs::parse(&args("random uniform:3 --episodes 5 --seed 7 -p 40 --out r.json")).unwrap();
    assert_eq!(parsed.agent1, "random");
    assert_eq!(parsed.agent2, "uniform:3");
    assert_eq!(parsed.episodes, Some(5));
    assert_eq!(parsed.seed, Some(7));
    assert_eq!(parsed.out, PathBuf::from("r.json"));

    let config = parsed.run_config().unwrap();
    assert_eq!(config.num_episodes, 5);
    assert_eq!(config.env.max_plies, 40);
    assert_eq!(config.env.seed, Some(7));
}

#[test]
fn test_defaults() {
    let parsed = RunArgs::parse(&args("random random")).unwrap();
    assert_eq!(parsed.out, PathBuf::from(DEFAULT_RESULTS_FILE));
    assert_eq!(parsed.run_config().unwrap(), RunConfig::default());
}

#[test]
fn test_missing_or_unknown_agents_rejected() {
    assert!(usage_error(""));
    assert!(usage_error("random"));
    assert!(usage_error("random --seed 3"));
    assert!(usage_error("random bogus"));
    assert!(usage_error("random uniform:abc"));
}

#[test]
fn test_bad_flag_values_rejected() {
    assert!(usage_error("random uniform --seed abc"));
    assert!(usage_error("random uniform --episodes -3"));
    assert!(usage_error("random uniform --max-plies"));
    assert!(usage_error("random uniform --fast 1"));
}

#[test]
fn test_create_agent_names() {
    assert_eq!(create_agent("random").unwrap().name(), "Random v1.0");
    assert_eq!(create_agent("Uniform:9").unwrap().name(), "Uniform v1.0");
    assert!(create_agent("minimax").is_err());
}
