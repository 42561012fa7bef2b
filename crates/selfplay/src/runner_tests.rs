use super::*;
use random_agent::{RandomAgent, UniformActionAgent};

#[test]
fn test_random_vs_uniform() {
    let mut agent1 = RandomAgent::with_seed(1);
    let mut agent2 = UniformActionAgent::with_seed(2);

    let results = quick_run(&mut agent1, &mut agent2, 4, 9).unwrap();

    assert_eq!(results.episodes.len(), 4);
    assert_eq!(results.participants, vec!["Random v1.0", "Uniform v1.0"]);
    for (i, ep) in results.episodes.iter().enumerate() {
        assert_eq!(ep.agent1_white, i % 2 == 0);
        let white = if ep.agent1_white { "Random v1.0" } else { "Uniform v1.0" };
        assert_eq!(ep.white, white);
        assert!(ep.plies > 0);
        assert!(ep.plies <= results.config.env.max_plies);
    }
}

#[test]
fn test_legal_mover_never_asks_for_wrong_color() {
    let mut agent1 = RandomAgent::with_seed(5);
    let mut agent2 = RandomAgent::with_seed(6);

    let results = quick_run(&mut agent1, &mut agent2, 2, 3).unwrap();
    for ep in &results.episodes {
        assert_eq!(ep.wrong_color_moves, 0);
        assert_eq!(ep.redirected_moves, 0);
    }
}

#[test]
fn test_fixed_colors() {
    let mut agent1 = RandomAgent::with_seed(1);
    let mut agent2 = UniformActionAgent::with_seed(2);

    let config = RunConfig {
        num_episodes: 3,
        alternate_colors: false,
        verbose: false,
        env: EnvConfig {
            max_plies: 20,
            seed: Some(4),
            ..Default::default()
        },
    };
    let results = EpisodeRunner::new(config).run(&mut agent1, &mut agent2).unwrap();

    assert!(results.episodes.iter().all(|ep| ep.agent1_white));
    assert!(results.episodes.iter().all(|ep| ep.plies <= 20));
}

#[test]
fn test_seeded_runs_repeat() {
    let play = || {
        let mut agent1 = RandomAgent::with_seed(10);
        let mut agent2 = UniformActionAgent::with_seed(11);
        quick_run(&mut agent1, &mut agent2, 3, 12).unwrap()
    };
    let a = play();
    let b = play();
    for (x, y) in a.episodes.iter().zip(&b.episodes) {
        assert_eq!(x.plies, y.plies);
        assert_eq!(x.termination, y.termination);
        assert_eq!(x.white_reward, y.white_reward);
    }
}

#[test]
fn test_run_config_from_toml() {
    let config: RunConfig = toml::from_str(
        r#"
        num_episodes = 6
        verbose = false

        [env]
        max_plies = 40
        seed = 1
        "#,
    )
    .unwrap();
    assert_eq!(config.num_episodes, 6);
    assert!(config.alternate_colors);
    assert_eq!(config.env.max_plies, 40);
    assert_eq!(config.env.seed, Some(1));
}
