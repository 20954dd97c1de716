use std::path::PathBuf;

use clap::Parser;

use triage::cli::{Cli, Commands};

#[test]
fn test_parse_analyze_defaults() {
    let cli = Cli::try_parse_from(vec!["triage", "analyze", "tasks.json"]).unwrap();

    assert!(!cli.json);
    assert!(cli.config.is_none());
    match cli.command {
        Commands::Analyze {
            file,
            strategy,
            top,
        } => {
            assert_eq!(file, PathBuf::from("tasks.json"));
            assert!(strategy.is_none());
            assert!(top.is_none());
        }
        Commands::Strategies => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_analyze_with_flags() {
    let cli = Cli::try_parse_from(vec![
        "triage",
        "analyze",
        "tasks.yaml",
        "--strategy",
        "deadline_driven",
        "--top",
        "5",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Analyze {
            file,
            strategy,
            top,
        } => {
            assert_eq!(file, PathBuf::from("tasks.yaml"));
            assert_eq!(strategy.as_deref(), Some("deadline_driven"));
            assert_eq!(top, Some(Some(5)));
        }
        Commands::Strategies => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_top_without_count() {
    let cli = Cli::try_parse_from(vec!["triage", "analyze", "tasks.json", "--top"]).unwrap();

    match cli.command {
        Commands::Analyze { top, .. } => assert_eq!(top, Some(None)),
        Commands::Strategies => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_strategies() {
    let cli = Cli::try_parse_from(vec!["triage", "strategies", "--json"]).unwrap();

    assert!(cli.json);
    assert!(matches!(cli.command, Commands::Strategies));
}

#[test]
fn test_parse_global_config_flag() {
    let cli = Cli::try_parse_from(vec![
        "triage",
        "--config",
        "/tmp/triage.yaml",
        "strategies",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("/tmp/triage.yaml")));
}

#[test]
fn test_analyze_requires_file() {
    assert!(Cli::try_parse_from(vec!["triage", "analyze"]).is_err());
}
