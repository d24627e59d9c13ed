/*
 * @Description  : TrainConfig 的单元测试
 */

use crate::errors::ConfigError;
use crate::nn::TrainConfig;

#[test]
fn test_train_config_default() {
    let config = TrainConfig::default();
    assert_eq!(config.iterations, 3000);
    assert_eq!(config.learning_rate, 0.0002);
    assert_eq!(config.report_interval, 500);
}

#[test]
fn test_train_config_builder() {
    let config = TrainConfig::default()
        .with_iterations(10)
        .with_learning_rate(0.5)
        .with_report_interval(2);
    assert_eq!(
        config,
        TrainConfig {
            iterations: 10,
            learning_rate: 0.5,
            report_interval: 2,
        }
    );
}

#[test]
fn test_train_config_from_json_str() {
    let config = TrainConfig::from_json_str(
        r#"{ "iterations": 100, "learning_rate": 0.01, "report_interval": 10 }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        TrainConfig::default()
            .with_iterations(100)
            .with_learning_rate(0.01)
            .with_report_interval(10)
    );

    // 缺省字段取默认值
    let config = TrainConfig::from_json_str(r#"{ "iterations": 7 }"#).unwrap();
    assert_eq!(config, TrainConfig::default().with_iterations(7));
    assert_eq!(TrainConfig::from_json_str("{}").unwrap(), TrainConfig::default());
}

#[test]
fn test_train_config_from_json_str_invalid() {
    let result = TrainConfig::from_json_str(r#"{ "iterations": "many" }"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    let result = TrainConfig::from_json_str("not json");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_train_config_from_json_file() {
    let path = std::env::temp_dir().join(format!(
        "simple_net_train_config_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{ "learning_rate": 0.1 }"#).unwrap();
    let config = TrainConfig::from_json_file(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.unwrap(), TrainConfig::default().with_learning_rate(0.1));

    let missing = std::env::temp_dir().join("simple_net_no_such_config.json");
    let result = TrainConfig::from_json_file(missing);
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
