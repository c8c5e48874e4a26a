use serial_test::serial;
use tripplanner::ai::config::{AiConfig, DEFAULT_GEMINI_MODEL};
use tripplanner::config::DEFAULT_BIND_ADDR;
use tripplanner::Config;

fn clear_env() {
    for key in [
        "GOOGLE_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_API_URL",
        "BIND_ADDR",
        "RATE_LIMIT_PER_SECOND",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn ai_config_from_env_missing_key() {
    clear_env();
    assert!(AiConfig::from_env().is_none());
    std::env::set_var("GOOGLE_API_KEY", "  ");
    assert!(AiConfig::from_env().is_none());
}

#[test]
#[serial]
fn ai_config_from_env_defaults() {
    clear_env();
    std::env::set_var("GOOGLE_API_KEY", "k");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "k");
    assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
    assert_eq!(
        cfg.base_url(),
        "https://generativelanguage.googleapis.com/v1beta/models"
    );
    assert!(!format!("{cfg:?}").contains("\"k\""));
}

#[test]
#[serial]
fn ai_config_from_env_custom_model_and_url() {
    clear_env();
    std::env::set_var("GOOGLE_API_KEY", "k");
    std::env::set_var("GEMINI_MODEL", "gemini-pro");
    std::env::set_var("GEMINI_API_URL", "http://localhost:9/models");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.model, "gemini-pro");
    assert_eq!(cfg.base_url(), "http://localhost:9/models");
}

#[test]
#[serial]
fn config_requires_api_key() {
    clear_env();
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("GOOGLE_API_KEY"));
}

#[test]
#[serial]
fn config_from_env_defaults() {
    clear_env();
    std::env::set_var("GOOGLE_API_KEY", "k");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.ai.api_key, "k");
    assert!(cfg.api.rate_limit_per_second.is_none());
}

#[test]
#[serial]
fn config_reads_bind_addr_and_rate_limit() {
    clear_env();
    std::env::set_var("GOOGLE_API_KEY", "k");
    std::env::set_var("BIND_ADDR", "0.0.0.0:8080");
    std::env::set_var("RATE_LIMIT_PER_SECOND", "5");
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
    assert_eq!(cfg.api.rate_limit_per_second, Some(5));

    std::env::set_var("RATE_LIMIT_PER_SECOND", "lots");
    assert!(Config::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn config_does_not_load_dotenv_itself() {
    clear_env();
    let dir = std::env::temp_dir().join(format!("tripplanner-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(".env"), "GOOGLE_API_KEY=from-dotenv\n").unwrap();
    let previous = std::env::current_dir().unwrap();

    std::env::set_current_dir(&dir).unwrap();
    let result = Config::from_env();
    std::env::set_current_dir(previous).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert!(result.is_err());
    assert!(std::env::var("GOOGLE_API_KEY").is_err());
}
