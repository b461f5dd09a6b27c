use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const POSTED: &str = "2025-10-19T05:30:00Z";

/// Helper function to create a Command isolated from the user's settings
fn taqwim_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taqwim").expect("Failed to find taqwim binary");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.arg("--no-color");
    cmd
}

fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

#[test]
fn test_cli_absolute_gregorian_default() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["absolute", POSTED])
        .assert()
        .success()
        .stdout("19 Oct 2025\n");
}

#[test]
fn test_cli_absolute_with_time_and_zone() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["--time-zone", "UTC", "absolute", POSTED, "--time"])
        .assert()
        .success()
        .stdout("19 Oct 2025, 05:30\n");
}

#[test]
fn test_cli_absolute_dual_arabic() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["--lang", "ar", "absolute", POSTED, "--calendar", "both"])
        .assert()
        .success()
        .stdout("26 ربيع الآخر 1447 هـ (19 أكتوبر 2025)\n");
}

#[test]
fn test_cli_absolute_arabic_digits() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args([
            "--lang",
            "ar",
            "--arabic-digits",
            "absolute",
            POSTED,
            "--calendar",
            "islamic",
        ])
        .assert()
        .success()
        .stdout("٢٦ ربيع الآخر ١٤٤٧ هـ\n");
}

#[test]
fn test_cli_invalid_timestamp_fails() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["absolute", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp"));
}

#[test]
fn test_cli_invalid_timestamp_lenient() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["--lenient", "absolute", "not-a-date"])
        .assert()
        .success()
        .stdout("—\n");
}

#[test]
fn test_cli_unknown_language_rejected() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["--lang", "fr", "absolute", POSTED])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 'en' or 'ar'"));
}

#[test]
fn test_cli_relative() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["relative", POSTED, "--now", "2025-10-19T05:32:05Z"])
        .assert()
        .success()
        .stdout("2 minutes ago\n");

    taqwim_cmd(&env)
        .args(["--lang", "ar", "relative", POSTED, "--now", "2025-10-19T08:30:00Z"])
        .assert()
        .success()
        .stdout("منذ 3 ساعة\n");
}

#[test]
fn test_cli_relative_future_is_absolute() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["relative", POSTED, "--now", "2025-10-19T05:29:50Z"])
        .assert()
        .success()
        .stdout("19 Oct 2025\n");
}

#[test]
fn test_cli_today_with_hijri() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["today", "--hijri", "--now", POSTED])
        .assert()
        .success()
        .stdout("19 Oct 2025 (26 Rabiʻ II 1447 AH)\n");
}

#[test]
fn test_cli_show_report() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["show", POSTED, "--now", "2025-10-19T06:30:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2025-10-19T05:30:00Z"))
        .stdout(predicate::str::contains("**Gregorian**: 19 Oct 2025, 08:30"))
        .stdout(predicate::str::contains("**Relative**: 1 hour ago"))
        .stdout(predicate::str::contains("**Relative**: منذ 1 ساعة"));
}

#[test]
fn test_cli_week_range() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["week", "--start", "2025-09-07", "--number", "3"])
        .assert()
        .success()
        .stdout("Week 3: 2025-09-21 – 2025-09-27\n");
}

#[test]
fn test_cli_current_week() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["week", "--start", "2025-09-07", "--now", POSTED])
        .assert()
        .success()
        .stdout("Week 7\n");
}

#[test]
fn test_cli_hijri_conversion() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["hijri", "2024-03-11"])
        .assert()
        .success()
        .stdout("1445-09-01 AH\n");

    taqwim_cmd(&env)
        .args(["hijri", "0600-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("precedes the Hijri epoch"));
}

#[test]
fn test_cli_settings_file() {
    let env = create_cli_test_environment();
    let config = env.path().join("custom.json");
    std::fs::write(&config, r#"{ "language": "ar", "time_zone": "UTC" }"#).unwrap();

    taqwim_cmd(&env)
        .args(["--config", config.to_str().unwrap(), "absolute", POSTED, "--time"])
        .assert()
        .success()
        .stdout("19 أكتوبر 2025، 05:30\n");
}

#[test]
fn test_cli_bad_settings_file() {
    let env = create_cli_test_environment();
    let config = env.path().join("broken.json");
    std::fs::write(&config, "{ not json").unwrap();

    taqwim_cmd(&env)
        .args(["--config", config.to_str().unwrap(), "today"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_cli_init_config_then_default_lookup() {
    let env = create_cli_test_environment();

    taqwim_cmd(&env)
        .args(["--lang", "ar", "--time-zone", "UTC", "init-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings to"));

    assert!(env.path().join("taqwim").join("config.json").exists());

    taqwim_cmd(&env)
        .args(["absolute", POSTED, "--time"])
        .assert()
        .success()
        .stdout("19 أكتوبر 2025، 05:30\n");
}

#[test]
fn test_cli_unknown_time_zone() {
    let env = create_cli_test_environment();
    taqwim_cmd(&env)
        .args(["--time-zone", "Nowhere/Special", "today"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown timezone"));
}
