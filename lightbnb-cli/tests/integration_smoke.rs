//! Smoke tests to verify command wiring (no database needed)

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any developer .env, config file, or DATABASE_URL
fn lightbnb(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Output ===

#[test]
fn test_users_get_help() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["users", "get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Look up by email"));
}

#[test]
fn test_properties_search_help() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["properties", "search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--min-rating"))
        .stdout(predicate::str::contains("--explain"));
}

#[test]
fn test_reservations_help() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["reservations", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest (user) id"));
}

// === Explain ===

#[test]
fn test_search_explain_without_database() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args([
            "properties",
            "search",
            "--city",
            "van",
            "--min-rating",
            "4",
            "--explain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("AND properties.city LIKE $1"))
        .stdout(predicate::str::contains("HAVING avg(property_reviews.rating) >= $2"))
        .stdout(predicate::str::contains("LIMIT $3;"))
        .stdout(predicate::str::contains("-- $1 = '%van%'"))
        .stdout(predicate::str::contains("-- $3 = 10"));
}

#[test]
fn test_search_explain_json() {
    let home = TempDir::new().unwrap();
    let output = lightbnb(&home)
        .args([
            "properties",
            "search",
            "--min-price",
            "50",
            "--max-price",
            "150",
            "--limit",
            "5",
            "--explain",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["params"], serde_json::json!([50, 150, 5]));
    assert!(plan["sql"]
        .as_str()
        .unwrap()
        .contains("AND properties.cost_per_night <= $2::numeric"));
}

#[test]
fn test_explain_uses_config_limit() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("lightbnb.toml"),
        "[search]\ndefault_limit = 3\n",
    )
    .unwrap();

    lightbnb(&home)
        .args(["properties", "search", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- $1 = 3"));
}

#[test]
fn test_explain_large_limit_not_capped() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["properties", "search", "--limit", "500", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- $1 = 500"));
}

// === Errors ===

#[test]
fn test_zero_limit_rejected() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["properties", "search", "--limit", "0", "--explain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit must be positive (got 0)"));
}

#[test]
fn test_missing_database_url() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["users", "get", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_invalid_email_rejected_before_connecting() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["users", "get", "--email", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email: must look like"));
}

#[test]
fn test_invalid_listing_json() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("listing.json");
    std::fs::write(&file, r#"{"title": "Missing everything"}"#).unwrap();

    lightbnb(&home)
        .args(["properties", "add"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid listing JSON"));
}

// === Completions ===

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    lightbnb(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lightbnb"));
}
