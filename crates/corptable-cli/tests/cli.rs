use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config location so the user's own config never leaks in.
struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("corptable").join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    #[allow(deprecated)]
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("corptable").expect("Failed to find corptable binary");
        cmd.env_remove("RUST_LOG")
            .env_remove("CORPTABLE_CONFIG")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .args(["--format", "json"])
            .output()
            .expect("Failed to run corptable");
        assert!(output.status.success(), "{:?}", output);
        serde_json::from_slice(&output.stdout).expect("stdout is JSON")
    }

    fn write_seed(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("seed.json");
        fs::write(&path, content).expect("Failed to write seed");
        path
    }
}

#[test]
fn list_defaults_to_first_page_of_sample_data() {
    let fixture = TestFixture::new();
    let json = fixture.json(&["list"]);

    let content = &json["content"];
    assert_eq!(content["rows"].as_array().unwrap().len(), 10);
    assert_eq!(content["rows"][0]["id"], 1);
    assert_eq!(content["pagination"]["total"], 25);
    assert_eq!(content["pagination"]["total_pages"], 3);
    assert_eq!(
        json["suggestions"][0]["command"],
        "corptable list --page 2"
    );
}

#[test]
fn list_last_page_in_text() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["list", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3/3 · rows 21-25 of 25"))
        .stdout(predicate::str::contains("ООО \"Цифровые решения\""));
}

#[test]
fn list_filter_is_case_insensitive() {
    let fixture = TestFixture::new();
    let json = fixture.json(&["list", "--filter", "ИВАН"]);

    assert_eq!(json["content"]["pagination"]["total"], 4);
    assert_eq!(json["content"]["filter"], "ИВАН");
    for row in json["content"]["rows"].as_array().unwrap() {
        let manager = row["manager_name"].as_str().unwrap().to_lowercase();
        assert!(manager.contains("иван"), "{}", manager);
    }
}

#[test]
fn list_sorted_descending_as_csv() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["list", "--sort", "manager", "--desc", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,companyName,managerName,phoneNumber,city,street,houseNumber",
        ))
        .stdout(predicate::str::contains("Яковлев Роман Ильич"));
}

#[test]
fn list_out_of_range_page_warns() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["list", "--page", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 9 is out of range (1-3)"))
        .stdout(predicate::str::contains("Page 1/3"));
}

#[test]
fn page_size_flag_overrides_config() {
    let fixture = TestFixture::new();
    fs::create_dir_all(fixture.config_path.parent().unwrap()).unwrap();
    fs::write(&fixture.config_path, "page_size = 4\n").unwrap();

    let json = fixture.json(&["list"]);
    assert_eq!(json["content"]["pagination"]["page_size"], 4);

    let json = fixture.json(&["--page-size", "7", "list"]);
    assert_eq!(json["content"]["pagination"]["page_size"], 7);
    assert_eq!(json["content"]["pagination"]["total_pages"], 4);
}

#[test]
fn zero_page_size_is_rejected() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["--page-size", "0", "list"])
        .assert()
        .failure();
}

#[test]
fn show_prints_one_company() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Company #3"))
        .stdout(predicate::str::contains("СтройМонтаж"))
        .stdout(predicate::str::contains("Казань, Баумана 15"));
}

#[test]
fn show_unknown_id_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Company 99 not found"));
}

#[test]
fn seed_file_replaces_sample_data() {
    let fixture = TestFixture::new();
    let seed = fixture.write_seed(
        r#"[
            {
                "id": 5,
                "companyName": "ООО \"Кедр\"",
                "managerName": "Михайлов Андрей",
                "phoneNumber": "+7 (923) 404-50-60",
                "address": { "city": "Томск", "street": "Ленина", "houseNumber": 96 }
            },
            {
                "companyName": "АО \"Арктика\"",
                "managerName": "Захарова Валентина",
                "phoneNumber": "+7 (908) 232-34-45",
                "address": { "city": "Мурманск", "street": "Ленина", "houseNumber": 82 }
            }
        ]"#,
    );

    let json = fixture.json(&["--seed", seed.to_str().unwrap(), "list"]);
    let ids: Vec<u64> = json["content"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 6]);
}

#[test]
fn malformed_seed_file_fails() {
    let fixture = TestFixture::new();
    let seed = fixture.write_seed("not json");
    fixture
        .command()
        .args(["--seed", seed.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load seed file"));
}

#[test]
fn config_init_then_show() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(fixture.config_path.exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let json = fixture.json(&["config", "show"]);
    assert_eq!(json["content"]["page_size"], 10);
    assert_eq!(json["content"]["exists"], true);
}

#[test]
fn invalid_config_is_reported() {
    let fixture = TestFixture::new();
    fs::create_dir_all(fixture.config_path.parent().unwrap()).unwrap();
    fs::write(&fixture.config_path, "page_size = 0\n").unwrap();

    fixture
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
