use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_offers(dir: &Path) {
    fs::write(
        dir.join("offers.json"),
        r#"[
            {"id":"o1","title":"Tilbud Alfa","customerName":"Berg Eiendom AS","phase":"sent","status":"active","companyId":"bygg","value":100000.0,"probability":40,"updatedAt":"2024-01-01T00:00:00Z"},
            {"id":"o2","title":"Tilbud Utkast","phase":"draft","status":"active","companyId":"bygg","value":999000.0},
            {"id":"o3","title":"Tilbud Bravo","customerName":"Fjord Bygg AS","phase":"sent","status":"active","companyId":"bygg","value":50000.0,"probability":70,"updatedAt":"2024-02-01T00:00:00Z"},
            {"id":"o4","title":"Tilbud Charlie","phase":"won","status":"active","companyId":"anlegg","value":2000000.0,"probability":100,"updatedAt":"2023-12-01T00:00:00Z"},
            {"id":"o5","title":"Tilbud Arkivert","phase":"sent","status":"archived","companyId":"bygg","value":700000.0,"updatedAt":"2024-03-01T00:00:00Z"}
        ]"#,
    )
    .unwrap();
}

fn write_activities(dir: &Path) {
    fs::write(
        dir.join("activities.json"),
        r#"[
            {"title":"Helse oppdatert","body":"Helse endret fra 'on_track' til 'at_risk'","createdAt":"2024-03-01T08:00:00Z","userName":"Kari"},
            {"title":"Fakturering","body":"Fakturert endret fra 980000.00 til 12000000.00"},
            {"title":"Faseendring","body":"Tilbud oppdatert (fase: sent -> won) av Ola"},
            {"title":"Kommentar","body":"Befaring gjennomført med kunde"}
        ]"#,
    )
    .unwrap();
}

fn tavle(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tavle").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

fn ordered(first: &'static str, second: &'static str) -> impl Predicate<str> {
    predicate::function(move |out: &str| {
        match (out.find(first), out.find(second)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    })
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("tavle").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tavle"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("tavle").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("offer"))
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("activity"));
}

#[test]
fn test_offer_list_default_order_and_exclusions() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());

    tavle(temp_dir.path())
        .args(["offer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilbud Utkast").not())
        .stdout(predicate::str::contains("Tilbud Arkivert").not())
        .stdout(ordered("Tilbud Bravo", "Tilbud Alfa"))
        .stdout(ordered("Tilbud Alfa", "Tilbud Charlie"));
}

#[test]
fn test_offer_list_phase_filter() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());

    tavle(temp_dir.path())
        .args(["offer", "list", "--phase", "won"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilbud Charlie"))
        .stdout(predicate::str::contains("Tilbud Alfa").not());
}

#[test]
fn test_offer_list_sort_by_value_desc() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());

    tavle(temp_dir.path())
        .args(["offer", "list", "--sort", "value", "--direction", "desc"])
        .assert()
        .success()
        .stdout(ordered("Tilbud Charlie", "Tilbud Alfa"))
        .stdout(ordered("Tilbud Alfa", "Tilbud Bravo"));
}

#[test]
fn test_offer_list_unknown_phase_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());

    tavle(temp_dir.path())
        .args(["offer", "list", "--phase", "pending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown phase"));
}

#[test]
fn test_offer_list_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());

    tavle(temp_dir.path())
        .args(["--format", "json", "offer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"companyId\": \"bygg\""))
        .stdout(predicate::str::contains("\"phase\": \"sent\""));
}

#[test]
fn test_offer_list_csv_output() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());

    tavle(temp_dir.path())
        .args(["--format", "csv", "offer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,title,customerName,phase,companyId",
        ))
        .stdout(predicate::str::contains("o3,Tilbud Bravo"));
}

#[test]
fn test_offer_list_missing_export_fails() {
    let temp_dir = TempDir::new().unwrap();

    tavle(temp_dir.path())
        .args(["offer", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no export found"));
}

#[test]
fn test_offer_summary_aggregates() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());

    tavle(temp_dir.path())
        .args(["offer", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 tilbud"))
        .stdout(predicate::str::contains("kr 2 150 000"));
}

#[test]
fn test_default_company_from_config() {
    let temp_dir = TempDir::new().unwrap();
    write_offers(temp_dir.path());
    fs::write(
        temp_dir.path().join("config.toml"),
        "default_company = \"anlegg\"\n",
    )
    .unwrap();

    tavle(temp_dir.path())
        .args(["offer", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilbud Charlie"))
        .stdout(predicate::str::contains("Tilbud Alfa").not());
}

#[test]
fn test_activity_feed_badges() {
    let temp_dir = TempDir::new().unwrap();
    write_activities(temp_dir.path());

    tavle(temp_dir.path())
        .args(["activity", "feed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[I rute] til [Risiko]"))
        .stdout(predicate::str::contains("[kr 980 000] til [kr 12 000 000]"))
        .stdout(predicate::str::contains("[Sendt] → [Vunnet]"))
        .stdout(predicate::str::contains("av Ola").not())
        .stdout(predicate::str::contains("Befaring gjennomført med kunde"));
}

#[test]
fn test_activity_feed_json_segments() {
    let temp_dir = TempDir::new().unwrap();
    write_activities(temp_dir.path());

    tavle(temp_dir.path())
        .args(["--format", "json", "activity", "feed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"health\""))
        .stdout(predicate::str::contains("\"kind\": \"currency\""));
}
