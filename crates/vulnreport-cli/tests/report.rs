use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::str::contains;

fn base_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vulnreport-cli").unwrap();
    cmd.env_remove("VULNREPORT_ACCESS_KEY")
        .env_remove("VULNREPORT_SECRET_KEY")
        .env_remove("VULNREPORT_ENDPOINT")
        .env_remove("VULNREPORT_TIMEOUT_SECS");
    cmd
}

#[test]
fn fails_without_credentials() {
    base_cmd()
        .assert()
        .failure()
        .stderr(contains("VULNREPORT_ACCESS_KEY"));
}

#[test]
fn help_describes_the_tool() {
    base_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("severity pie charts"));
}

#[test]
#[ignore = "requires loopback networking"]
fn reports_each_scan_and_skips_empty_charts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/scans");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"scans":[{"id":1,"name":"weekly"},{"id":2,"name":"quiet"}]}"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/scans/1");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"vulnerabilities":[
                    {"severity":5,"count":3,"plugin_family":"Web Servers"},
                    {"severity":2,"count":7,"plugin_family":"General"}
                ]}"#,
            );
    });
    server.mock(|when, then| {
        when.method(GET).path("/scans/2");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"vulnerabilities":[{"severity":0,"count":100}]}"#);
    });

    let workdir = tempfile::tempdir().unwrap();
    base_cmd()
        .env("VULNREPORT_ACCESS_KEY", "ak")
        .env("VULNREPORT_SECRET_KEY", "sk")
        .env("VULNREPORT_ENDPOINT", server.base_url())
        .current_dir(workdir.path())
        .assert()
        .success()
        .stdout(contains("#1: \"weekly\""))
        .stdout(contains("Top 5 by plugin family"))
        .stdout(contains("1. General: 7 vulnerabilities"))
        .stdout(contains("Medium: 3"))
        .stdout(contains("#2: \"quiet\""))
        .stdout(contains("Not enough data to generate a chart."));

    // Scan 2 has only severity-0 records, so no image may exist for it.
    assert!(!workdir.path().join("2_categorized.png").exists());
}
