use assert_cmd::Command;
use httpmock::MockServer;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;

fn scorta_cli(server: &MockServer) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scorta-cli"));
    cmd.env("SCORTA_ENDPOINT", server.base_url());
    cmd
}

fn seeded_get(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method("GET").path("/collection");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {"id": "1", "name": "Caneta", "category": "Papelaria", "quantity": 10, "price": 1.5},
                {"id": "2", "name": "Caderno", "category": "Papelaria", "quantity": 3, "price": 12.9}
            ]));
    })
}

#[test]
fn list_renders_the_remote_collection() {
    let server = MockServer::start();
    let get = seeded_get(&server);

    scorta_cli(&server)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Caneta").and(contains("12.90")));

    get.assert();
}

#[test]
fn add_replaces_the_remote_collection() {
    let server = MockServer::start();
    let get = seeded_get(&server);
    let put = server.mock(|when, then| {
        when.method("PUT")
            .path("/collection")
            .header("content-type", "application/json");
        then.status(200).body("Collection updated successfully");
    });

    scorta_cli(&server)
        .args([
            "add",
            "--name",
            "Borracha",
            "--category",
            "Papelaria",
            "--quantity",
            "20",
            "--price",
            "0.75",
        ])
        .assert()
        .success()
        .stdout(contains("Borracha").and(contains("Product added with id")));

    get.assert();
    put.assert();
}

#[test]
fn add_rejects_zero_quantity_before_any_request() {
    let server = MockServer::start();
    let get = seeded_get(&server);

    scorta_cli(&server)
        .args([
            "add",
            "--name",
            "Borracha",
            "--category",
            "Papelaria",
            "--quantity",
            "0",
            "--price",
            "0.75",
        ])
        .assert()
        .failure()
        .stderr(contains("Validation"));

    get.assert();
}

#[test]
fn update_patches_one_field() {
    let server = MockServer::start();
    seeded_get(&server);
    let put = server.mock(|when, then| {
        when.method("PUT")
            .path("/collection")
            .json_body(json!([
                {"id": "1", "name": "Caneta Azul", "category": "Papelaria", "quantity": 10, "price": 1.5},
                {"id": "2", "name": "Caderno", "category": "Papelaria", "quantity": 3, "price": 12.9}
            ]));
        then.status(200).body("Collection updated successfully");
    });

    scorta_cli(&server)
        .args(["update", "1", "--name", "Caneta Azul"])
        .assert()
        .success()
        .stdout(contains("Product 1 updated"));

    put.assert();
}

#[test]
fn remove_missing_id_fails_with_not_found() {
    let server = MockServer::start();
    seeded_get(&server);

    scorta_cli(&server)
        .args(["remove", "ghost"])
        .assert()
        .failure()
        .stderr(contains("NotFound"));
}

#[test]
fn find_reports_an_empty_result_as_a_notice() {
    let server = MockServer::start();
    seeded_get(&server);

    scorta_cli(&server)
        .args(["find", "parafuso"])
        .assert()
        .success()
        .stdout(contains("No products matched"));
}

#[test]
fn find_matches_name_substring_case_insensitively() {
    let server = MockServer::start();
    seeded_get(&server);

    scorta_cli(&server)
        .args(["find", "cad"])
        .assert()
        .success()
        .stdout(contains("Caderno").and(contains("Caneta").not()));
}
