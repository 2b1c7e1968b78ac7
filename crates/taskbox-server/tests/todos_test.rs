//! Todo CRUD behavior for a single owner

mod common;

use common::{bearer, create_todo, signup_and_login, test_app};
use rocket::http::ContentType;
use serde_json::json;

#[test]
fn test_create_defaults_done_to_false() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");

    let response = app
        .client
        .post("/todos")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({ "title": "Buy milk" }).to_string())
        .dispatch();

    assert_eq!(response.status().code, 200);
    let body: serde_json::Value = response.into_json().unwrap();
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["done"], false);
    assert_eq!(body["description"], serde_json::Value::Null);
}

#[test]
fn test_list_is_newest_first() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");

    create_todo(&app.client, &token, json!({ "title": "first" }));
    std::thread::sleep(std::time::Duration::from_millis(5));
    create_todo(&app.client, &token, json!({ "title": "second" }));

    let response = app
        .client
        .get("/todos")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status().code, 200);

    let body: serde_json::Value = response.into_json().unwrap();
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[test]
fn test_get_by_id() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");
    let id = create_todo(&app.client, &token, json!({ "title": "Buy milk" }));

    let response = app
        .client
        .get(format!("/todos/{}", id))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status().code, 200);

    let missing = app
        .client
        .get("/todos/999")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(missing.status().code, 404);
    let body: serde_json::Value = missing.into_json().unwrap();
    assert_eq!(body["message"], "Todo not found");
}

#[test]
fn test_put_overwrites_every_mutable_field() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");
    let id = create_todo(
        &app.client,
        &token,
        json!({
            "title": "Buy milk",
            "description": "2 liters",
            "done": true,
            "priority": "high",
            "tags": "errands",
        }),
    );

    // Replace with a payload that only carries the title: every optional
    // field resets, done falls back to false.
    let response = app
        .client
        .put(format!("/todos/{}", id))
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({ "title": "Buy oat milk" }).to_string())
        .dispatch();

    assert_eq!(response.status().code, 200);
    let body: serde_json::Value = response.into_json().unwrap();
    assert_eq!(body["title"], "Buy oat milk");
    assert_eq!(body["description"], serde_json::Value::Null);
    assert_eq!(body["done"], false);
    assert_eq!(body["priority"], serde_json::Value::Null);
    assert_eq!(body["tags"], serde_json::Value::Null);
}

#[test]
fn test_patch_leaves_omitted_fields_alone() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");
    let id = create_todo(
        &app.client,
        &token,
        json!({
            "title": "Buy milk",
            "description": "2 liters",
            "priority": "high",
        }),
    );

    let response = app
        .client
        .patch(format!("/todos/{}", id))
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({ "done": true }).to_string())
        .dispatch();

    assert_eq!(response.status().code, 200);
    let body: serde_json::Value = response.into_json().unwrap();
    assert_eq!(body["done"], true);
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], "2 liters");
    assert_eq!(body["priority"], "high");
}

#[test]
fn test_patch_treats_explicit_null_as_no_change() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");
    let id = create_todo(
        &app.client,
        &token,
        json!({ "title": "Buy milk", "description": "2 liters" }),
    );

    let response = app
        .client
        .patch(format!("/todos/{}", id))
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({ "description": null, "done": true }).to_string())
        .dispatch();

    assert_eq!(response.status().code, 200);
    let body: serde_json::Value = response.into_json().unwrap();
    // null does not clear the field
    assert_eq!(body["description"], "2 liters");
    assert_eq!(body["done"], true);
}

#[test]
fn test_delete_then_delete_again() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");
    let id = create_todo(&app.client, &token, json!({ "title": "Buy milk" }));

    let response = app
        .client
        .delete(format!("/todos/{}", id))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status().code, 200);
    let body: serde_json::Value = response.into_json().unwrap();
    assert_eq!(body["success"], true);

    let again = app
        .client
        .delete(format!("/todos/{}", id))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(again.status().code, 404);
}

#[test]
fn test_title_bounds_are_enforced() {
    let app = test_app();
    let token = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");

    let empty_title = app
        .client
        .post("/todos")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({ "title": "" }).to_string())
        .dispatch();
    assert_eq!(empty_title.status().code, 422);

    let oversized_priority = app
        .client
        .post("/todos")
        .header(ContentType::JSON)
        .header(bearer(&token))
        .body(json!({ "title": "ok", "priority": "beyond-ten-chars" }).to_string())
        .dispatch();
    assert_eq!(oversized_priority.status().code, 422);
}
