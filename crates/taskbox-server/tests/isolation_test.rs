//! Cross-user isolation
//!
//! A todo owned by someone else must be indistinguishable from a missing
//! one: 404 on every verb, never 403, and never any of the owner's data.

mod common;

use common::{bearer, create_todo, signup_and_login, test_app};
use rocket::http::ContentType;
use serde_json::json;

#[test]
fn test_foreign_todo_is_invisible_on_every_verb() {
    let app = test_app();
    let ann = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");
    let bob = signup_and_login(&app.client, "Bob", "b@x.com", "secret2");

    let id = create_todo(
        &app.client,
        &ann,
        json!({ "title": "Ann's secret plan", "description": "classified" }),
    );

    let get = app
        .client
        .get(format!("/todos/{}", id))
        .header(bearer(&bob))
        .dispatch();
    assert_eq!(get.status().code, 404);
    let body = get.into_string().unwrap();
    assert!(!body.contains("secret plan"));
    assert!(!body.contains("classified"));

    let put = app
        .client
        .put(format!("/todos/{}", id))
        .header(ContentType::JSON)
        .header(bearer(&bob))
        .body(json!({ "title": "hijacked" }).to_string())
        .dispatch();
    assert_eq!(put.status().code, 404);

    let patch = app
        .client
        .patch(format!("/todos/{}", id))
        .header(ContentType::JSON)
        .header(bearer(&bob))
        .body(json!({ "done": true }).to_string())
        .dispatch();
    assert_eq!(patch.status().code, 404);

    let delete = app
        .client
        .delete(format!("/todos/{}", id))
        .header(bearer(&bob))
        .dispatch();
    assert_eq!(delete.status().code, 404);

    // Ann's todo is untouched by all of the above
    let get = app
        .client
        .get(format!("/todos/{}", id))
        .header(bearer(&ann))
        .dispatch();
    assert_eq!(get.status().code, 200);
    let todo: serde_json::Value = get.into_json().unwrap();
    assert_eq!(todo["title"], "Ann's secret plan");
    assert_eq!(todo["done"], false);
}

#[test]
fn test_lists_are_disjoint() {
    let app = test_app();
    let ann = signup_and_login(&app.client, "Ann", "a@x.com", "secret1");
    let bob = signup_and_login(&app.client, "Bob", "b@x.com", "secret2");

    create_todo(&app.client, &ann, json!({ "title": "Ann's todo" }));

    let response = app.client.get("/todos").header(bearer(&bob)).dispatch();
    assert_eq!(response.status().code, 200);
    let body: serde_json::Value = response.into_json().unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);

    let response = app.client.get("/todos").header(bearer(&ann)).dispatch();
    let body: serde_json::Value = response.into_json().unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}
