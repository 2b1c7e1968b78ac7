//! Shared test fixtures
//!
//! In-memory repository doubles and a local Rocket client wired exactly
//! like production, minus the database pool.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rocket::http::{ContentType, Header};
use rocket::local::blocking::{Client, LocalResponse};

use taskbox_domain::error::{Error, Result};
use taskbox_domain::{Todo, TodoDraft, TodoPatch, TodoRepository, User, UserRepository};
use taskbox_infrastructure::{PasswordService, TokenService};
use taskbox_server::{routes, ApiState};

pub const TEST_SECRET: &str = "test-secret";

/// Credential store double; enforces email uniqueness under its lock
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Drop a user, simulating account deletion out-of-band
    pub fn remove(&self, id: i64) {
        self.users.lock().unwrap().retain(|user| user.id != id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.email == email) {
            return Err(Error::DuplicateEmail);
        }
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}

/// Todo store double; owner-scoped the same way the SQL adapter is
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
    next_id: AtomicI64,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            todos: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, owner_id: i64, draft: TodoDraft) -> Result<Todo> {
        let mut todos = self.todos.lock().unwrap();
        let now = Utc::now();
        let todo = Todo {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title,
            description: draft.description,
            done: draft.done,
            reminder_at: draft.reminder_at,
            priority: draft.priority,
            due_date: draft.due_date,
            tags: draft.tags,
            owner_id,
            created_at: now,
            updated_at: now,
        };
        todos.push(todo.clone());
        Ok(todo)
    }

    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Todo>> {
        let todos = self.todos.lock().unwrap();
        let mut owned: Vec<Todo> = todos
            .iter()
            .filter(|todo| todo.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn find(&self, owner_id: i64, todo_id: i64) -> Result<Option<Todo>> {
        let todos = self.todos.lock().unwrap();
        Ok(todos
            .iter()
            .find(|todo| todo.id == todo_id && todo.owner_id == owner_id)
            .cloned())
    }

    async fn replace(&self, owner_id: i64, todo_id: i64, draft: TodoDraft) -> Result<Option<Todo>> {
        let mut todos = self.todos.lock().unwrap();
        match todos
            .iter_mut()
            .find(|todo| todo.id == todo_id && todo.owner_id == owner_id)
        {
            Some(todo) => {
                todo.title = draft.title;
                todo.description = draft.description;
                todo.done = draft.done;
                todo.reminder_at = draft.reminder_at;
                todo.priority = draft.priority;
                todo.due_date = draft.due_date;
                todo.tags = draft.tags;
                todo.updated_at = Utc::now();
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn patch(&self, owner_id: i64, todo_id: i64, patch: TodoPatch) -> Result<Option<Todo>> {
        let mut todos = self.todos.lock().unwrap();
        match todos
            .iter_mut()
            .find(|todo| todo.id == todo_id && todo.owner_id == owner_id)
        {
            Some(todo) => {
                patch.apply_to(todo);
                todo.updated_at = Utc::now();
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, owner_id: i64, todo_id: i64) -> Result<bool> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|todo| !(todo.id == todo_id && todo.owner_id == owner_id));
        Ok(todos.len() < before)
    }
}

/// A wired test application
pub struct TestApp {
    pub client: Client,
    pub users: Arc<InMemoryUserRepository>,
}

/// Build a client over in-memory stores
pub fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::new());
    let todos = Arc::new(InMemoryTodoRepository::new());
    let state = ApiState {
        users: users.clone(),
        todos,
        tokens: TokenService::new(TEST_SECRET),
        passwords: PasswordService::new(),
        pool: None,
    };
    let client = Client::tracked(routes::rocket(state)).expect("valid rocket instance");
    TestApp { client, users }
}

/// POST /signup with the given fields
pub fn signup<'c>(
    client: &'c Client,
    name: &str,
    email: &str,
    password: &str,
) -> LocalResponse<'c> {
    client
        .post("/signup")
        .header(ContentType::JSON)
        .body(
            serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            })
            .to_string(),
        )
        .dispatch()
}

/// Sign up and log in, returning the bearer token
pub fn signup_and_login(client: &Client, name: &str, email: &str, password: &str) -> String {
    let response = signup(client, name, email, password);
    assert_eq!(response.status().code, 200, "signup should succeed");
    login_token(client, email, password)
}

/// POST /login and extract the token
pub fn login_token(client: &Client, email: &str, password: &str) -> String {
    let response = client
        .post("/login")
        .header(ContentType::JSON)
        .body(
            serde_json::json!({
                "email": email,
                "password": password,
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(response.status().code, 200, "login should succeed");
    let body: serde_json::Value = response.into_json().expect("json body");
    body["token"].as_str().expect("token field").to_string()
}

/// Authorization header for a bearer token
pub fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {}", token))
}

/// Create a todo and return its id
pub fn create_todo(client: &Client, token: &str, body: serde_json::Value) -> i64 {
    let response = client
        .post("/todos")
        .header(ContentType::JSON)
        .header(bearer(token))
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status().code, 200, "todo creation should succeed");
    let body: serde_json::Value = response.into_json().expect("json body");
    body["id"].as_i64().expect("id field")
}
