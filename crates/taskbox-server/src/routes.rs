//! Route and catcher registration

use rocket::{catchers, routes, Build, Rocket};

use crate::error;
use crate::handlers::{accounts, health, todos};
use crate::state::ApiState;

/// Build the rocket instance with all routes, catchers, and managed state
///
/// Listener configuration is layered on by the caller (see
/// [`crate::init::run`]); tests mount this directly against a local
/// client.
pub fn rocket(state: ApiState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/",
            routes![
                accounts::signup,
                accounts::login,
                todos::create_todo,
                todos::list_todos,
                todos::get_todo,
                todos::replace_todo,
                todos::update_todo,
                todos::delete_todo,
                health::health,
            ],
        )
        .register(
            "/",
            catchers![
                error::unauthorized,
                error::not_found,
                error::unprocessable,
                error::internal_error,
            ],
        )
}
