use rocket::{
    catch, catchers, fs::FileServer, http::Status, routes, serde::json::Json, Build, Request,
    Rocket,
};

use crate::{logln, App};

pub mod cors;
pub mod responses;
pub mod routes;

use responses::ErrorBody;

const CC: &str = "Web";

#[catch(default)]
fn default_catcher(status: Status, _request: &Request) -> (Status, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: status.reason().unwrap_or("Unknown error").to_string(),
        }),
    )
}

/// Mounts the site API, gallery images and CORS handling onto `rocket`.
pub fn stage(rocket: Rocket<Build>, app: App) -> Rocket<Build> {
    let images_dir = app.settings().images_dir();

    let rocket = rocket
        .attach(cors::Cors)
        .mount(
            "/",
            routes![
                routes::health,
                routes::gallery,
                routes::reviews,
                routes::add_review,
                routes::review_summary,
                routes::rates,
                routes::fleet,
                routes::estimate,
                routes::book,
                cors::all_options
            ],
        )
        .register("/", catchers![default_catcher])
        .manage(app);

    if images_dir.is_dir() {
        logln!(target: CC, "Serving images from {}", images_dir.display());
        rocket.mount("/images", FileServer::from(images_dir))
    } else {
        logln!(target: CC, "No images folder at {}", images_dir.display());
        rocket
    }
}
