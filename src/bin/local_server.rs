use radha_travels::{logerr, logln, util::settings::Settings, web, App};
use rocket::{Build, Rocket};

const CC: &str = "Server";

// Hosting platforms hand the port over in $PORT.
fn figment() -> rocket::figment::Figment {
    let figment = rocket::Config::figment();

    match std::env::var("PORT").ok().and_then(|port| port.parse::<u16>().ok()) {
        Some(port) => figment.merge(("port", port)),
        None => figment,
    }
}

#[rocket::launch]
async fn rocket() -> Rocket<Build> {
    let app = match Settings::load() {
        Ok(settings) => App::new(settings).await,
        Err(e) => Err(e),
    };

    match app {
        Ok(app) => {
            logln!(target: CC, "Rates loaded, starting API");
            web::stage(rocket::custom(figment()), app)
        }
        Err(e) => {
            logerr!(target: CC, "Refusing to start: {}", e);
            std::process::exit(1);
        }
    }
}
