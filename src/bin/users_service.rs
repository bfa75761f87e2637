use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use connectec_backend::config::Config;
use connectec_backend::{db, errors, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env("USERS_BIND_ADDR", "127.0.0.1:8080");
    let pool = db::create_pool(&config).expect("Invalid database configuration");
    db::probe_connection(&pool).await;

    info!("Starting users service at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
            .service(
                web::resource("/users")
                    .route(web::get().to(handlers::user::get_users))
                    .route(web::post().to(handlers::user::add_user)),
            )
            .service(
                web::resource("/users/{uid}")
                    .route(web::put().to(handlers::user::update_user))
                    .route(web::delete().to(handlers::user::delete_user)),
            )
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
