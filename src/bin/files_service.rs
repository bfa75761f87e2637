use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use connectec_backend::config::Config;
use connectec_backend::{db, errors, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env("FILES_BIND_ADDR", "127.0.0.1:8081");
    let pool = db::create_pool(&config).expect("Invalid database configuration");
    db::probe_connection(&pool).await;

    info!("Starting files service at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
            .service(
                web::resource("/files")
                    .route(web::get().to(handlers::file::get_files))
                    .route(web::post().to(handlers::file::add_file)),
            )
            .service(
                web::resource("/files/{id}")
                    .route(web::get().to(handlers::file::get_file))
                    .route(web::put().to(handlers::file::update_file))
                    .route(web::delete().to(handlers::file::delete_file)),
            )
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
