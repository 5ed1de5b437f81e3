#[cfg(feature = "data")]
pub mod codec;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::codec::QueryCodec;
    use crate::models::config::ServerConfig;
    use crate::repository::{InMemoryCatalog, SharedProductReader};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let filters = Arc::new(server_config.filters.clone());

        // Products are read once at startup and served from memory.
        let products =
            InMemoryCatalog::from_json_file(&server_config.catalog_path, filters.clone())
                .map_err(|e| std::io::Error::other(format!("Failed to load products: {e}")))?;
        log::info!(
            "Loaded {} products from {}",
            products.len(),
            server_config.catalog_path
        );

        let products: Arc<SharedProductReader> = Arc::new(products);
        let products = web::Data::from(products);
        let codec = web::Data::new(QueryCodec::new(filters));
        let settings = server_config.listing_settings();
        let listing_path = settings.path.clone();
        let settings = web::Data::new(settings);
        let rating = web::Data::new(server_config.rating);

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .configure(|cfg| crate::routes::listing::configure(cfg, &listing_path))
                .app_data(products.clone())
                .app_data(codec.clone())
                .app_data(settings.clone())
                .app_data(rating.clone())
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
