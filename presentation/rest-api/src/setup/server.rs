use poem::{
    EndpointExt, Route, Server as PoemServer, endpoint::StaticFilesEndpoint,
    listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.tag_api,
                container.ingredient_api,
                container.recipe_api,
                container.favorite_api,
                container.shopping_cart_api,
                container.user_api,
                container.subscription_api,
            ),
            "Recipes API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(config.server.public_url.clone());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let media = StaticFilesEndpoint::new(&config.media.root);

        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/media", media)
            .data(config.auth)
            .with(config.cors)
            .with(Tracing);

        tracing::info!(
            address = %addr,
            public_url = %config.server.public_url,
            media_root = %config.media.root.display(),
            "Server listening"
        );
        tracing::info!("Swagger UI at {}/docs", config.server.public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
