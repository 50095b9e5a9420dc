use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored game as returned by every read and write.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct GameDoc {
    pub id: i32,
    pub name: String,
    pub platform: String,
    pub genre: String,
    /// Two-decimal amount serialized as a string, e.g. `"199.90"`
    #[schema(example = "199.90")]
    pub price_paid: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateGameInputDoc {
    pub name: String,
    pub platform: String,
    pub genre: String,
    #[schema(example = 199.9)]
    pub price_paid: f64,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateGameInputDoc {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub price_paid: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::games::list,
        crate::routes::games::create,
        crate::routes::games::get,
        crate::routes::games::by_platform,
        crate::routes::games::by_genre,
        crate::routes::games::update,
        crate::routes::games::delete,
    ),
    components(
        schemas(
            HealthResponse,
            GameDoc,
            CreateGameInputDoc,
            UpdateGameInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "games")
    )
)]
pub struct ApiDoc;
