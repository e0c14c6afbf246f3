#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Root message", body = String)
    )
)]
pub async fn root() -> &'static str {
    "Face Search Backend is running!"
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is up", body = String),
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}
