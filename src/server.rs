use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::GalleryError;
use crate::identity::{
    AvatarShape, AvatarSize, GroupResult, IdentityDescriptor, RenderDecision, Status, compose,
};
use crate::ui::components::IdentityAvatar;
use crate::ui::gallery::{GalleryPage, render_index, render_page};
use crate::ui::render_to_html;

/// Build the gallery router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // HTML pages
        .route("/", get(index_handler))
        .route("/components/{slug}", get(component_handler))
        .route("/fragments/avatar", get(avatar_fragment_handler))
        // JSON API
        .route("/api/avatar/resolve", post(resolve_handler))
        .route("/api/avatar/group", post(group_handler))
        .route("/health", get(health_handler))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let address = config.server.address();
    let state = AppState {
        config: Arc::clone(&config),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %format!("http://{address}"),
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config.gallery))
}

async fn component_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, GalleryError> {
    let page: GalleryPage = slug.parse()?;
    debug!(name: "gallery.page.render", page = %page, "Rendering gallery page");
    Ok(Html(render_page(page, &state.config.gallery)))
}

/// Query parameters of the avatar fragment endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AvatarQuery {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub name: Option<String>,
    pub size: Option<String>,
    pub shape: Option<String>,
    pub status: Option<String>,
    /// Set by clients after the image failed to load.
    #[serde(default)]
    pub image_failed: bool,
}

/// Render a single avatar as an HTML fragment (HTMX swap target).
async fn avatar_fragment_handler(
    Query(query): Query<AvatarQuery>,
) -> Result<Html<String>, GalleryError> {
    let size = query
        .size
        .as_deref()
        .map(str::parse::<AvatarSize>)
        .transpose()?
        .unwrap_or_default();
    let shape = query
        .shape
        .as_deref()
        .map(str::parse::<AvatarShape>)
        .transpose()?
        .unwrap_or_default();
    let status = query
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?;

    let mut descriptor = IdentityDescriptor::new();
    descriptor.image = query.src;
    descriptor.alt = query.alt;
    descriptor.name = query.name;
    descriptor.status = status;
    if query.image_failed {
        descriptor.mark_image_failed();
    }

    let html = render_to_html(move || {
        view! { <IdentityAvatar descriptor=descriptor size=size shape=shape /> }
    });
    Ok(Html(html))
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON API Handlers
// ─────────────────────────────────────────────────────────────────────────────

async fn resolve_handler(Json(descriptor): Json<IdentityDescriptor>) -> Response {
    let decision = descriptor.resolve();
    debug!(name: "avatar.resolved", kind = decision.kind(), "Avatar resolved");
    Json(decision).into_response()
}

/// Body of `POST /api/avatar/group`.
#[derive(Debug, Deserialize)]
pub struct GroupRequest {
    pub items: Vec<IdentityDescriptor>,
    /// Visible cap; the configured gallery default when omitted. Zero or
    /// negative caps hide every member behind the placeholder.
    pub max: Option<i64>,
}

#[derive(Serialize)]
struct GroupResponse<'a> {
    #[serde(flatten)]
    group: &'a GroupResult<'a>,
    /// Resolution of every displayed member, placeholder last.
    decisions: Vec<RenderDecision<'a>>,
}

async fn group_handler(
    State(state): State<AppState>,
    Json(request): Json<GroupRequest>,
) -> Response {
    let max = request.max.map_or(state.config.gallery.group_max, |max| {
        usize::try_from(max).unwrap_or(0)
    });
    let group = compose(&request.items, max);
    let decisions = group.members().map(IdentityDescriptor::resolve).collect();

    info!(
        name: "avatar.group.composed",
        items = request.items.len(),
        max,
        overflow = group.overflow_count,
        "Avatar group composed"
    );

    Json(GroupResponse {
        group: &group,
        decisions,
    })
    .into_response()
}

async fn health_handler() -> &'static str {
    "ok"
}
