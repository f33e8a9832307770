// src/lib.rs

use axum::{
    Router, middleware as axum_middleware,
    routing::get,
};

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

// Monta o router completo. Separado do main para os testes de integração
// dirigirem a aplicação com `tower::ServiceExt::oneshot`.
pub fn app(app_state: AppState) -> Router {
    // Rotas públicas: about, registro e login
    let public_routes = Router::new()
        .route("/about", get(handlers::pages::about))
        .route(
            "/register",
            get(handlers::auth::register_page).post(handlers::auth::register),
        )
        .route(
            "/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        );

    // Rotas protegidas pelo guard de sessão
    let protected_routes = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/logout", get(handlers::auth::logout))
        .route("/productos", get(handlers::products::list_products))
        .route(
            "/add_producto",
            get(handlers::products::new_product_page).post(handlers::products::create_product),
        )
        .route(
            "/edit_producto/{id}",
            get(handlers::products::edit_product_page).post(handlers::products::update_product),
        )
        .route("/delete_producto/{id}", get(handlers::products::delete_product))
        .route("/clientes", get(handlers::clients::list_clients))
        .route(
            "/add_cliente",
            get(handlers::clients::new_client_page).post(handlers::clients::create_client),
        )
        .route(
            "/edit_cliente/{id}",
            get(handlers::clients::edit_client_page).post(handlers::clients::update_client),
        )
        .route("/delete_cliente/{id}", get(handlers::clients::delete_client))
        .route("/inventario", get(handlers::inventory::list_inventory))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state)
}
