// tests/auth_flow.rs
//
// Testes de integração dirigindo o router com `tower::ServiceExt::oneshot`.
// O estado aponta para uma porta fechada: o guard e o gateway de conexão são
// exercitados de verdade, e o caminho "banco fora do ar" degrada para aviso
// em vez de erro 500.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use guti_net::{
    app,
    config::{AppState, Config},
};

fn test_state() -> AppState {
    let config = Config {
        mysql_host: "127.0.0.1".into(),
        mysql_user: "tester".into(),
        mysql_password: String::new(),
        mysql_database: "guti_net_test".into(),
        // Porta fechada: conexão recusada na hora, sem esperar timeout.
        mysql_port: 1,
        secret_key: "segredo-de-teste".into(),
    };
    AppState::with_config(&config).expect("estado de teste")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_session(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, format!("session={}", token))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn about_is_public() {
    let response = app(test_state()).oneshot(get("/about")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_and_register_pages_are_public() {
    for uri in ["/login", "/register"] {
        let response = app(test_state()).oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{} deveria ser pública", uri);
    }
}

#[tokio::test]
async fn protected_route_redirects_anonymous_to_login() {
    for uri in ["/", "/productos", "/clientes", "/inventario", "/add_cliente"] {
        let response = app(test_state()).oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{} deveria redirecionar", uri);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

        // O aviso one-shot acompanha o redirect.
        let cookies: Vec<_> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_owned())
            .collect();
        assert!(
            cookies.iter().any(|c| c.starts_with("flash=")),
            "faltou o cookie flash em {}: {:?}",
            uri,
            cookies
        );
    }
}

#[tokio::test]
async fn tampered_session_cookie_is_rejected_and_discarded() {
    let response = app(test_state())
        .oneshot(get_with_session("/productos", "nem-de-longe-um-token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

    // O token morto é removido junto com o redirect, senão o browser
    // continuaria reenviando o cookie inválido a cada requisição.
    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert!(
        cookies.iter().any(|c| c.starts_with("session=") && c.contains("Max-Age=0")),
        "faltou a remoção do cookie de sessão inválido: {:?}",
        cookies
    );
}

#[tokio::test]
async fn anonymous_redirect_does_not_touch_session_cookie() {
    let response = app(test_state()).oneshot(get("/productos")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // Sem cookie de sessão na requisição, nada de sessão no response.
    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert!(!cookies.iter().any(|c| c.starts_with("session=")), "{:?}", cookies);
}

#[tokio::test]
async fn valid_session_reaches_listing_and_db_outage_degrades_to_notice() {
    let state = test_state();
    let token = state.auth_service.create_session_token(1, "alice").unwrap();

    let response = app(state)
        .oneshot(get_with_session("/productos", &token))
        .await
        .unwrap();

    // Sem redirect: a sessão admitiu a requisição. O banco inacessível
    // rende listagem vazia com aviso, nunca um 500.
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_json(response).await;
    assert_eq!(page["productos"], serde_json::json!([]));
    assert_eq!(page["page"], 1);
    assert_eq!(page["total_pages"], 1);
    assert_eq!(page["flash"]["categoria"], "danger");
}

#[tokio::test]
async fn page_parameter_is_clamped_to_one() {
    let state = test_state();
    let token = state.auth_service.create_session_token(1, "alice").unwrap();

    // Zero, negativo e não numérico coagem para a página 1, sem 400.
    for uri in ["/clientes?page=-3", "/clientes?page=0", "/clientes?page=abc"] {
        let response = app(state.clone())
            .oneshot(get_with_session(uri, &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        let page = body_json(response).await;
        assert_eq!(page["page"], 1, "{}", uri);
    }
}

#[tokio::test]
async fn logout_clears_session_and_redirects_to_login() {
    let state = test_state();
    let token = state.auth_service.create_session_token(1, "alice").unwrap();

    let response = app(state)
        .oneshot(get_with_session("/logout", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");

    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert!(
        cookies.iter().any(|c| c.starts_with("session=") && c.contains("Max-Age=0")),
        "faltou a remoção do cookie de sessão: {:?}",
        cookies
    );
}

#[tokio::test]
async fn login_with_db_down_reports_connection_failure() {
    let response = app(test_state())
        .oneshot(
            Request::builder()
                .uri("/login")
                .method("POST")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=alice&password=pw123"))
                .unwrap(),
        )
        .await
        .unwrap();

    // Sem banco não há como verificar credenciais: página re-renderizada
    // com aviso, sessão continua anônima (nenhum cookie de sessão).
    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert!(!cookies.iter().any(|c| c.starts_with("session=")));
}
