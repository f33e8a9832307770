// src/main.rs

use tokio::net::TcpListener;

use guti_net::{app, config::AppState};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve
    // iniciar. O banco indisponível NÃO falha aqui (pool lazy); isso vira
    // aviso por requisição.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let router = app(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:5000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, router)
        .await
        .expect("Erro no servidor Axum");
}
