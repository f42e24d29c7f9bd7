use petshop_api::routes::health::{api_welcome, health_check};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(
        serde_json::to_value(response.0).expect("health json"),
        serde_json::json!({ "status": "ok" })
    );
}

#[tokio::test]
async fn api_root_returns_welcome_message() {
    let response = api_welcome().await;
    assert_eq!(response.0.message, "Bem-vindo à API do Petshop PetLovers!");
}
