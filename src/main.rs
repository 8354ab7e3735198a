//src/main.rs

#[tokio::main]
async fn main() {
    ecoleta_backend::start_server().await;
}
