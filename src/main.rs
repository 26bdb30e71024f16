#[tokio::main]
async fn main() {
    totem_votos::start_server().await;
}
