use clinirisk::domain::Heart;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    clinirisk::server::run::<Heart>().await
}
