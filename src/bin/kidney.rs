use clinirisk::domain::Kidney;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    clinirisk::server::run::<Kidney>().await
}
