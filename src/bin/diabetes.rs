use clinirisk::domain::Diabetes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    clinirisk::server::run::<Diabetes>().await
}
