use actix_web::{App, HttpServer, web};
use anyhow::Result;
use clap::Parser;
use countryinfo_rs::{Client, http};
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(
    name = "countryinfo",
    version,
    about = "REST facade over the restcountries.com country API"
)]
struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
    /// Override the upstream restcountries base URL (e.g. a local mirror).
    #[arg(long)]
    base_url: Option<String>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut client = Client::default();
    if let Some(base_url) = cli.base_url {
        client.base_url = base_url;
    }
    let client = web::Data::new(client);

    log::info!("listening on {}", cli.bind);
    HttpServer::new(move || App::new().app_data(client.clone()).configure(http::configure))
        .bind(&cli.bind)?
        .run()
        .await?;
    Ok(())
}
