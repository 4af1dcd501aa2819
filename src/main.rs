use dotenv::dotenv;
use viac_rs::{
    config::Config,
    session::{login::Login, Credentials},
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    env_logger::init();
    dotenv().ok();

    let credentials = Credentials::from_env()?;
    let session = Login::new(credentials, Config::default())?.login().await?;
    log::debug!("session cookies: {:?}", session.cookie_names());

    let summary = session.wealth_summary().await?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
