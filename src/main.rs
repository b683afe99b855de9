use okr::commands::Cli;
use okr::libs::logger;
use okr::msg_error;
use std::process;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logger::init();

    if let Err(e) = Cli::menu().await {
        msg_error!(format!("{:#}", e));
        process::exit(1);
    }
}
