use crate::labeler::labeler::Labeler;
use crate::utils::config::{Config, CONFIG_PATH};

pub mod labeler;
pub mod utils;
pub mod web;

#[actix_web::main]
async fn main() {
    let config = match Config::load(CONFIG_PATH).await {
        Ok(config) => config,
        Err(entry) => {
            logging_entry!(entry);
            return;
        }
    };
    Labeler::run(config).await;
    Labeler::terminate().await;
}
