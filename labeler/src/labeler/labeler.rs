use actix_web::web::{self, route};
use actix_web::{App, HttpServer};
use std::time::Duration;
use tokio::time::sleep;
use crate::labeler::storage::Storage;
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::web::api::{self as api, default};

pub struct Labeler;

impl Labeler {
    pub async fn run(config: Config) {
        logging_information!(SystemEntry::Initializing);
        let storage = Storage::new(&config.upload_directory, &config.label_directory);
        if let Err(entry) = storage.initialize().await {
            logging_emergency!(entry);
            return;
        }
        let storage = web::Data::new(storage);
        let http_server = loop {
            let storage = storage.clone();
            let label_payload_limit = config.label_payload_limit;
            let http_server = HttpServer::new(move || {
                let cors = actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600);
                App::new()
                    .wrap(cors)
                    .app_data(storage.clone())
                    .app_data(web::JsonConfig::default().limit(label_payload_limit))
                    .configure(api::initialize)
                    .default_service(route().to(default::default_route))
            })
            .bind(config.bind_address());
            match http_server {
                Ok(http_server) => break http_server,
                Err(err) => {
                    logging_critical!(SystemEntry::BindPortError(config.bind_address(), err));
                    sleep(Duration::from_secs(config.bind_retry_duration)).await;
                    continue;
                },
            }
        };
        logging_information!(SystemEntry::WebReady, format!("Address: {}", config.bind_address()));
        logging_information!(SystemEntry::InitializeComplete);
        logging_information!(SystemEntry::Online);
        if let Err(err) = http_server.run().await {
            logging_emergency!(SystemEntry::WebPanic(err));
        }
    }

    pub async fn terminate() {
        logging_information!(SystemEntry::Terminating);
        logging_information!(SystemEntry::TerminateComplete);
    }
}
