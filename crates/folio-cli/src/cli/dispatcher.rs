use std::path::PathBuf;

use folio_core::core::services::config_service::ConfigService;
use folio_core::error::AppError;
use folio_core::storage::config::Config;
use log::debug;

use crate::cli::command_handlers::{ConfigHandler, ContactHandler, ShowHandler};
use crate::cli::main_types::Commands;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    // Helper method to create ConfigService with current configuration
    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone())
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Show(args) => {
                debug!("dispatching show");
                ShowHandler::new().handle(args, &self.config.profile)
            }
            Commands::Contact { command } => {
                debug!("dispatching contact");
                let config_service = self.create_config_service();
                ContactHandler::new().handle(command, &config_service).await
            }
            Commands::Config { command } => {
                debug!("dispatching config");
                let mut config_service = self.create_config_service();
                ConfigHandler::new().handle(command, &mut config_service, self.config_path.clone())
            }
        }
    }
}
