use std::io::{self, Write};
use std::path::PathBuf;

use folio_core::contact::{ContactController, FormField, NoticeSeverity};
use folio_core::core::profile::Profile;
use folio_core::core::services::config_service::ConfigService;
use folio_core::display::SectionDisplay;
use folio_core::error::{AppError, ConfigError};
use folio_core::storage::config::Config;
use folio_core::utils::error_helpers::convert_io_to_display_error;
use log::{debug, info};

use crate::cli::main_types::{ConfigCommands, ConfigFormat, ContactCommands, ShowArgs};

/// Write to stdout, reporting broken pipes as display errors.
fn emit(text: &str) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end())
        .and_then(|_| stdout.flush())
        .map_err(|e| convert_io_to_display_error(e, "write to stdout").into())
}

#[derive(Default)]
pub struct ShowHandler;

impl ShowHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, args: ShowArgs, profile: &Profile) -> Result<(), AppError> {
        let mut display = SectionDisplay::new().with_colors(!args.no_color);
        if let Some(width) = args.width {
            display = display.with_max_width(width);
        }

        let output = match args.section {
            Some(id) => {
                debug!("rendering section {}", id.fragment());
                display.render_section(profile, id)
            }
            None => display.render_all(profile),
        };
        emit(&output)
    }
}

#[derive(Default)]
pub struct ContactHandler;

impl ContactHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: ContactCommands,
        config_service: &ConfigService,
    ) -> Result<(), AppError> {
        match command {
            ContactCommands::Send {
                name,
                email,
                subject,
                message,
            } => {
                let mut controller =
                    ContactController::new(config_service.config().profile.recipient());
                let form = controller.form_mut();
                form.set(FormField::Name, name);
                form.set(FormField::Email, email);
                form.set(FormField::Subject, subject);
                form.set(FormField::Message, message);

                // Validation happens before any client is built
                let payload = controller.begin_submit()?;
                let result = match config_service.relay_client() {
                    Ok(client) => {
                        info!("posting contact message to {}", client.endpoint);
                        client.submit(&payload).await
                    }
                    Err(e) => Err(e),
                };
                let notice = controller.settle(&result);
                match notice.severity {
                    NoticeSeverity::Success => {
                        emit(&format!("✅ {}", notice.message))?;
                        Ok(())
                    }
                    _ => {
                        eprintln!("❌ {}", notice.message);
                        result
                    }
                }
            }
        }
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<PathBuf>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show { format } => {
                let rendered = match format {
                    ConfigFormat::Toml => config_service.to_toml()?,
                    ConfigFormat::Json => serde_json::to_string_pretty(config_service.config())
                        .map_err(|e| {
                            AppError::Config(ConfigError::InvalidValue {
                                field: "config".to_string(),
                                value: String::new(),
                                reason: e.to_string(),
                            })
                        })?,
                };
                emit(&rendered)?;
                if format == ConfigFormat::Toml {
                    emit(&format!(
                        "# effective relay endpoint: {}",
                        config_service.config().relay_endpoint()
                    ))?;
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                debug!("config set {} = {}", key, value);
                config_service.set(&key, &value)?;
                config_service.save_config(config_path)?;
                emit(&format!("✅ Set {} to: {}", key, value))?;
                emit("Configuration saved successfully.")
            }
            ConfigCommands::Path => {
                let path = match config_path {
                    Some(path) => path,
                    None => Config::config_file_path()?,
                };
                emit(&path.display().to_string())
            }
        }
    }
}
