use anyhow::Error;
use confique::Config;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Config)]
pub struct LoadProfileConfig {
    #[config(env = "LOADPROFILE_MAX_FILE_SIZE", default = "64mb")]
    pub max_file_size: String,

    /// Rows shown in the data preview.
    #[config(env = "LOADPROFILE_PREVIEW_ROWS", default = 5)]
    pub preview_rows: usize,

    #[config(env = "LOADPROFILE_CSV_DELIMITER", default = ",")]
    pub csv_delimiter: String,
}

impl LoadProfileConfig {
    pub fn load() -> Result<LoadProfileConfig, Error> {
        let c = LoadProfileConfig::builder()
            .env()
            .file("loadprofile.toml")
            .load()?;

        Ok(c)
    }

    pub fn parse_max_file_size(&self) -> Result<u64, Error> {
        let size = byte_unit::Byte::parse_str(self.max_file_size.clone(), true)?.as_u64();
        if size > 4 * 1024 * 1024 * 1024 {
            anyhow::bail!("Maximum file size is too big: > 4GiB");
        }
        Ok(size)
    }

    pub fn parse_csv_delimiter(&self) -> Result<u8, Error> {
        match self.csv_delimiter.as_str() {
            "\\t" | "tab" => Ok(b'\t'),
            delimiter if delimiter.len() == 1 && delimiter.is_ascii() => Ok(delimiter.as_bytes()[0]),
            delimiter => anyhow::bail!(
                "CSV delimiter must be a single ASCII character, got {:?}",
                delimiter
            ),
        }
    }
}

static LOADPROFILE_CONFIG: OnceLock<Arc<LoadProfileConfig>> = OnceLock::new();

pub fn get() -> Result<Arc<LoadProfileConfig>, Error> {
    LOADPROFILE_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

pub fn load_configuration() -> Result<(), Error> {
    // Check if the configuration has already been loaded
    if LOADPROFILE_CONFIG.get().is_some() {
        return Ok(());
    }

    // Load configuration
    let config = LoadProfileConfig::load()?;
    LOADPROFILE_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}
