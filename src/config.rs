use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Persisted toolchain configuration.
///
/// Created with defaults on first load and stored as JSON under the user's
/// home directory, so the external compiler binaries can be pointed
/// elsewhere without recompiling.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub c_compiler: String,
    pub lua_compiler: String,
    pub lua_runtime: String,
    pub output_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            c_compiler: String::from("gcc"),
            lua_compiler: String::from("luac"),
            lua_runtime: String::from("lua"),
            output_name: String::from("output"),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            let config = Config::default();
            config.save().unwrap_or_default();
            return config;
        }

        fs::read_to_string(&config_path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> io::Result<()> {
        let config_path = Self::get_config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
    }

    pub fn get_config_path() -> PathBuf {
        let home = if cfg!(windows) {
            env::var("USERPROFILE").unwrap_or_else(|_| String::from("."))
        } else {
            env::var("HOME").unwrap_or_else(|_| String::from("."))
        };
        PathBuf::from(home).join(".zillac").join("config.json")
    }

    /// Name of the generated source file for the given target.
    pub fn output_file(&self, lua: bool) -> String {
        if lua {
            format!("{}.lua", self.output_name)
        } else {
            format!("{}.c", self.output_name)
        }
    }

    /// Name of the executable produced by the C toolchain.
    pub fn executable_file(&self) -> String {
        if cfg!(windows) {
            format!("{}.exe", self.output_name)
        } else {
            self.output_name.clone()
        }
    }
}
