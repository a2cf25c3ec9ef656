use std::borrow::Cow;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use arc_swap::{ArcSwap, Guard};
use notify::{watcher, DebouncedEvent, RecursiveMode, Watcher};
use once_cell::sync::OnceCell;

use common::*;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parsing(#[from] ron::Error),

    #[error("Failed to watch config file: {0}")]
    Notify(#[from] notify::Error),

    #[error("Path is not a file")]
    NotAFile,

    #[error("Config has already been initialized")]
    AlreadyInitialized,

    #[error("Invalid config value: {0}")]
    Invalid(&'static str),
}

type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub enum ConfigType<'a> {
    String(&'a str),
    WatchedFile(&'a Path),
}

static CONFIG: OnceCell<ArcSwap<Config>> = OnceCell::new();

/// Parses without touching the global instance
pub fn load_str(s: &str) -> ConfigResult<Config> {
    ConfigType::String(s).load()
}

/// Must be called once only, and before [get]
pub fn init(cfg: ConfigType) -> ConfigResult<()> {
    if CONFIG.get().is_some() {
        return Err(ConfigError::AlreadyInitialized);
    }

    // parse config and fail early
    let config = cfg.load()?;

    if CONFIG.set(ArcSwap::from_pointee(config)).is_err() {
        return Err(ConfigError::AlreadyInitialized);
    }

    // watch directory for changes if requested
    if let ConfigType::WatchedFile(path) = cfg {
        watch(path)?;
    }

    Ok(())
}

fn watch(path: &Path) -> ConfigResult<()> {
    if !path.is_file() {
        return Err(ConfigError::NotAFile);
    }

    let path = path.to_owned();
    let watch_dir = path.parent().ok_or(ConfigError::NotAFile)?.to_owned();
    let watch_file = path.file_name().ok_or(ConfigError::NotAFile)?.to_owned();

    let (tx, rx) = channel();
    let mut watcher = watcher(tx, Duration::from_secs(1))?;
    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    thread::Builder::new()
        .name("cfg-watcher".to_owned())
        .spawn(move || {
            let _watcher = watcher; // keep alive
            let is_config = |p: &PathBuf| p.file_name().map(|f| f == watch_file).unwrap_or(false);

            loop {
                let reload = match rx.recv() {
                    Ok(e) => match e {
                        DebouncedEvent::Write(ref p) if is_config(p) => true,
                        DebouncedEvent::Remove(ref p) if is_config(p) => {
                            warn!("config was deleted");
                            true
                        }
                        DebouncedEvent::Rename(ref a, ref b) if is_config(a) || is_config(b) => {
                            warn!("config was renamed");
                            true
                        }
                        _ => false,
                    },
                    Err(_) => {
                        debug!("config watcher channel closed");
                        break;
                    }
                };

                if reload {
                    info!("config was modified, reloading"; "path" => %path.display());

                    match ConfigType::WatchedFile(&path).load() {
                        Ok(config) => {
                            if let Some(cfg) = CONFIG.get() {
                                cfg.store(Arc::new(config));
                                debug!("swapped config instance");
                            }
                        }
                        Err(e) => {
                            warn!("failed to reload config"; "error" => %e);
                        }
                    }
                }
            }
        })?;

    Ok(())
}

/// Panics if [init] has not been called
pub fn get() -> impl Deref<Target = Config> {
    let cfg = CONFIG.get().expect("config has not been initialized");
    Guard::into_inner(cfg.load())
}

impl<'a> ConfigType<'a> {
    fn load(&self) -> ConfigResult<Config> {
        let bytes = match self {
            ConfigType::String(s) => Cow::Borrowed(*s),
            ConfigType::WatchedFile(path) => {
                let contents = std::fs::read_to_string(*path)?;
                Cow::Owned(contents)
            }
        };

        let config: Config = ron::de::from_str(&bytes)?;
        validate(&config)?;
        Ok(config)
    }
}

/// Rejects values the simulation and steering maths can't run with
fn validate(config: &Config) -> ConfigResult<()> {
    let check = |ok: bool, what: &'static str| {
        if ok {
            Ok(())
        } else {
            Err(ConfigError::Invalid(what))
        }
    };

    check(
        config.simulation.ticks_per_second > 0,
        "ticks_per_second must be positive",
    )?;
    check(
        config.simulation.max_frameskip > 0,
        "max_frameskip must be positive",
    )?;

    for agent in [&config.hunter, &config.wolf] {
        let params = &agent.steering;
        check(params.slow_radius_l > 0.0, "slow_radius_l must be positive")?;
        check(params.slow_radius_a > 0.0, "slow_radius_a must be positive")?;
        check(params.time_to_target > 0.0, "time_to_target must be positive")?;
        check(params.max_prediction > 0.0, "max_prediction must be positive")?;
    }

    Ok(())
}
