mod game_loop;

use clap::Parser;
use snake_engine::config::{
    ConfigError, ConfigManager, FileContentConfigProvider, SnakeConfig, Validate,
};
use snake_engine::snake::{SnakeGameState, SnakeSessionSettings};
use snake_engine::{log, logger};

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

#[derive(Parser)]
#[command(name = "snake_runner", about = "Runs the snake simulation headless, steered from stdin")]
struct Args {
    /// YAML config file; defaults to snake_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    #[arg(long)]
    tick_interval_ms: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks instead of running until Ctrl+C
    #[arg(long)]
    ticks: Option<u64>,
    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut SnakeConfig) {
        if let Some(width) = self.width {
            config.field_width = width;
        }
        if let Some(height) = self.height {
            config.field_height = height;
        }
        if let Some(tick_interval_ms) = self.tick_interval_ms {
            config.tick_interval_ms = tick_interval_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let config_manager =
        ConfigManager::<FileContentConfigProvider, SnakeConfig>::from_yaml_file(&config_path);

    let mut config = config_manager.get_config()?;
    args.apply_overrides(&mut config);
    config.validate().map_err(ConfigError::Invalid)?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", config_path);
    }

    let settings = SnakeSessionSettings::from(&config);
    let state = SnakeGameState::with_settings(&settings);

    log!(
        "Snake on {}x{} field, tick every {:?}, seed {}",
        settings.field_size.width(),
        settings.field_size.height(),
        settings.tick_interval,
        state.seed()
    );

    let summary =
        game_loop::run_game_loop(state, settings.tick_interval, args.ticks, tokio::io::stdin()).await;

    log!(
        "Finished after {} ticks: score {}, best {}, apples {}, deaths {}",
        summary.ticks_played,
        summary.final_score,
        summary.best_score,
        summary.apples_eaten,
        summary.deaths
    );

    Ok(())
}
