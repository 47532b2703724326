use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossfade_core::{Color, CrossfadeMode, Easing, FadeConfig, Interpolate};

/// Color cross-fades printed frame by frame.
#[derive(Parser, Debug)]
#[command(name = "crossfade")]
#[command(about = "Print the colors of a cross-fade as it plays")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interpolation mode: rgb, argb, hsv or hsv-alpha
    #[arg(long, value_parser = parse_mode)]
    mode: Option<CrossfadeMode>,

    /// Color to fade through, as #RRGGBB or #AARRGGBB (repeat for more)
    #[arg(short, long = "color", value_parser = parse_color)]
    colors: Vec<Color>,

    /// Length of one run in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Time curve, e.g. linear, accelerate-decelerate, bounce
    #[arg(long, value_parser = parse_easing)]
    easing: Option<Easing>,

    /// Ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Number of runs, alternating direction
    #[arg(long)]
    cycles: Option<u32>,

    /// Print an evenly sampled gradient of this many colors instead of animating
    #[arg(long)]
    steps: Option<usize>,
}

fn parse_mode(s: &str) -> Result<CrossfadeMode, String> {
    s.parse().map_err(|e| format!("Invalid mode: {}", e))
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e| format!("Invalid color: {}", e))
}

fn parse_easing(s: &str) -> Result<Easing, String> {
    s.parse().map_err(|e| format!("Invalid easing: {}", e))
}

impl Args {
    /// Start from the config file (or defaults) and apply the flags on top.
    fn resolve(&self) -> Result<FadeConfig, anyhow::Error> {
        let mut config = match &self.config {
            Some(path) => FadeConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => FadeConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if !self.colors.is_empty() {
            config.colors = self.colors.clone();
        }
        if let Some(duration_ms) = self.duration_ms {
            config.duration_ms = duration_ms;
        }
        if let Some(easing) = self.easing {
            config.easing = easing;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        if let Some(cycles) = self.cycles {
            config.cycles = cycles;
        }

        config.validate()?;
        Ok(config)
    }
}

fn print_gradient(config: &FadeConfig, steps: usize) -> Result<(), anyhow::Error> {
    let interpolator = config.build_interpolator()?;
    let mut strip = vec![Color::TRANSPARENT; steps];
    interpolator.fill(&mut strip);

    for (i, color) in strip.iter().enumerate() {
        println!("{:>4} {}", i, color);
    }
    Ok(())
}

async fn play(mut config: FadeConfig) -> Result<(), anyhow::Error> {
    for cycle in 0..config.cycles {
        let interpolator = config.build_interpolator()?;
        log::info!(
            "Cycle {}/{}: {} fade over {} colors",
            cycle + 1,
            config.cycles,
            config.mode,
            config.colors.len()
        );

        let mut animator = interpolator
            .into_animator(|color| println!("{}", color))
            .with_duration(config.duration())
            .with_easing(config.easing);

        if let Some(last) = animator.run(config.target_fps).await {
            log::debug!("Cycle {} ended on {}", cycle + 1, last);
        }

        // play the next run back the other way
        config.colors.reverse();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.resolve()?;

    match args.steps {
        Some(steps) => print_gradient(&config, steps),
        None => play(config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults_without_config() {
        let args = Args::parse_from(["crossfade"]);
        assert_eq!(args.resolve().unwrap(), FadeConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("fade.json");

        let saved = FadeConfig {
            mode: CrossfadeMode::Argb,
            duration_ms: 2500,
            target_fps: 24,
            cycles: 3,
            ..FadeConfig::default()
        };
        saved.save(&config_path).unwrap();

        let path = config_path.to_str().unwrap();
        let args = Args::parse_from([
            "crossfade", "--config", path, "--mode", "rgb", "-c", "#000000", "--color",
            "#ffffff", "--fps", "30", "--easing", "bounce",
        ]);
        let config = args.resolve().unwrap();

        assert_eq!(config.mode, CrossfadeMode::Rgb);
        assert_eq!(config.colors, vec![Color::BLACK, Color::WHITE]);
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.easing, Easing::Bounce);
        // untouched by flags
        assert_eq!(config.duration_ms, 2500);
        assert_eq!(config.cycles, 3);
    }

    #[test]
    fn test_resolve_rejects_invalid_overrides() {
        let args = Args::parse_from(["crossfade", "-c", "#ff0000"]);
        assert!(args.resolve().is_err());

        let args = Args::parse_from(["crossfade", "--fps", "0"]);
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_bad_flag_values_are_rejected() {
        assert!(Args::try_parse_from(["crossfade", "--mode", "lab"]).is_err());
        assert!(Args::try_parse_from(["crossfade", "-c", "#12345"]).is_err());
        assert!(Args::try_parse_from(["crossfade", "--easing", "wobble"]).is_err());
    }
}
