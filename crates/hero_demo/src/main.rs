//! Hero scene demo host
//!
//! Drives the scene the way a page would: a display loop ticking every frame,
//! the activation timers running, and a scripted pointer passing over one
//! label. Snapshots go to a renderer adapter that logs instead of drawing.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use hero_scene::foundation::logging;
use hero_scene::prelude::*;
use hero_scene::scene::renderer::instance_bytes;

const FRAME_TIME: f32 = 1.0 / 60.0;
const SNAPSHOT_EVERY: u64 = 30;
const HOVER_LABEL: &str = "PYTHON";
const HOVER_WINDOW: (f64, f64) = (2.0, 3.5);

#[derive(Debug, Parser)]
#[command(name = "hero_demo", about = "Drives the hero scene and logs its snapshots")]
struct Args {
    /// Scene config (.toml or .ron); defaults are used when omitted
    config: Option<PathBuf>,

    /// Tick a fixed 60 fps virtual clock instead of sleeping
    #[arg(long)]
    headless: bool,

    /// Scene time to run for
    #[arg(long, value_name = "SECONDS", default_value = "12", value_parser = parse_seconds)]
    seconds: f64,

    /// Write the effective config to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("expected a positive, finite number of seconds, got {value}"))
    }
}

/// Renderer adapter that logs frames instead of drawing them
struct LogRenderer {
    frames: u64,
    bytes_uploaded: usize,
}

impl RendererAdapter for LogRenderer {
    fn submit(&mut self, frame: &FrameSnapshot) {
        self.frames += 1;
        self.bytes_uploaded += instance_bytes(&frame.instances()).len();

        if frame.frame() % SNAPSHOT_EVERY == 0 {
            match ron::to_string(frame) {
                Ok(line) => println!("{line}"),
                Err(e) => log::error!("Failed to serialize frame {}: {e}", frame.frame()),
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => HeroConfig::load_from_file(path)?,
        None => HeroConfig::default(),
    };
    logging::init(&config.log_level);
    match &args.config {
        Some(path) => log::info!("Loaded config from {}", path.display()),
        None => log::info!("Using default config"),
    }

    if let Some(path) = &args.write_config {
        config.save_to_file(path)?;
        log::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let mut scene = HeroScene::new(&config)?;
    let hover_target = scene.layout().node_by_label(HOVER_LABEL).map(|node| node.id);
    let mut renderer = LogRenderer {
        frames: 0,
        bytes_uploaded: 0,
    };
    let mut wall_clock = WallClock::new();

    scene.start();
    while scene.clock().elapsed() < args.seconds {
        let delta = if args.headless {
            FRAME_TIME
        } else {
            std::thread::sleep(Duration::from_secs_f32(FRAME_TIME));
            wall_clock.sample()
        };

        if let Some(id) = hover_target {
            let t = scene.clock().elapsed();
            if (HOVER_WINDOW.0..HOVER_WINDOW.1).contains(&t) {
                scene.on_pointer_enter(id);
            } else {
                scene.on_pointer_exit(id);
            }
        }

        scene.render_frame(delta, &mut renderer);

        for event in scene.drain_events() {
            match event {
                ActivationEvent::GroupChanged { to, .. } => {
                    let headline = &scene.layout().headline(to).title;
                    log::info!("Group -> {to}: {headline}");
                }
                ActivationEvent::IndexChanged { .. } => {
                    if let Some(node) = scene.active_node().and_then(|id| scene.layout().node(id)) {
                        log::info!("Highlight -> {}", node.text);
                    }
                }
            }
        }
    }

    if !args.headless {
        log::info!("Average frame rate {:.1} fps", wall_clock.average_fps());
    }
    log::info!(
        "Rendered {} frames ({} instance bytes)",
        renderer.frames,
        renderer.bytes_uploaded
    );
    scene.teardown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hero_demo"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.headless);
        assert_eq!(args.seconds, 12.0);
        assert!(args.write_config.is_none());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "hero_demo",
            "scene.toml",
            "--headless",
            "--seconds",
            "2.5",
            "--write-config",
            "out.ron",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("scene.toml")));
        assert!(args.headless);
        assert_eq!(args.seconds, 2.5);
        assert_eq!(args.write_config, Some(PathBuf::from("out.ron")));
    }

    #[test]
    fn test_rejects_unbounded_run_time() {
        for bad in ["inf", "NaN", "0", "-3", "soon"] {
            assert!(
                Args::try_parse_from(["hero_demo", "--seconds", bad]).is_err(),
                "accepted --seconds {bad}"
            );
        }
        assert!(Args::try_parse_from(["hero_demo", "--bogus"]).is_err());
    }
}
