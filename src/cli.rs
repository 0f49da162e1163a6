//! Command line shared by every study binary. Flags layer over the base
//! RON config so a demo can be resized or auto-closed without editing files.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DemoConfig;

/// Base config layer, relative to the repo root.
pub const BASE_CONFIG: &str = "assets/config/demo.ron";

#[derive(Parser, Debug, Default)]
#[command(about = "shapelab study", version)]
pub struct DemoArgs {
    /// Extra RON config file layered over the base config.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Window width override.
    #[arg(long)]
    pub width: Option<f32>,
    /// Window height override.
    #[arg(long)]
    pub height: Option<f32>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    pub auto_close: Option<f32>,
    /// Draw rapier collider outlines (physics studies).
    #[arg(long)]
    pub debug: bool,
}

/// Parses the process arguments and returns the config a study boots from.
pub fn demo_config(title: &str) -> DemoConfig {
    resolve(title, &DemoArgs::parse())
}

fn resolve(title: &str, args: &DemoArgs) -> DemoConfig {
    let mut paths: Vec<PathBuf> = vec![BASE_CONFIG.into()];
    if let Some(extra) = &args.config {
        paths.push(extra.clone());
    }
    let (mut cfg, _used, errors) = DemoConfig::load_layered(&paths);
    cfg.load_notes = errors;
    cfg.window.title = format!("shapelab: {title}");
    if let Some(width) = args.width {
        cfg.window.width = width;
    }
    if let Some(height) = args.height {
        cfg.window.height = height;
    }
    if let Some(auto_close) = args.auto_close {
        cfg.window.auto_close = auto_close;
    }
    if args.debug {
        cfg.rapier_debug = true;
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn overrides_apply_over_layers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"(window: (width: 1024.0, height: 768.0))"#)
            .unwrap();
        let args = DemoArgs {
            config: Some(file.path().to_path_buf()),
            width: None,
            height: Some(540.0),
            auto_close: Some(2.0),
            debug: false,
        };
        let cfg = resolve("circle fade", &args);
        assert_eq!(cfg.window.width, 1024.0); // from the layer
        assert_eq!(cfg.window.height, 540.0); // flag wins
        assert_eq!(cfg.window.auto_close, 2.0);
        assert_eq!(cfg.window.title, "shapelab: circle fade");
    }

    #[test]
    fn defaults_without_flags() {
        let cfg = resolve("study", &DemoArgs::default());
        assert_eq!(cfg.window.width, 800.0);
        assert!(cfg.window.auto_close.abs() < f32::EPSILON);
    }
}
