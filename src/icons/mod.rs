//! Resizes one logo into the icon layouts expected by each desktop platform.

use std::fs::File;
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType};
use log::{info, warn};

use crate::http::HttpClient;
use crate::process::CommandRunner;
use crate::util::file::PathExt;

pub const MACOS_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];
pub const WINDOWS_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
pub const LINUX_SIZES: [u32; 8] = [16, 24, 32, 48, 64, 128, 256, 512];

/// Where the logo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    Url(String),
    File(PathBuf),
}

impl LogoSource {
    pub fn parse(raw: &str) -> LogoSource {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            LogoSource::Url(raw.to_string())
        } else {
            LogoSource::File(PathBuf::from(raw))
        }
    }

    pub fn load(&self, http: &HttpClient) -> Result<DynamicImage> {
        match self {
            LogoSource::Url(url) => {
                let body = http
                    .get_bytes(url)
                    .with_context(|| format!("Failed to download image from {}", url))?;
                Ok(image::load_from_memory(&body)?)
            }
            LogoSource::File(path) => {
                if !path.exists() {
                    return Err(anyhow!("Logo file not found: {}", path.display()));
                }
                Ok(image::open(path)?)
            }
        }
    }
}

fn resize(logo: &DynamicImage, size: u32) -> DynamicImage {
    logo.resize_exact(size, size, FilterType::Lanczos3)
}

/// `AppIcon.iconset/icon_<n>x<n>.png` for every size, then packs the set into
/// `AppIcon.icns` with `iconutil`. Without `iconutil` only the iconset is
/// written.
pub fn generate_mac_icons(logo: &DynamicImage, output_dir: &Path, runner: &dyn CommandRunner) -> Result<()> {
    let iconset_dir = output_dir.join("AppIcon.iconset");
    iconset_dir.ensure_dir()?;
    for size in MACOS_SIZES {
        resize(logo, size).save(iconset_dir.join(format!("icon_{}x{}.png", size, size)))?;
    }

    let icns_path = output_dir.join("AppIcon.icns");
    let args = vec![
        "-c".to_string(),
        "icns".to_string(),
        iconset_dir.to_string_lossy().to_string(),
        "-o".to_string(),
        icns_path.to_string_lossy().to_string(),
    ];
    match runner.run("iconutil", &args) {
        Ok(output) if output.success => info!("wrote {}", icns_path.display()),
        Ok(output) => warn!("iconutil failed: {}", output.stderr.trim()),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("iconutil not found, skipped {}", icns_path.display())
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// One multi-resolution `app.ico`.
pub fn generate_windows_icons(logo: &DynamicImage, output_dir: &Path) -> Result<()> {
    output_dir.ensure_dir()?;
    let mut frames = Vec::with_capacity(WINDOWS_SIZES.len());
    for size in WINDOWS_SIZES {
        let rgba = resize(logo, size).to_rgba8();
        frames.push(IcoFrame::as_png(rgba.as_raw(), size, size, ExtendedColorType::Rgba8)?);
    }
    let ico_path = output_dir.join("app.ico");
    let writer = BufWriter::new(File::create(&ico_path)?);
    IcoEncoder::new(writer).encode_images(&frames)?;
    info!("wrote {}", ico_path.display());
    Ok(())
}

/// `<n>x<n>/apps/app.png`, the hicolor theme layout.
pub fn generate_linux_icons(logo: &DynamicImage, output_dir: &Path) -> Result<()> {
    for size in LINUX_SIZES {
        let size_dir = output_dir.join(format!("{}x{}", size, size)).join("apps");
        size_dir.ensure_dir()?;
        resize(logo, size).save(size_dir.join("app.png"))?;
    }
    Ok(())
}

/// All three platform sets under `output_dir/{macos,windows,linux}`.
pub fn generate_all(logo: &DynamicImage, output_dir: &Path, runner: &dyn CommandRunner) -> Result<()> {
    output_dir.ensure_dir()?;
    generate_mac_icons(logo, &output_dir.join("macos"), runner)?;
    generate_windows_icons(logo, &output_dir.join("windows"))?;
    generate_linux_icons(logo, &output_dir.join("linux"))?;
    Ok(())
}
