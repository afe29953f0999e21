use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::cmd::IconsCmdArgs;
use crate::config::{AppConfig, DEFAULT_ICON_DIR, DEFAULT_LOGO_URL};
use crate::http::HttpClient;
use crate::icons::{generate_all, LogoSource};
use crate::process::CommandRunner;
use crate::subcmd::Outcome;

pub struct IconsCommand {}

impl IconsCommand {
    pub fn generate(
        config: &AppConfig,
        args: &IconsCmdArgs,
        runner: &dyn CommandRunner,
        out: &mut dyn Write,
    ) -> Result<Outcome> {
        let source = LogoSource::parse(args.source.as_deref().unwrap_or(DEFAULT_LOGO_URL));
        let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_DIR));
        let http = HttpClient::new(config.http_timeout_secs)?;
        let logo = match source.load(&http) {
            Ok(logo) => logo,
            Err(err) => {
                writeln!(out, "{:#}", err)?;
                return Ok(Outcome::Failure);
            }
        };
        info!("logo loaded, {}x{}", logo.width(), logo.height());
        generate_all(&logo, &output_dir, runner)?;
        writeln!(out, "{}", "Icon generation completed!".green())?;
        Ok(Outcome::Success)
    }
}
