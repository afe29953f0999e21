use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use crate::config::cmd::CmdArgs;

mod config;
mod docker;
mod eth;
mod http;
mod hub;
mod icons;
mod init;
mod process;
mod subcmd;
mod util;

fn main() -> ExitCode {
    let cmd_args = match CmdArgs::try_parse() {
        Ok(cmd_args) => cmd_args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };
    init::init();
    match subcmd::run(cmd_args) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red(), err);
            ExitCode::FAILURE
        }
    }
}
