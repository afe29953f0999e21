use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write;

/// Process-wide setup, run once before any subcommand.
pub fn init() {
    log_init();
}

/// Log records go to stderr only, stdout is reserved for command output.
fn log_init() {
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env)
        .target(Target::Stderr)
        .format(|fmt, record| {
            writeln!(
                fmt,
                "[{} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                &record.args()
            )
        })
        .init();
}
