use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::{debug, info};
use version_stamp::{VersionLabel, render_announcement, render_header, render_text};

use crate::config::{self, SettingsOverrides, StampSettings};
use crate::io;

#[derive(Args, Debug, Default)]
pub struct StampArgs {
    /// Directory the version files are written into
    #[arg(long)]
    root: Option<PathBuf>,
    /// Config file (defaults to stamp.toml in the output root, if present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Environment variable holding the build number
    #[arg(long)]
    env_var: Option<String>,
    /// Identifier used when the build number variable is unset
    #[arg(long)]
    fallback: Option<String>,
    /// Resolve the version and report the target paths without writing
    #[arg(long)]
    dry_run: bool,
    /// Print the bare version label after writing
    #[arg(long)]
    print: bool,
}

#[derive(Debug)]
pub struct StampOutcome {
    pub text_file: PathBuf,
    pub header_file: PathBuf,
}

pub fn run(args: StampArgs) -> Result<()> {
    let settings = config::resolve_stamp_settings(
        SettingsOverrides {
            root: args.root,
            config: args.config,
            env_var: args.env_var,
            fallback: args.fallback,
        },
        |name| std::env::var(name).ok(),
    )?;
    debug!(?settings, "resolved stamp settings");

    let label = VersionLabel::from_env(&settings.env_var, &settings.fallback);
    if std::env::var_os(&settings.env_var).is_none() {
        debug!(
            env_var = %settings.env_var,
            fallback = %settings.fallback,
            "build number not set, using fallback"
        );
    }

    if args.dry_run {
        println!("{}", render_announcement(&label));
        println!("Would write {}", settings.text_file().display());
        println!("Would write {}", settings.header_file().display());
        return Ok(());
    }

    let outcome = stamp_artifacts(&settings, &label)?;
    debug!(
        text = %outcome.text_file.display(),
        header = %outcome.header_file.display(),
        "stamp complete"
    );

    println!("{}", render_announcement(&label));
    if args.print {
        println!("{label}");
    }
    Ok(())
}

/// Writes the text file, then the header. A header failure leaves the text
/// file in place.
pub fn stamp_artifacts(settings: &StampSettings, label: &VersionLabel) -> Result<StampOutcome> {
    let text_file = settings.text_file();
    io::write_output(&text_file, render_text(label).as_bytes())?;
    info!(path = %text_file.display(), %label, "wrote version text");

    let header_file = settings.header_file();
    io::write_output(
        &header_file,
        render_header(label, &settings.macro_name).as_bytes(),
    )?;
    info!(path = %header_file.display(), %label, "wrote version header");

    Ok(StampOutcome {
        text_file,
        header_file,
    })
}
