//! `normalize`: rewrite a configuration file into the canonical schema.

use rdio_admin_core::normalize;
use rdio_admin_core::transfer::parse_document;

use super::util::read_input;
use crate::cli::{GlobalOpts, NormalizeArgs};
use crate::config;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: NormalizeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let format = config::resolve_output(global, &cfg);
    let color = output::should_color(global.color);

    let bytes = read_input(&args.input).await?;
    let normalized = normalize(parse_document(&bytes)?);
    tracing::debug!(changes = normalized.report.total(), "normalized input");

    let rendered = output::render_document(format, &normalized.document);
    match args.out {
        Some(ref path) => {
            tokio::fs::write(path, format!("{rendered}\n")).await?;
            output::print_success(
                &format!("Wrote {}", path.display()),
                color,
                global.quiet,
            );
        }
        None => output::print_output(&rendered, global.quiet),
    }

    if args.report && !global.quiet {
        eprintln!("{}", output::render_report(&normalized.report));
    }
    Ok(())
}
