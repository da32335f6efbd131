//! `options`: inspect the canonical options table.

use serde_json::Value;

use rdio_admin_core::OBSOLETE_OPTIONS;
use rdio_admin_core::model::default_options_map;

use crate::cli::{GlobalOpts, OptionsArgs, OptionsCommand};
use crate::error::CliError;
use crate::output;

#[allow(clippy::unused_async)]
pub async fn handle(args: OptionsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let rendered = match args.command {
        // Table unless a structured format was asked for explicitly.
        OptionsCommand::Defaults => match global.output {
            Some(format) => output::render_document(format, &Value::Object(default_options_map())),
            None => output::render_default_options(),
        },
        OptionsCommand::Obsolete => match global.output {
            Some(format) => output::render_document(format, OBSOLETE_OPTIONS),
            None => OBSOLETE_OPTIONS.join("\n"),
        },
    };
    output::print_output(&rendered, global.quiet);
    Ok(())
}
