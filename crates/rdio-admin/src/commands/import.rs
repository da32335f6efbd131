//! `import`: normalize a file and apply it to the store, or print it for review.

use serde_json::Value;

use rdio_admin_core::{FileStore, ImportMode, MemoryStore, ReviewSink, prepare_import};

use super::util::{confirm, read_input};
use crate::cli::{GlobalOpts, ImportArgs, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output;

/// Review sink that prints the document to stdout.
struct PrintSink {
    format: OutputFormat,
    quiet: bool,
}

impl ReviewSink for PrintSink {
    fn emit(&mut self, document: &Value, _is_import_for_review: bool) {
        output::print_output(&output::render_document(self.format, document), self.quiet);
    }
}

pub async fn handle(args: ImportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let color = output::should_color(global.color);
    let mode = if args.review {
        ImportMode::Review
    } else {
        ImportMode::Apply
    };

    let bytes = read_input(&args.file).await?;
    let outcome = prepare_import(&bytes, mode)?;

    let mut sink = PrintSink {
        format: config::resolve_output(global, &cfg),
        quiet: global.quiet,
    };

    match mode {
        ImportMode::Review => {
            // Review never touches the store, so none needs to be configured.
            let store = MemoryStore::default();
            outcome.dispatch(&store, &mut sink).await?;
            if !global.quiet {
                eprintln!("{}", output::render_report(&outcome.report));
            }
            output::print_notice("Review only: nothing was saved.", color, global.quiet);
        }
        ImportMode::Apply => {
            let resolved = config::resolve_profile(global, &cfg)?;
            let prompt = format!(
                "Replace the configuration stored in {}?",
                resolved.store.display()
            );
            if !confirm(&prompt, "import", global.yes)? {
                return Err(CliError::Cancelled {
                    action: "import".into(),
                });
            }

            let store = FileStore::new(resolved.store);
            outcome.dispatch(&store, &mut sink).await?;
            output::print_success(
                &format!(
                    "Imported {} into {} ({} changes)",
                    args.file.display(),
                    store.path().display(),
                    outcome.report.total()
                ),
                color,
                global.quiet,
            );
        }
    }
    Ok(())
}
