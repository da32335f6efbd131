//! `export`: package the stored configuration as a download file.

use chrono::Utc;

use rdio_admin_core::{FileStore, export};

use crate::cli::{ExportArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: ExportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let resolved = config::resolve_profile(global, &cfg)?;
    let color = output::should_color(global.color);

    let store = FileStore::new(&resolved.store);
    let file = export(&store, Utc::now()).await?;

    if args.data_uri {
        output::print_output(&file.data_uri(), global.quiet);
        return Ok(());
    }

    let dir = args.dir.unwrap_or(resolved.export_dir);
    tokio::fs::create_dir_all(&dir).await?;
    let path = dir.join(&file.file_name);
    tokio::fs::write(&path, &file.bytes).await?;

    output::print_success(
        &format!("Exported {} ({})", path.display(), file.mime),
        color,
        global.quiet,
    );
    output::print_output(&path.display().to_string(), global.quiet);
    Ok(())
}
