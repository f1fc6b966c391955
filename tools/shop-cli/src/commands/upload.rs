//! Image upload command.

use anyhow::{bail, Context as _, Result};

use super::UploadArgs;
use crate::context::Context;
use crate::output::format_bytes;

/// Run the upload command.
pub async fn run(args: UploadArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    if !path.is_file() {
        bail!("File not found: {}", path.display());
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let size = bytes.len() as u64;

    ctx.output
        .debug(&format!("Uploading {} ({})", file_name, format_bytes(size)));
    let spinner = ctx.output.spinner(&format!("Uploading {}...", file_name));
    let result = ctx.api().upload_image(&file_name, bytes).await;
    spinner.finish_and_clear();
    let image_path = result.context("Upload failed")?;
    let url = ctx.config.api.image_url(&image_path);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": image_path,
            "url": url,
            "size": size,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "Uploaded {} ({})",
        file_name,
        format_bytes(size)
    ));
    ctx.output.kv("Path", &image_path);
    ctx.output.kv("URL", &url);
    Ok(())
}
