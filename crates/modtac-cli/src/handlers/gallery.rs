use crate::cli::{GalleryAction, ServeArgs};
use crate::context::CliContext;
use crate::output;
use modtac_core::Source;
use modtac_gallery::{GalleryResponse, GalleryServer, GALLERY_ROUTE};
use std::sync::Arc;

pub async fn handle(ctx: &CliContext, action: GalleryAction) -> anyhow::Result<()> {
    match action {
        GalleryAction::List { dir, prefix } => {
            let gallery = ctx.gallery(dir, prefix);
            match gallery.list().await {
                Ok(images) => output::output_success(GalleryResponse { images }),
                Err(e) => output::output_error(&format!(
                    "Failed to read gallery directory {}: {}",
                    gallery.dir().display(),
                    e
                )),
            }
        }
    }
    Ok(())
}

pub async fn handle_serve(ctx: &CliContext, args: ServeArgs) -> anyhow::Result<()> {
    let gallery = ctx.gallery(args.dir, args.prefix);
    if !gallery.dir().is_dir() {
        tracing::warn!(
            "Gallery directory {} does not exist; serving an empty list",
            gallery.dir().display()
        );
    }

    let bind = args.bind.unwrap_or(ctx.config.gallery.bind);
    let server = GalleryServer::bind(bind, Arc::new(gallery)).await?;
    let addr = server.local_addr()?;
    output::output_success(serde_json::json!({
        "listening": format!("http://{}{}", addr, GALLERY_ROUTE),
    }));

    server
        .serve_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;
    Ok(())
}
