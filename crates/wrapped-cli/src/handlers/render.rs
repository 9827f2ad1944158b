use serde::Serialize;
use std::path::PathBuf;
use wrapped_web::{
    render_deck, render_document, DocumentOptions, IdSource, SequentialIdSource, UuidIdSource,
};

use crate::cli::RenderArgs;
use crate::context::CliContext;
use crate::output;

#[derive(Serialize)]
struct RenderReport {
    path: PathBuf,
    slides: usize,
    paginated_cards: usize,
    bytes: usize,
}

pub fn handle(ctx: &CliContext, args: &RenderArgs) -> anyhow::Result<()> {
    let mut ids: Box<dyn IdSource> = if args.stable_ids {
        Box::new(SequentialIdSource::new())
    } else {
        Box::new(UuidIdSource)
    };
    let slides = render_deck(&ctx.deck, ids.as_mut())?;

    let mut options = DocumentOptions::from_config(&ctx.config);
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    options.stylesheets = args.stylesheets.clone();
    options.scripts = args.scripts.clone();

    let html = render_document(&slides, &options)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
            tracing::info!("Wrote {} slides to {}", slides.len(), path.display());
            output::output_success(RenderReport {
                path: path.clone(),
                slides: slides.len(),
                paginated_cards: slides.iter().filter(|s| s.state.is_some()).count(),
                bytes: html.len(),
            })
        }
        None => {
            print!("{}", html);
            Ok(())
        }
    }
}
