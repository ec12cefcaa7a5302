//! Submit a sample quote request through the full pipeline
//!
//! Usage: `cargo run --example submit_order [config.yaml]`

use order_form::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => FormConfig::from_yaml_file(&path)?,
        None => FormConfig::default_config(),
    };

    let pipeline = SubmissionPipeline::new(config, MailtoComposer::new(), TokioScheduler)?;
    let mut state = pipeline.new_state();

    // A first attempt with a missing name and a bad quantity
    state.form = FormValues::from_pairs([
        (FormField::Phone, "0726565457"),
        (FormField::ProductType, "Business Cards"),
        (FormField::Quantity, "0"),
        (FormField::Description, "Glossy finish"),
    ]);
    pipeline.submit(&mut state).await?;
    if let Some(banner) = &state.banner {
        println!("{}\n", banner.render_text());
    }

    state.form.set(FormField::FullName, "Jane Doe");
    state.form.set(FormField::Quantity, "50");
    for field in FormField::ALL {
        pipeline.blur(field, &mut state);
    }

    let sent = pipeline.submit(&mut state).await?.into_result()?;
    println!("Link: {}\n", sent.message.link);
    if let Some(banner) = &state.banner {
        println!("{}\n", banner.render_text());
    }

    let clipboard = MemoryClipboard::new();
    copy_order_summary(&sent.summary, &clipboard, &UnavailableClipboard, &LogNotifier);

    Ok(())
}
