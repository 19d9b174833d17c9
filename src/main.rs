use anyhow::Context;
use clap::Parser;
use manifest_gui::cli::Cli;
use manifest_gui::config::Settings;
use manifest_gui::{ConfigDefaults, Document, FormRenderer, Manifest};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only markup and defaults
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    let manifest = Manifest::from_path(&cli.manifest)?;
    info!(
        "Rendering {} properties from {}",
        manifest.properties.len(),
        cli.manifest.display()
    );

    let container_id = settings.form.container_id.clone();
    let renderer = FormRenderer::new(settings.form);
    let mut document = Document::form_shell(&container_id);
    let mut defaults = ConfigDefaults::new();
    renderer.render_manifest(&mut document, &manifest, &mut defaults)?;

    let markup = if cli.fragment {
        document
            .get_element_by_id(&container_id)
            .map(|container| container.to_html())
            .unwrap_or_default()
    } else {
        document.to_html()
    };
    println!("{}", markup);

    let defaults_json = defaults.to_json_pretty()?;
    match &cli.defaults_out {
        Some(path) => {
            std::fs::write(path, defaults_json)
                .with_context(|| format!("Failed to write defaults to {}", path.display()))?;
            info!("Wrote {} defaults to {}", defaults.len(), path.display());
        }
        None => println!("{}", defaults_json),
    }

    Ok(())
}
