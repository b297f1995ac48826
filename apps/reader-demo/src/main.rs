use anyhow::Context;
use oneaxis_app_shell::{AppShell, ShellConfig};
use reader_demo::{app::reader_app, SWEEP_WIDTHS, VIEWPORT_HEIGHT};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== OneAxis Geometry Reader Demo ===");
    println!("Resizes the viewport and prints what the readers measured.");
    println!();

    let first_width = SWEEP_WIDTHS.first().copied().unwrap_or(800.0);
    let mut shell = AppShell::new(
        ShellConfig::new().viewport(first_width, VIEWPORT_HEIGHT),
        reader_app,
    );

    for &width in SWEEP_WIDTHS {
        shell.set_viewport(width, VIEWPORT_HEIGHT);
        let passes = shell
            .update()
            .with_context(|| format!("settling at width {width}"))?;
        log::info!("width {width}: settled in {passes} pass(es)");

        println!("viewport {width}x{VIEWPORT_HEIGHT}:");
        for text in shell.scene().texts() {
            let rect = shell.scene().find_text(text);
            match rect {
                Some(rect) => println!("  {text:<24} at ({}, {})", rect.x, rect.y),
                None => println!("  {text}"),
            }
        }
    }
    Ok(())
}
