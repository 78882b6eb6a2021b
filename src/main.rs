use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Optional override for where the preference file lives
    let db_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("vitt-sikho.db"));

    run_ui_mode(&db_path)
}

#[cfg(feature = "tui")]
fn run_ui_mode(db_path: &Path) -> Result<()> {
    use rusqlite::Connection;
    use vitt_sikho::{store, ui};

    println!("🖥️  Loading Vitt Sikho...\n");

    let conn = Connection::open(db_path)?;
    store::setup_database(&conn)?;

    // Theme is read once here; every toggle inside the UI writes it back
    let theme = store::load_theme(&conn)?;
    println!("✓ Preferences loaded ({} theme)", theme.as_str());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(theme);
    ui::run_ui(&mut app, &conn)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_db_path: &Path) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use web UI: cargo run --bin vitt-server --features server");
    std::process::exit(1);
}
