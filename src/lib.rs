// Vitt Sikho - Core Library
// Exposes all modules for use in the TUI, the API server, and tests

pub mod content;
pub mod emi;
pub mod quiz;
pub mod store;

// Only compiled when the terminal front end is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use content::{
    GlossaryCatalog, GlossaryTerm, InvestmentGuide, InvestmentOption, QuestionBank, QuizQuestion,
    SavingsTip, TipCatalog, TipCategory, TipTicker,
};
pub use emi::{compute, format_inr, LoanInput, LoanResult, ValidationError};
pub use quiz::QuizRound;
pub use store::{load_theme, save_theme, setup_database, Theme};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
