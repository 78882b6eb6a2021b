// Reference Content - compiled-in learning material
//
// Each content kind lives in its own file:
// - A plain record type (serde-derived, shared with the API server)
// - A catalog seeded with the default data
// - Lookups by id or index
//
// Content is read-only at runtime; the catalogs never mutate after seeding.

pub mod glossary;
pub mod investing;
pub mod questions;
pub mod tips;

pub use glossary::{GlossaryCatalog, GlossaryTerm};
pub use investing::{InvestmentGuide, InvestmentOption};
pub use questions::{QuestionBank, QuizQuestion};
pub use tips::{SavingsTip, TipCatalog, TipCategory, TipTicker};
