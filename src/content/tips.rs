// 🐷 Savings Tips - household savings advice + rotating daily tips
//
// Two kinds of content live here:
// - SavingsTip cards, grouped by category, shown on the Savings page
// - One-line daily tips rotated in the banner every few seconds

use serde::{Deserialize, Serialize};

// ============================================================================
// TIP CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipCategory {
    /// Getting-started habits
    Beginner,

    /// Budgeting frameworks
    Planning,

    /// Set-and-forget transfers
    Automation,

    /// Trimming recurring spend
    ExpenseManagement,
}

impl TipCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::Beginner => "Beginner",
            TipCategory::Planning => "Planning",
            TipCategory::Automation => "Automation",
            TipCategory::ExpenseManagement => "Expense Management",
        }
    }
}

// ============================================================================
// SAVINGS TIP
// ============================================================================

/// A savings-tip card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsTip {
    /// Stable identifier from the source data
    pub id: String,

    pub title: String,

    pub description: String,

    /// Suggested amount, kept as display text ("₹500/month", "20% of income")
    pub amount: String,

    pub category: TipCategory,
}

// ============================================================================
// TIP CATALOG
// ============================================================================

/// All savings tips, in display order
pub struct TipCatalog {
    tips: Vec<SavingsTip>,
}

impl TipCatalog {
    /// Create a catalog seeded with the default tips
    pub fn new() -> Self {
        let mut catalog = TipCatalog { tips: Vec::new() };
        catalog.register_default_tips();
        catalog
    }

    fn register_default_tips(&mut self) {
        self.register(SavingsTip {
            id: "1".to_string(),
            title: "Start Small, Think Big".to_string(),
            description: "Begin with just ₹100-500 monthly savings and gradually \
                          increase as your income grows."
                .to_string(),
            amount: "₹500/month".to_string(),
            category: TipCategory::Beginner,
        });

        self.register(SavingsTip {
            id: "2".to_string(),
            title: "Use the 50-30-20 Rule".to_string(),
            description: "50% for needs, 30% for wants, 20% for savings and \
                          investments."
                .to_string(),
            amount: "20% of income".to_string(),
            category: TipCategory::Planning,
        });

        self.register(SavingsTip {
            id: "3".to_string(),
            title: "Automate Your Savings".to_string(),
            description: "Set up automatic transfers to your savings account right \
                          after salary credit."
                .to_string(),
            amount: "₹5,000/month".to_string(),
            category: TipCategory::Automation,
        });

        self.register(SavingsTip {
            id: "4".to_string(),
            title: "Cut Unnecessary Subscriptions".to_string(),
            description: "Review and cancel unused OTT, gym, or app subscriptions to \
                          save money."
                .to_string(),
            amount: "₹2,000/month".to_string(),
            category: TipCategory::ExpenseManagement,
        });
    }

    /// Add a tip to the catalog
    pub fn register(&mut self, tip: SavingsTip) {
        self.tips.push(tip);
    }

    /// All tips in display order
    pub fn tips(&self) -> &[SavingsTip] {
        &self.tips
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DAILY TIPS
// ============================================================================

/// One-liners shown in the rotating banner
pub fn daily_tips() -> &'static [&'static str] {
    &[
        "Track your daily expenses using apps like Walnut or ET Money to identify \
         spending patterns.",
        "Invest in ELSS mutual funds to save tax under Section 80C while building \
         wealth.",
        "Keep 6 months of expenses as emergency fund in a liquid fund or savings \
         account.",
        "Start investing early - even ₹1000 monthly SIP can create significant \
         wealth over 20 years.",
        "Use credit cards wisely - pay full amount before due date to avoid \
         interest charges.",
    ]
}

// ============================================================================
// TIP TICKER
// ============================================================================

/// Rotation state for the daily-tip banner.
///
/// The index steps by one on every tick and wraps at the end of the list, so a
/// 5-item list visits 0,1,2,3,4 and returns to 0.
#[derive(Debug, Clone, Copy)]
pub struct TipTicker {
    index: usize,
    len: usize,
}

impl TipTicker {
    pub fn new(len: usize) -> Self {
        TipTicker { index: 0, len }
    }

    /// Current tip index, None when the list is empty
    pub fn current(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.index)
        }
    }

    /// Advance to the next tip, wrapping at the end of the list
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_four_tips() {
        let catalog = TipCatalog::new();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(TipCategory::Beginner.as_str(), "Beginner");
        assert_eq!(TipCategory::ExpenseManagement.as_str(), "Expense Management");
    }

    #[test]
    fn test_catalog_covers_all_categories() {
        let catalog = TipCatalog::new();
        for category in [
            TipCategory::Beginner,
            TipCategory::Planning,
            TipCategory::Automation,
            TipCategory::ExpenseManagement,
        ] {
            assert!(
                catalog.tips().iter().any(|t| t.category == category),
                "no tip in category {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_ticker_cycles_through_five_tips() {
        let mut ticker = TipTicker::new(5);
        let mut seen = vec![ticker.current().unwrap()];

        for _ in 0..5 {
            ticker.advance();
            seen.push(ticker.current().unwrap());
        }

        // Starting at 0, five ticks over a 5-item list wrap back to 0
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_ticker_matches_daily_tip_list() {
        let tips = daily_tips();
        assert_eq!(tips.len(), 5);

        let mut ticker = TipTicker::new(tips.len());
        for _ in 0..tips.len() {
            let idx = ticker.current().unwrap();
            assert!(idx < tips.len());
            ticker.advance();
        }
        assert_eq!(ticker.current(), Some(0));
    }

    #[test]
    fn test_empty_ticker_is_inert() {
        let mut ticker = TipTicker::new(0);
        assert_eq!(ticker.current(), None);
        ticker.advance();
        assert_eq!(ticker.current(), None);
    }
}
