use anyhow::Result;
use chrono::{DateTime, Duration, Local};
use rust_decimal::Decimal;

use crate::chat::Assistant;
use crate::format::format_amount;
use crate::models::{Budgets, Category, ChatMessage, Expense};
use crate::receipt::{self, MockReceiptAdapter, ReceiptAdapter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Insert,
    EditBudget,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Insert => write!(f, "CHAT"),
            Self::EditBudget => write!(f, "BUDGET"),
        }
    }
}

/// All mutable session state lives here, in the caller layer. The core
/// (`Assistant`, `ReceiptAdapter`) only computes; this struct commits
/// the records those calls return.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) chat_input: String,
    pub(crate) budget_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    assistant: Assistant,
    receipt_adapter: Box<dyn ReceiptAdapter>,

    pub(crate) expenses: Vec<Expense>,
    pub(crate) budgets: Budgets,
    pub(crate) messages: Vec<ChatMessage>,

    pub(crate) income: Decimal,
    pub(crate) savings_goal: Decimal,
    pub(crate) current_savings: Decimal,

    // Budget editing
    pub(crate) budget_index: usize,

    // Chat viewport (clamped each render frame)
    pub(crate) chat_scroll: usize,
    pub(crate) stick_to_bottom: bool,
}

impl App {
    pub(crate) fn new() -> Result<Self> {
        let now = Local::now();

        Ok(Self {
            running: true,
            input_mode: InputMode::Normal,
            chat_input: String::new(),
            budget_input: String::new(),
            status_message: String::new(),
            show_help: false,

            assistant: Assistant::new()?,
            receipt_adapter: Box::new(MockReceiptAdapter),

            expenses: seeded_expenses(now),
            budgets: seeded_budgets(),
            messages: seeded_messages(now),

            income: Decimal::from(2100),
            savings_goal: Decimal::from(5000),
            current_savings: Decimal::from(3200),

            budget_index: 0,
            chat_scroll: 0,
            stick_to_bottom: true,
        })
    }

    /// Send the typed message through one chat turn and commit whatever
    /// comes back: the user message, an expense record if one was
    /// stated, and the reply.
    pub(crate) fn submit_chat(&mut self) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.chat_input.clear();

        self.messages.push(ChatMessage::from_user(text.clone()));

        let (reply, new_expense) = self
            .assistant
            .handle_message(&text, &self.expenses, &self.budgets);

        if let Some(expense) = new_expense {
            self.set_status(format!(
                "Recorded {} for {}",
                format_amount(expense.amount),
                expense.category
            ));
            self.expenses.push(expense);
        }

        self.messages.push(ChatMessage::from_bot(reply));
        self.stick_to_bottom = true;
    }

    /// Run the receipt adapter and commit the result. Adapter errors
    /// surface in the status bar; nothing is recorded and nothing is
    /// retried.
    pub(crate) fn upload_receipt(&mut self, filename: &str) {
        // The demo session has no real image bytes to hand over
        match self.receipt_adapter.process_receipt(&[]) {
            Ok(data) => {
                self.expenses.push(receipt::receipt_expense(&data, filename));
                self.messages
                    .push(ChatMessage::from_bot(receipt::receipt_reply(&data)));
                self.stick_to_bottom = true;
            }
            Err(e) => self.set_status(format!("Receipt error: {e}")),
        }
    }

    pub(crate) fn selected_category(&self) -> Category {
        Category::ALL[self.budget_index.min(Category::ALL.len() - 1)]
    }

    /// Step the selected category's budget by `delta` * $50, clamped at
    /// zero.
    pub(crate) fn adjust_budget(&mut self, delta: i64) {
        let category = self.selected_category();
        let next = (self.budgets.limit(category) + Decimal::from(50 * delta)).max(Decimal::ZERO);
        self.budgets.set(category, next);
        self.set_status(format!("{category} budget: {}", format_amount(next)));
    }

    /// Apply the typed budget amount to the selected category.
    pub(crate) fn apply_budget_input(&mut self) {
        let category = self.selected_category();
        match self.budget_input.parse::<Decimal>() {
            Ok(limit) if limit >= Decimal::ZERO => {
                self.budgets.set(category, limit);
                self.set_status(format!("{category} budget: {}", format_amount(limit)));
            }
            _ => self.set_status(format!("Invalid amount: {}", self.budget_input)),
        }
        self.budget_input.clear();
    }

    pub(crate) fn total_spent(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub(crate) fn category_spending(&self, category: Category) -> Decimal {
        Expense::total_for(&self.expenses, category)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

// ── Demo session bootstrap ───────────────────────────────────

fn seeded_budgets() -> Budgets {
    let mut budgets = Budgets::new();
    budgets.set(Category::Rent, Decimal::from(1200));
    budgets.set(Category::Food, Decimal::from(400));
    budgets.set(Category::Travel, Decimal::from(300));
    budgets.set(Category::Miscellaneous, Decimal::from(200));
    budgets
}

fn seeded_expenses(now: DateTime<Local>) -> Vec<Expense> {
    vec![
        Expense {
            amount: Decimal::from(1200),
            category: Category::Rent,
            description: "Monthly rent".into(),
            timestamp: now - Duration::days(5),
        },
        Expense {
            amount: Decimal::from(240),
            category: Category::Food,
            description: "Groceries".into(),
            timestamp: now - Duration::hours(5),
        },
        Expense {
            amount: Decimal::from(45),
            category: Category::Food,
            description: "Groceries today".into(),
            timestamp: now - Duration::minutes(10),
        },
        Expense {
            amount: Decimal::from(180),
            category: Category::Travel,
            description: "Train tickets".into(),
            timestamp: now - Duration::hours(2),
        },
        Expense {
            amount: Decimal::from(95),
            category: Category::Miscellaneous,
            description: "Subscription".into(),
            timestamp: now - Duration::hours(1),
        },
    ]
}

fn seeded_messages(now: DateTime<Local>) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            text: "Hello! I'm BudgetBot, your personal finance manager. Tell me about your \
                   spending, or upload a receipt!"
                .into(),
            is_user: false,
            timestamp: now - Duration::minutes(15),
        },
        ChatMessage {
            text: "I spent $45 on groceries today".into(),
            is_user: true,
            timestamp: now - Duration::minutes(10),
        },
        ChatMessage {
            text: "Got it! I've recorded $45.00 for Food. You've spent $285 out of your $400 \
                   Food budget this month. You're doing great - 29% remaining!"
                .into(),
            is_user: false,
            timestamp: now - Duration::minutes(8),
        },
    ]
}
