mod budget;
mod category;
mod expense;
mod message;

pub use budget::Budgets;
pub use category::Category;
pub use expense::Expense;
pub use message::ChatMessage;
