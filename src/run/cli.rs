use anyhow::Result;

use crate::chat::Assistant;
use crate::format::format_amount;
use crate::models::Budgets;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "chat" => cli_chat(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetbot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("BudgetBot — chat-driven personal finance assistant");
    println!();
    println!("Usage: budgetbot [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  chat <message>                Run one chat turn and print the reply");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// One stateless turn: no prior expenses, no budgets configured. Handy
/// for trying out what the extractor makes of a message.
fn cli_chat(args: &[String]) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: budgetbot chat <message>");
    }

    let text = args.join(" ");
    let assistant = Assistant::new()?;
    let (reply, expense) = assistant.handle_message(&text, &[], &Budgets::new());

    if let Some(expense) = &expense {
        println!(
            "Parsed: {} {} ({})",
            format_amount(expense.amount),
            expense.category,
            expense.description
        );
    }
    println!("{reply}");

    Ok(())
}
