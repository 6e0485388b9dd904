use colored::Colorize;
use florist::api::{CmdMessage, MessageLevel};
use florist::model::{Flower, Order, DATE_FORMAT};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 12;
const CUSTOMER_WIDTH: usize = 20;

const MENU_ITEMS: [&str; 10] = [
    "Add a flower",
    "Find a flower",
    "Update a flower",
    "Delete a flower",
    "Add an order",
    "Display orders",
    "Sort orders",
    "Save data",
    "Load data",
    "Quit",
];

pub(super) fn render_menu() -> String {
    let mut out = format!("\n{}\n", "===== FLOWER SHOP =====".bold());
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n", i + 1, item));
    }
    out
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub(super) fn render_flowers(flowers: &[Flower]) -> String {
    if flowers.is_empty() {
        return String::new();
    }

    let header = format!(
        "| {:>3} | {:<9} | {} | {:<11} | {:>10} | {} |",
        "No.",
        "Flower ID",
        pad_to_width("Name", NAME_WIDTH),
        "Import Date",
        "Unit Price",
        pad_to_width("Category", CATEGORY_WIDTH),
    );
    let rule = "-".repeat(header.width());
    let mut out = format!("{}\n{}\n{}\n", rule, header.bold(), rule);

    for (i, flower) in flowers.iter().enumerate() {
        out.push_str(&format!(
            "| {:>3} | {:<9} | {} | {:<11} | {:>10.3} | {} |\n",
            i + 1,
            flower.id,
            pad_to_width(&flower.name, NAME_WIDTH),
            flower.import_date.format(DATE_FORMAT),
            flower.unit_price,
            pad_to_width(&flower.category, CATEGORY_WIDTH),
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Order table with one row per order and a totals row at the bottom.
pub(super) fn render_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return String::new();
    }

    let header = format!(
        "| {:>3} | {:<8} | {:<10} | {} | {:>12} | {:>12} |",
        "No.",
        "Order ID",
        "Order Date",
        pad_to_width("Customer", CUSTOMER_WIDTH),
        "Flower Count",
        "Order Total",
    );
    let rule = "-".repeat(header.width());
    let mut out = format!("{}\n{}\n{}\n", rule, header.bold(), rule);

    let mut count: u64 = 0;
    let mut total = 0.0;
    for (i, order) in orders.iter().enumerate() {
        count += order.total_quantity();
        total += order.total_cost();
        out.push_str(&format!(
            "| {:>3} | {:<8} | {:<10} | {} | {:>12} | {:>12.3} |\n",
            i + 1,
            order.id,
            order.date.format(DATE_FORMAT),
            pad_to_width(&order.customer, CUSTOMER_WIDTH),
            order.total_quantity(),
            order.total_cost(),
        ));
    }
    out.push_str(&format!(
        "{rule}\n| {:<50} | {:>12} | {:>12.3} |\n{rule}\n",
        "Total",
        count,
        total,
    ));
    out
}

/// Left-aligns `s` in exactly `width` terminal columns. Text that does not fit
/// is cut at a character boundary and ends with an ellipsis.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut shown = String::new();
    if s.width() > width {
        let mut used = 0;
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width.saturating_sub(1) {
                break;
            }
            shown.push(c);
            used += w;
        }
        shown.push('…');
    } else {
        shown.push_str(s);
    }
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}
