use prettytable::format::FormatBuilder;
use prettytable::Table;
use trayctl::core::strategy::StrategyKind;
use trayctl::core::system::System;

pub mod args;
pub mod cli;

pub fn explain_strategies() -> String {
    let mut t = Table::new();
    let indent_table_format = FormatBuilder::new().padding(4, 1).build();
    t.set_format(indent_table_format);
    for k in StrategyKind::all() {
        let available = if System::available_strategies().contains(k) {
            ""
        } else {
            "(not available here)"
        };
        t.add_row(row![k.key(), k, available]);
    }
    format!("Strategies, in the order they are tried:\n{}", t)
}
