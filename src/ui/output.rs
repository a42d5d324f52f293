use concept_engine::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], ctx: &UiContext) {
    for line in format_config_warnings(warnings, ctx) {
        eprintln!("{line}");
    }
}

fn format_config_warnings(warnings: &[ConfigWarning], ctx: &UiContext) -> Vec<String> {
    let icon = Icon::Warning.colored(ctx.color, ctx.unicode);
    let mut lines = Vec::new();
    for w in warnings {
        if let Some(line) = w.line {
            lines.push(format!(
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            ));
        } else {
            lines.push(format!(
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                w.file.display()
            ));
        }

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}
